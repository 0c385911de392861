use axum::routing::get;
use axum_extra::response::Css;

use crate::routes::RouteType;

pub const PATH: &str = "/styles.css";

pub fn routes() -> Vec<RouteType> {
    vec![RouteType::Undocumented((PATH, get(get_styles)))]
}

async fn get_styles() -> Css<&'static str> {
    Css(include_str!("styles.css"))
}
