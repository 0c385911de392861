use axum::routing::get;
use axum_extra::response::JavaScript;

use crate::routes::RouteType;

pub const PATH: &str = "/submit.js";

pub fn routes() -> Vec<RouteType> {
    vec![RouteType::Undocumented((PATH, get(get_submit_js)))]
}

async fn get_submit_js() -> JavaScript<&'static str> {
    JavaScript(include_str!("submit.js"))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::server;

    #[tokio::test]
    async fn serves_page_script() {
        let response = server(None).get(super::PATH).await;

        response.assert_status_ok();
        assert!(response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("javascript")));
        let text = response.text();
        assert!(text.contains("'HX-Request': 'true'"));
        assert!(text.contains("outerHTML"));
    }
}
