use utoipa_axum::routes;

use crate::routes::RouteType;

const PATH: &str = "/api/health";

pub fn routes() -> Vec<RouteType> {
    vec![RouteType::OpenApi(routes!(get))]
}

/// Get health of the service (returns "ok")
#[utoipa::path(
    method(get),
    path = PATH,
    responses(
        (status = OK, description = "Success", body = str, content_type = "text/plain")
    )
)]
async fn get() -> &'static str {
    "ok"
}
