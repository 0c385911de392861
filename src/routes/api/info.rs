use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::routes;

use crate::{routes::RouteType, settings::ArcSettings};

const PATH: &str = "/api/info";

pub fn routes() -> Vec<RouteType> {
    vec![RouteType::OpenApi(routes!(get))]
}

/// Get information about the service
#[utoipa::path(
    method(get),
    path = PATH,
    responses(
        (status = OK, description = "Success", body = inline(GetInfoResponse), content_type = "application/json")
    )
)]
async fn get(State(settings): State<ArcSettings>) -> Json<GetInfoResponse> {
    Json(GetInfoResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        repo: env!("CARGO_PKG_REPOSITORY"),
        built_at: env!("BUILD_TIMESTAMP"),
        public_url: settings.general.public_url.to_string(),
        create_path: settings.service.create_path.clone(),
    })
}

#[derive(Serialize, ToSchema)]
struct GetInfoResponse {
    name: &'static str,
    version: &'static str,
    repo: &'static str,
    built_at: &'static str,
    public_url: String,
    create_path: String,
}
