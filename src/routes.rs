mod api;
mod page;

use axum::{http::StatusCode, response::IntoResponse, routing::MethodRouter, Router};
use utoipa::OpenApi;
use utoipa_axum::router::{OpenApiRouter, UtoipaMethodRouter};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as _};

use crate::state::AppState;

const OPENAPI_PREFIX: &str = "/apidoc";

#[derive(OpenApi)]
#[openapi(info(description = "Front end for a temporary text bin"))]
struct ApiDoc;

pub fn routes() -> Vec<RouteType> {
    [api::routes(), page::routes()].concat()
}

#[derive(Clone)]
pub enum RouteType {
    OpenApi(UtoipaMethodRouter<AppState>),
    Undocumented((&'static str, MethodRouter<AppState>)),
}

pub fn router(state: AppState) -> Router {
    let router = routes()
        .into_iter()
        .fold(
            OpenApiRouter::with_openapi(ApiDoc::openapi()),
            |router, route| match route {
                RouteType::OpenApi(method_router) => router.routes(method_router),
                RouteType::Undocumented((path, method_router)) => {
                    router.route(path, method_router)
                }
            },
        );

    let (router, api) = router.with_state(state).split_for_parts();

    let spec_path = format!("{OPENAPI_PREFIX}/openapi.json");

    router
        .merge(Redoc::with_url(
            format!("{OPENAPI_PREFIX}/redoc"),
            api.clone(),
        ))
        .merge(RapiDoc::with_openapi(spec_path, api.clone()).path(format!("{OPENAPI_PREFIX}/rapidoc")))
        .merge(Scalar::with_url(format!("{OPENAPI_PREFIX}/scalar"), api))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found").into_response() })
}
