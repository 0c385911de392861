use axum::{extract::State, Form};
use axum_htmx::HxRequest;
use maud::{Markup, Render as _};
use serde::Deserialize;
use utoipa::ToSchema;
use utoipa_axum::routes;

use crate::{
    origin::PageOrigin,
    result_area::CapturedArea,
    routes::RouteType,
    service::HttpSnippetService,
    submitter::{FormInputs, SnippetSubmitter},
};

use super::home;

pub const PATH: &str = "/submit";

pub fn routes() -> Vec<RouteType> {
    vec![RouteType::OpenApi(routes!(post_submit))]
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitForm {
    #[serde(default)]
    content: String,
    #[serde(rename = "expiresIn", default)]
    expires_in: String,
}

impl FormInputs for SubmitForm {
    fn content(&self) -> String {
        self.content.clone()
    }

    fn expires_in(&self) -> String {
        self.expires_in.clone()
    }
}

/// Save a snippet and render the result area
///
/// htmx requests get the `#result` element alone; plain form posts get the
/// whole page back with the form still filled in.
#[utoipa::path(
    method(post),
    path = PATH,
    request_body(content = SubmitForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = OK, description = "Rendered result area", body = str, content_type = "text/html")
    )
)]
async fn post_submit(
    State(service): State<HttpSnippetService>,
    HxRequest(is_htmx): HxRequest,
    PageOrigin(origin): PageOrigin,
    Form(form): Form<SubmitForm>,
) -> Markup {
    let area = CapturedArea::default();
    SnippetSubmitter::new(service, &form, &area, origin)
        .submit()
        .await;
    let view = area.snapshot();

    if is_htmx {
        view.render()
    } else {
        home::snippet_page(&form.content, &form.expires_in, &view)
    }
}
