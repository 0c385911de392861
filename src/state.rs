use std::{ops::Deref, sync::Arc};

use axum::extract::FromRef;

use crate::{
    service::HttpSnippetService,
    settings::{ArcSettings, Settings},
};

#[derive(Clone)]
pub struct AppState(Arc<InnerState>);

impl AppState {
    pub fn new(state: InnerState) -> Self {
        Self(Arc::new(state))
    }

    pub fn from_settings(settings: ArcSettings, http_client: reqwest::Client) -> Self {
        let snippet_service = HttpSnippetService::new(
            http_client,
            settings.backend_origin(),
            &settings.service.create_path,
        );

        Self::new(InnerState {
            settings,
            snippet_service,
        })
    }
}

impl Deref for AppState {
    type Target = InnerState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct InnerState {
    pub settings: Arc<Settings>,
    pub snippet_service: HttpSnippetService,
}

impl FromRef<AppState> for ArcSettings {
    fn from_ref(state: &AppState) -> Self {
        state.settings.clone()
    }
}

impl FromRef<AppState> for HttpSnippetService {
    fn from_ref(state: &AppState) -> Self {
        state.snippet_service.clone()
    }
}
