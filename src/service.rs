use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
    origin::Origin,
    snippet::{ErrorDetail, SubmissionRequest, SubmissionResult, SubmitError, FALLBACK_MESSAGE},
};

/// The remote service that stores snippets.
#[async_trait]
pub trait SnippetService: Send + Sync {
    async fn create(&self, request: &SubmissionRequest) -> Result<SubmissionResult, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct HttpSnippetService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSnippetService {
    /// Posts every snippet to `create_path` on `backend`.
    pub fn new(client: reqwest::Client, backend: &Origin, create_path: &str) -> Self {
        Self {
            client,
            endpoint: backend.join(create_path),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SnippetService for HttpSnippetService {
    #[instrument(skip(self, request), fields(content_len = request.content.len(), expires_in = %request.expires_in))]
    async fn create(&self, request: &SubmissionRequest) -> Result<SubmissionResult, SubmitError> {
        debug!(endpoint = %self.endpoint, "Posting snippet");

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorDetail>()
                .await
                .ok()
                .and_then(ErrorDetail::into_message)
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

            return Err(SubmitError::ServiceRejection { status, message });
        }

        Ok(response.json::<SubmissionResult>().await?)
    }
}
