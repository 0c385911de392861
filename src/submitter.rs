use tracing::{info, instrument, warn};

use crate::{
    origin::Origin,
    result_area::{ResultArea, ResultView},
    service::SnippetService,
    snippet::SubmissionRequest,
};

/// The two form fields read on every activation.
pub trait FormInputs {
    fn content(&self) -> String;
    fn expires_in(&self) -> String;
}

impl<F: FormInputs + ?Sized> FormInputs for &F {
    fn content(&self) -> String {
        (**self).content()
    }

    fn expires_in(&self) -> String {
        (**self).expires_in()
    }
}

/// Sends the form to the snippet service and shows the outcome.
///
/// Activations are independent: nothing stops a second one while the first
/// is in flight, and whichever finishes last owns the result area.
pub struct SnippetSubmitter<S, F, A> {
    service: S,
    inputs: F,
    result_area: A,
    /// Origin the rendered link points at.
    origin: Origin,
}

impl<S, F, A> SnippetSubmitter<S, F, A>
where
    S: SnippetService,
    F: FormInputs,
    A: ResultArea,
{
    pub fn new(service: S, inputs: F, result_area: A, origin: Origin) -> Self {
        Self {
            service,
            inputs,
            result_area,
            origin,
        }
    }

    /// Runs one activation to completion.
    #[instrument(skip(self), fields(origin = %self.origin))]
    pub async fn submit(&self) {
        let request = SubmissionRequest {
            content: self.inputs.content(),
            expires_in: self.inputs.expires_in(),
        };

        let view = match self.service.create(&request).await {
            Ok(result) => {
                let link = self.origin.join(&result.url);
                info!(%link, "Snippet created");
                ResultView::Link(link)
            }
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "Snippet submission failed");
                ResultView::Error(err.to_string())
            }
        };

        self.result_area.replace(view);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use tokio::net::TcpListener;

    use crate::{result_area::CapturedArea, service::HttpSnippetService};

    struct Fields(&'static str, &'static str);

    impl FormInputs for Fields {
        fn content(&self) -> String {
            self.0.to_string()
        }

        fn expires_in(&self) -> String {
            self.1.to_string()
        }
    }

    fn http_service(backend: &Origin) -> HttpSnippetService {
        HttpSnippetService::new(reqwest::Client::new(), backend, "/create")
    }

    /// One activation with the page served from the backend's own origin.
    async fn submit_once(origin: &Origin, fields: Fields) -> ResultView {
        let area = CapturedArea::default();
        SnippetSubmitter::new(http_service(origin), fields, &area, origin.clone())
            .submit()
            .await;
        area.snapshot()
    }

    #[tokio::test]
    async fn success_renders_link_on_page_origin() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "/s/abc123" })))
            .mount(&mock_server)
            .await;

        let origin: Origin = mock_server.uri().parse().unwrap();
        let view = submit_once(&origin, Fields("some text", "1h")).await;

        assert_eq!(
            view,
            ResultView::Link(format!("{}/s/abc123", mock_server.uri()))
        );
    }

    #[tokio::test]
    async fn empty_content_is_still_sent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create"))
            .and(body_json(json!({ "content": "", "expiresIn": "10m" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "/empty" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let origin: Origin = mock_server.uri().parse().unwrap();
        let view = submit_once(&origin, Fields("", "10m")).await;

        assert_eq!(view, ResultView::Link(origin.join("/empty")));
    }

    #[tokio::test]
    async fn rejection_detail_is_shown() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "detail": "expired option invalid" })),
            )
            .mount(&mock_server)
            .await;

        let origin: Origin = mock_server.uri().parse().unwrap();
        let view = submit_once(&origin, Fields("text", "forever")).await;

        assert_eq!(view, ResultView::Error("expired option invalid".to_string()));
    }

    #[tokio::test]
    async fn rejection_without_detail_uses_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let origin: Origin = mock_server.uri().parse().unwrap();
        let view = submit_once(&origin, Fields("text", "1h")).await;

        assert_eq!(view, ResultView::Error("Something went wrong".to_string()));
    }

    #[tokio::test]
    async fn link_uses_page_origin_not_backend() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "/s/abc123" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let backend: Origin = mock_server.uri().parse().unwrap();
        let page: Origin = "https://bin.example.com".parse().unwrap();
        let area = CapturedArea::default();

        SnippetSubmitter::new(http_service(&backend), Fields("text", "1h"), &area, page)
            .submit()
            .await;

        assert_eq!(
            area.snapshot(),
            ResultView::Link("https://bin.example.com/s/abc123".to_string())
        );
    }

    #[tokio::test]
    async fn network_failure_shows_underlying_message() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let origin: Origin = format!("http://{addr}").parse().unwrap();
        let view = submit_once(&origin, Fields("text", "1h")).await;

        let ResultView::Error(message) = view else {
            panic!("expected an error view, got {view:?}");
        };
        assert!(!message.trim().is_empty());
    }

    #[tokio::test]
    async fn second_activation_replaces_the_first() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({ "content": "first", "expiresIn": "1h" })))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "detail": "nope" })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(body_json(json!({ "content": "second", "expiresIn": "1d" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "url": "/two" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let origin: Origin = mock_server.uri().parse().unwrap();
        let area = CapturedArea::default();

        SnippetSubmitter::new(http_service(&origin), Fields("first", "1h"), &area, origin.clone())
            .submit()
            .await;
        assert_eq!(area.snapshot(), ResultView::Error("nope".to_string()));

        SnippetSubmitter::new(http_service(&origin), Fields("second", "1d"), &area, origin.clone())
            .submit()
            .await;
        assert_eq!(area.snapshot(), ResultView::Link(origin.join("/two")));
    }

    #[tokio::test]
    async fn link_is_origin_and_path_byte_for_byte() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "url": "/Ab-_9%2Fx?y=1" })),
            )
            .mount(&mock_server)
            .await;

        let origin: Origin = mock_server.uri().parse().unwrap();
        let view = submit_once(&origin, Fields("text", "1h")).await;

        assert_eq!(
            view,
            ResultView::Link(format!("{}{}", origin.as_str(), "/Ab-_9%2Fx?y=1"))
        );
    }
}
