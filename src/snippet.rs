use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Shown when the service rejects a snippet without saying why.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Body of `POST /create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub content: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: String,
}

/// Body of a successful `POST /create` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionResult {
    pub url: String,
}

/// Body of a failed `POST /create` response.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorDetail {
    /// The human-readable message carried by `detail`, if there is one.
    ///
    /// Request validation failures arrive as a list of objects with a `msg`
    /// field instead of a plain string; those are joined.
    pub fn into_message(self) -> Option<String> {
        match self.detail? {
            Value::String(message) if !message.is_empty() => Some(message),
            Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                    .filter(|msg| !msg.is_empty())
                    .collect();

                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    ServiceRejection { status: StatusCode, message: String },

    /// The request never completed, or its response could not be decoded.
    #[error("{0}")]
    TransportFailure(#[from] reqwest::Error),
}

impl SubmitError {
    /// Status the service answered with, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SubmitError::ServiceRejection { status, .. } => Some(*status),
            SubmitError::TransportFailure(err) => err.status(),
        }
    }
}
