use std::{fmt, str::FromStr};

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Host;
use axum_htmx::HxCurrentUrl;
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;
use url::Url;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Scheme, host and port of a page, serialized without a trailing slash
/// (`https://bin.example.com`, `http://127.0.0.1:8000`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

#[derive(Error, Debug)]
pub enum OriginError {
    #[error("invalid origin: {0}")]
    Parse(#[from] url::ParseError),

    #[error("{0} has no tuple origin")]
    Opaque(String),
}

impl Origin {
    pub fn from_url(url: &Url) -> Result<Self, OriginError> {
        match url.origin() {
            origin @ url::Origin::Tuple(..) => Ok(Self(origin.ascii_serialization())),
            url::Origin::Opaque(_) => Err(OriginError::Opaque(url.to_string())),
        }
    }

    /// Appends `path` to the origin exactly as given.
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Origin {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_url(&Url::parse(s)?)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Origin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

/// The origin of the page the request came from.
///
/// htmx reports the browser's address in `HX-Current-URL`; plain form posts
/// fall back to the scheme and host the request was addressed to.
#[derive(Debug, Clone)]
pub struct PageOrigin(pub Origin);

impl<S> FromRequestParts<S> for PageOrigin
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let HxCurrentUrl(current_url) = HxCurrentUrl::from_request_parts(parts, state)
            .await
            .map_err(|err| err.into_response())?;

        if let Some(origin) = current_url.and_then(|uri| uri.to_string().parse().ok()) {
            return Ok(Self(origin));
        }

        let OriginalUri(original_uri) = OriginalUri::from_request_parts(parts, state)
            .await
            .map_err(|err| err.into_response())?;

        let Host(host) = Host::from_request_parts(parts, state)
            .await
            .map_err(|err| err.into_response())?;

        let scheme = parts
            .headers
            .get(FORWARDED_PROTO)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .or_else(|| original_uri.scheme_str().map(str::to_owned))
            .unwrap_or("http".to_string());

        let origin = format!("{scheme}://{host}")
            .parse()
            .map_err(|err: OriginError| {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            })?;

        Ok(Self(origin))
    }
}
