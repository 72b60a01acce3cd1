//! Error types for Kaiten API operations.

use std::fmt;

use reqwest::{Method, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Prefix used when an error body does not carry a `message` field.
pub(crate) const UNKNOWN_ERROR_FORMAT: &str = "failed to parse unknown error format";

/// Errors that can occur during Kaiten API operations.
#[derive(Debug, Error)]
pub enum KaitenError {
    /// Configuration is missing or incomplete.
    #[error("Kaiten configuration required: {0}")]
    ConfigMissing(String),

    /// A request path could not be unescaped.
    #[error("Invalid request path '{0}'")]
    InvalidPath(String),

    /// The API answered with a non-200 status.
    #[error("{0}")]
    Api(ErrorResponse),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON encoding or decoding error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Query string encoding error.
    #[error("Failed to encode query: {0}")]
    QueryError(#[from] serde_qs::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Writing a response body into a sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KaitenError {
    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            KaitenError::Api(resp) => Some(resp.status),
            KaitenError::HttpError(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the API reported the entity as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// A non-200 answer from the Kaiten API.
///
/// Carries the request that produced it alongside the raw body and the
/// best-effort message extracted from it.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// Method of the failed request.
    pub method: Method,
    /// Scheme, host and unescaped path of the failed request.
    pub url: String,
    /// Status code returned by the server.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
    /// Human-readable message.
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ErrorResponse {
    /// Build an error from a failed request and the body the server sent.
    ///
    /// The message is taken from a `{"message": "..."}` body when present,
    /// otherwise the raw body is kept behind a fallback notice.
    pub fn new(method: Method, url: String, status: StatusCode, body: String) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) => format!("{UNKNOWN_ERROR_FORMAT}: {body}"),
        };

        Self {
            method,
            url,
            status,
            body,
            message,
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.method,
            self.url,
            self.status.as_u16(),
            self.message
        )
    }
}

/// Result type alias for Kaiten operations.
pub type Result<T> = core::result::Result<T, KaitenError>;
