//! Response metadata returned alongside decoded results.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

/// Transport metadata of a completed call.
///
/// Holds what is left of the underlying `reqwest::Response` once its body
/// has been consumed by the decoding step.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
}

impl Response {
    pub(crate) fn from_raw(raw: &reqwest::Response) -> Self {
        Self {
            status: raw.status(),
            headers: raw.headers().clone(),
            url: raw.url().clone(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the response.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// A decoded result paired with the response it came from.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    /// The decoded payload.
    pub data: T,
    /// Transport metadata.
    pub response: Response,
}

impl<T> Envelope<T> {
    /// Discard the response metadata and keep the payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Map the payload to a different type.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Envelope<U> {
        Envelope {
            data: f(self.data),
            response: self.response,
        }
    }
}
