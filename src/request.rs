//! Request descriptors built by [`KaitenClient::new_request`].
//!
//! [`KaitenClient::new_request`]: crate::KaitenClient::new_request

use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

/// A fully resolved request, ready to be sent.
///
/// Carries exactly one payload encoding: a JSON body for `PATCH`, `POST`
/// and `PUT`, or a query string for every other verb.
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) unescaped_path: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Vec<u8>>,
}

impl Request {
    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Resolved URL as sent on the wire. Escapes in the path are kept verbatim.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL path with percent-escapes decoded.
    pub fn unescaped_path(&self) -> &str {
        &self.unescaped_path
    }

    /// Request headers, excluding the authorization header added at send time.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Encoded JSON body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Scheme, host and unescaped path; the form used in error messages.
    pub fn display_url(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!(
                "{}://{}:{}{}",
                self.url.scheme(),
                host,
                port,
                self.unescaped_path
            ),
            None => format!("{}://{}{}", self.url.scheme(), host, self.unescaped_path),
        }
    }
}

/// Returns true for verbs whose payload travels as a JSON body.
pub(crate) fn has_json_body(method: &Method) -> bool {
    *method == Method::PATCH || *method == Method::POST || *method == Method::PUT
}
