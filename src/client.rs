//! Kaiten API client.
//!
//! Low-level HTTP client that builds requests, handles authentication and
//! classifies responses. Entity operations are implemented via traits on
//! model types.

use std::env;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::error::{ErrorResponse, KaitenError, Result};
use crate::request::{has_json_body, Request};
use crate::response::{Envelope, Response};

const BASE_URL_TEMPLATE: &str = "https://{tenant}.kaiten.ru/api/v1/";
const USER_AGENT: &str = concat!("kaitenapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Kaiten API client.
///
/// Holds the tenant's base URL, the API token and the HTTP transport. Nothing
/// is mutated after construction, so a single client can serve concurrent
/// calls. Clones share the same connection pool.
///
/// The transport performs no retries; wrap the client if you need them.
///
/// # Example
///
/// ```no_run
/// use kaitenapi::KaitenClient;
///
/// # fn example() -> kaitenapi::Result<()> {
/// // Tenant subdomain and token
/// let client = KaitenClient::new("acme", "your-api-token")?;
/// assert_eq!(client.base_url().as_str(), "https://acme.kaiten.ru/api/v1/");
///
/// // Or from environment variables
/// let client = KaitenClient::from_env()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct KaitenClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for KaitenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KaitenClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl KaitenClient {
    /// Create a client from environment variables.
    ///
    /// Uses `KAITEN_TOKEN` for authentication and `KAITEN_DOMAIN` for the
    /// tenant subdomain. `KAITEN_API_URL`, when set, overrides the base URL
    /// derived from the domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not set, or if neither a domain nor
    /// a base URL is available.
    pub fn from_env() -> Result<Self> {
        let token = env::var("KAITEN_TOKEN").ok();
        let domain = env::var("KAITEN_DOMAIN").ok();
        let api_url = env::var("KAITEN_API_URL").ok();

        Self::from_options(token.as_deref(), domain.as_deref(), api_url.as_deref())
    }

    /// Create a client from optional configuration values.
    ///
    /// An explicit `api_url` wins over `domain`.
    pub fn from_options(
        token: Option<&str>,
        domain: Option<&str>,
        api_url: Option<&str>,
    ) -> Result<Self> {
        let token = token.ok_or_else(|| {
            KaitenError::ConfigMissing("KAITEN_TOKEN environment variable not set".to_string())
        })?;

        match (api_url, domain) {
            (Some(url), _) => Self::with_base_url(token, url),
            (None, Some(domain)) => Self::new(domain, token),
            (None, None) => Err(KaitenError::ConfigMissing(
                "KAITEN_DOMAIN or KAITEN_API_URL environment variable not set".to_string(),
            )),
        }
    }

    /// Create a client for a tenant.
    ///
    /// The base URL is `https://<tenant>.kaiten.ru/api/v1/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant does not form a valid URL.
    pub fn new(tenant: &str, token: &str) -> Result<Self> {
        let base_url = BASE_URL_TEMPLATE.replace("{tenant}", tenant);
        Self::with_base_url(token, &base_url)
    }

    /// Create a client with an explicit base URL.
    ///
    /// # Arguments
    ///
    /// * `token` - Kaiten API token
    /// * `base_url` - Base URL for the API (e.g., `https://acme.kaiten.ru/api/v1`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(KaitenError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Replace the HTTP transport.
    ///
    /// Use this to configure timeouts, proxies or TLS on a `reqwest::Client`
    /// of your own.
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request for `path`, relative to the base URL.
    ///
    /// `path` is appended to the base URL's path, so the request always
    /// targets the client's scheme, host and port. Existing percent-escapes
    /// in `path` are sent verbatim.
    ///
    /// For `PATCH`, `POST` and `PUT` the payload is encoded as a JSON body.
    /// For every other verb a payload is encoded as query parameters.
    /// Sequences use indexed keys (`ids[0]=1&ids[1]=2`), not repeated keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be unescaped or contains `.` or
    /// `..` segments, or the payload cannot be encoded. No request is sent in
    /// that case.
    pub fn new_request<P>(&self, method: Method, path: &str, payload: Option<&P>) -> Result<Request>
    where
        P: Serialize + ?Sized,
    {
        let relative = path.trim_start_matches('/');
        let decoded =
            urlencoding::decode(relative).map_err(|_| KaitenError::InvalidPath(path.to_string()))?;
        if decoded.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(KaitenError::InvalidPath(path.to_string()));
        }

        let mut url = Url::clone(&self.base_url);
        url.set_path(&format!("{}{}", self.base_url.path(), relative));
        url.set_query(None);
        url.set_fragment(None);
        let unescaped_path = urlencoding::decode(url.path())
            .map_err(|_| KaitenError::InvalidPath(path.to_string()))?
            .into_owned();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut body = None;
        if has_json_body(&method) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            if let Some(payload) = payload {
                body = Some(serde_json::to_vec(payload)?);
            }
        } else if let Some(payload) = payload {
            let query = serde_qs::to_string(&payload)?;
            if !query.is_empty() {
                url.set_query(Some(&query));
            }
        }

        Ok(Request {
            method,
            url,
            unescaped_path,
            headers,
            body,
        })
    }

    /// Send a request and decode a successful JSON body into `T`.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn do_json<T: DeserializeOwned>(&self, request: Request) -> Result<Envelope<T>> {
        let (raw, response) = self.send(request).await?;
        let bytes = raw.bytes().await.map_err(KaitenError::HttpError)?;
        let data = serde_json::from_slice(&bytes)?;
        Ok(Envelope { data, response })
    }

    /// Send a request and stream a successful body into `writer`.
    ///
    /// Returns the number of bytes written.
    #[tracing::instrument(skip(self, request, writer), fields(method = %request.method, url = %request.url))]
    pub async fn do_stream<W>(&self, request: Request, writer: &mut W) -> Result<Envelope<u64>>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let (mut raw, response) = self.send(request).await?;

        let mut written = 0u64;
        while let Some(chunk) = raw.chunk().await.map_err(KaitenError::HttpError)? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;

        Ok(Envelope {
            data: written,
            response,
        })
    }

    /// Send a request and discard a successful body.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn do_discard(&self, request: Request) -> Result<Response> {
        let (_raw, response) = self.send(request).await?;
        Ok(response)
    }

    /// Attach credentials, dispatch, and classify the response.
    async fn send(&self, request: Request) -> Result<(reqwest::Response, Response)> {
        let Request {
            method,
            url,
            unescaped_path: _,
            headers,
            body,
        } = &request;

        let mut builder = self.http.request(method.clone(), url.clone()).headers(headers.clone());
        if let Some(body) = body {
            builder = builder.body(body.clone());
        }

        // Single point where credentials enter a request.
        let builder = builder.bearer_auth(&self.token);

        tracing::debug!("dispatching request");
        let raw = builder.send().await.map_err(KaitenError::HttpError)?;
        tracing::debug!(status = raw.status().as_u16(), "received response");

        let raw = Self::check_response(&request, raw).await?;
        let response = Response::from_raw(&raw);
        Ok((raw, response))
    }

    /// Check response status and convert errors.
    async fn check_response(request: &Request, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if status == StatusCode::OK {
            return Ok(response);
        }

        let body = response.text().await.map_err(KaitenError::HttpError)?;
        let error = ErrorResponse::new(request.method.clone(), request.display_url(), status, body);
        tracing::debug!(error = %error, "request failed");

        Err(KaitenError::Api(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Options {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        archived: Option<bool>,
    }

    fn client() -> KaitenClient {
        KaitenClient::new("acme", "test-token").unwrap()
    }

    fn options() -> Options {
        Options {
            title: Some("Eng".to_string()),
            archived: Some(false),
        }
    }

    #[test]
    fn test_client_debug() {
        let debug = format!("{:?}", client());
        assert!(debug.contains("KaitenClient"));
        assert!(debug.contains("base_url"));
        // Token should not be in debug output
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_base_url_from_tenant() {
        assert_eq!(client().base_url().as_str(), "https://acme.kaiten.ru/api/v1/");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = KaitenClient::with_base_url("token", "https://acme.kaiten.ru/api/v1").unwrap();
        let client2 = KaitenClient::with_base_url("token", "https://acme.kaiten.ru/api/v1/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_invalid_tenant_is_rejected() {
        let result = KaitenClient::new("not a host", "token");
        assert!(matches!(result, Err(KaitenError::UrlError(_))));
    }

    #[test]
    fn test_from_options() {
        let client = KaitenClient::from_options(Some("t"), Some("acme"), None).unwrap();
        assert_eq!(client.base_url().as_str(), "https://acme.kaiten.ru/api/v1/");

        let client =
            KaitenClient::from_options(Some("t"), Some("acme"), Some("http://localhost:9000/api"))
                .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:9000/api/");

        let missing_token = KaitenClient::from_options(None, Some("acme"), None);
        assert!(matches!(missing_token, Err(KaitenError::ConfigMissing(_))));

        let missing_domain = KaitenClient::from_options(Some("t"), None, None);
        assert!(matches!(missing_domain, Err(KaitenError::ConfigMissing(_))));
    }

    #[test]
    fn test_write_verbs_encode_json_body() {
        for method in [Method::PATCH, Method::POST, Method::PUT] {
            let request = client()
                .new_request(method.clone(), "spaces", Some(&options()))
                .unwrap();

            assert_eq!(request.method(), &method);
            assert_eq!(request.url().as_str(), "https://acme.kaiten.ru/api/v1/spaces");
            assert_eq!(request.url().query(), None);
            assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
            assert_eq!(request.headers()[ACCEPT], "application/json");

            let body: serde_json::Value = serde_json::from_slice(request.body().unwrap()).unwrap();
            assert_eq!(body, serde_json::json!({"title": "Eng", "archived": false}));
        }
    }

    #[test]
    fn test_write_verb_without_payload_has_no_body() {
        let request = client()
            .new_request(Method::POST, "spaces", None::<&()>)
            .unwrap();
        assert!(request.body().is_none());
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_read_verbs_encode_query() {
        for method in [Method::GET, Method::DELETE] {
            let request = client()
                .new_request(method, "spaces", Some(&options()))
                .unwrap();

            assert_eq!(request.url().query(), Some("title=Eng&archived=false"));
            assert!(request.body().is_none());
            assert!(request.headers().get(CONTENT_TYPE).is_none());
            assert_eq!(request.headers()[ACCEPT], "application/json");
        }
    }

    #[test]
    fn test_empty_query_is_omitted() {
        let empty = Options {
            title: None,
            archived: None,
        };
        let request = client()
            .new_request(Method::GET, "spaces", Some(&empty))
            .unwrap();
        assert_eq!(request.url().as_str(), "https://acme.kaiten.ru/api/v1/spaces");
    }

    #[test]
    fn test_path_keeps_escaped_and_unescaped_forms() {
        let request = client()
            .new_request(Method::GET, "spaces/a%2Fb", None::<&()>)
            .unwrap();

        assert_eq!(request.url().path(), "/api/v1/spaces/a%2Fb");
        assert_eq!(request.unescaped_path(), "/api/v1/spaces/a/b");
        assert_eq!(
            request.display_url(),
            "https://acme.kaiten.ru/api/v1/spaces/a/b"
        );
    }

    #[test]
    fn test_leading_slash_stays_under_base_path() {
        let request = client()
            .new_request(Method::GET, "/spaces/42", None::<&()>)
            .unwrap();
        assert_eq!(request.url().as_str(), "https://acme.kaiten.ru/api/v1/spaces/42");
    }

    #[test]
    fn test_absolute_url_path_stays_on_tenant_host() {
        let request = client()
            .new_request(Method::GET, "https://evil.example/steal", None::<&()>)
            .unwrap();
        assert_eq!(request.url().host_str(), Some("acme.kaiten.ru"));
        assert_eq!(request.url().scheme(), "https");
        assert!(request.url().path().starts_with("/api/v1/https:"));
    }

    #[test]
    fn test_scheme_like_segment_stays_under_base_path() {
        let request = client()
            .new_request(Method::GET, "user:42", None::<&()>)
            .unwrap();
        assert_eq!(request.url().as_str(), "https://acme.kaiten.ru/api/v1/user:42");
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        for path in ["spaces/../../v2/x", "./spaces", "spaces/%2e%2e/secret"] {
            let result = client().new_request(Method::GET, path, None::<&()>);
            assert!(
                matches!(result, Err(KaitenError::InvalidPath(_))),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_query_in_path_is_not_smuggled() {
        let request = client()
            .new_request(Method::GET, "spaces?archived=true", None::<&()>)
            .unwrap();
        assert_eq!(request.url().query(), None);
        assert_eq!(request.url().host_str(), Some("acme.kaiten.ru"));
    }

    #[test]
    fn test_map_payload_encodes_query() {
        let mut filter = std::collections::BTreeMap::new();
        filter.insert("archived", "true");
        filter.insert("title", "Eng");

        let request = client()
            .new_request(Method::GET, "spaces", Some(&filter))
            .unwrap();
        assert_eq!(request.url().query(), Some("archived=true&title=Eng"));
    }

    #[test]
    fn test_sequences_encode_with_indexed_keys() {
        #[derive(Serialize)]
        struct Ids {
            ids: Vec<u64>,
        }

        let request = client()
            .new_request(Method::GET, "spaces", Some(&Ids { ids: vec![1, 2] }))
            .unwrap();
        let query = urlencoding::decode(request.url().query().unwrap())
            .unwrap()
            .into_owned();
        assert_eq!(query, "ids[0]=1&ids[1]=2");
    }

    #[test]
    fn test_undecodable_path_is_rejected() {
        let result = client().new_request(Method::GET, "spaces/%FF", None::<&()>);
        assert!(matches!(result, Err(KaitenError::InvalidPath(_))));
    }

    #[test]
    fn test_display_url_includes_port() {
        let client = KaitenClient::with_base_url("token", "http://127.0.0.1:8080").unwrap();
        let request = client
            .new_request(Method::DELETE, "spaces/42", None::<&()>)
            .unwrap();
        assert_eq!(request.display_url(), "http://127.0.0.1:8080/spaces/42");
    }
}
