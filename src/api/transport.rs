//! HTTP transport abstraction.
//!
//! [`OreIdClient`](crate::api::OreIdClient) never talks to the network directly.
//! Every request goes through an injected [`HttpTransport`], so any HTTP stack
//! (or a test double) can sit underneath the client.
//!
//! [`ReqwestTransport`] is the default implementation (feature `http`).
//! [`MockTransport`] (feature `test-utils`) replays canned responses and records
//! every request it sees.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::error::ApiResult;

/// HTTP verbs used by the ORE ID API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body for POST requests
    pub body: Option<String>,
}

impl HttpRequest {
    /// GET request without a body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST request carrying a JSON body.
    pub fn post_json(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body.into()),
        }
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive name match).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns the raw response.
///
/// Implementations must be safe to share between tasks. Non-success statuses
/// are NOT errors at this layer; only failures to complete the exchange are.
/// Dropping the returned future should abort the in-flight request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        (**self).send(request).await
    }
}

// =============================================================================
// reqwest
// =============================================================================

#[cfg(feature = "http")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
    use reqwest::Client;

    use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
    use crate::api::client::DEFAULT_TIMEOUT_SECS;
    use crate::api::error::{ApiError, ApiResult};

    /// [`HttpTransport`] backed by a pooled `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        /// Transport with the default 30s timeout.
        ///
        /// Fallible because building the TLS backend can fail, hence no `Default`.
        pub fn try_new() -> ApiResult<Self> {
            Self::with_options(Duration::from_secs(DEFAULT_TIMEOUT_SECS), &[])
        }

        /// Wrap an already configured client.
        pub fn from_client(client: Client) -> Self {
            Self { client }
        }

        /// Build a client with a timeout and extra default headers.
        pub fn with_options(timeout: Duration, default_headers: &[(String, String)]) -> ApiResult<Self> {
            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

            for (name, value) in default_headers {
                let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                    ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
                })?;
                let header_value = HeaderValue::from_str(value).map_err(|e| {
                    ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
                })?;
                headers.insert(header_name, header_value);
            }

            let client = Client::builder()
                .timeout(timeout)
                .pool_max_idle_per_host(10)
                .default_headers(headers)
                .build()?;

            Ok(Self { client })
        }
    }

    #[async_trait]
    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;

            Ok(HttpResponse { status, body })
        }
    }
}

// =============================================================================
// Test double
// =============================================================================

#[cfg(any(test, feature = "test-utils"))]
pub use self::mock::MockTransport;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde::Serialize;

    use super::{HttpRequest, HttpResponse, HttpTransport};
    use crate::api::error::{ApiError, ApiResult};

    /// Spy transport: answers from a queue (then a fixed fallback) and records
    /// every request.
    #[derive(Debug)]
    pub struct MockTransport {
        queued: Mutex<VecDeque<HttpResponse>>,
        fallback: HttpResponse,
        failure: Option<String>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockTransport {
        /// Answers every request with `200 {}`.
        #[must_use]
        pub fn new() -> Self {
            Self::responding(200, "{}")
        }

        /// Answers every request with the given status and body.
        #[must_use]
        pub fn responding(status: u16, body: impl Into<String>) -> Self {
            Self {
                queued: Mutex::new(VecDeque::new()),
                fallback: HttpResponse::new(status, body),
                failure: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Answers every request with `value` encoded as JSON.
        #[must_use]
        pub fn responding_json<T: Serialize>(status: u16, value: &T) -> Self {
            let body = serde_json::to_string(value).unwrap_or_default();
            Self::responding(status, body)
        }

        /// Fails every exchange with [`ApiError::Transport`].
        #[must_use]
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                failure: Some(message.into()),
                ..Self::new()
            }
        }

        /// Queue a one-shot response, served before the fallback.
        pub fn push_response(&self, status: u16, body: impl Into<String>) {
            self.queued
                .lock()
                .unwrap()
                .push_back(HttpResponse::new(status, body));
        }

        /// Every request seen so far, in order.
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.requests.lock().unwrap().last().cloned()
        }
    }

    impl Default for MockTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
            self.requests.lock().unwrap().push(request);
            if let Some(message) = &self.failure {
                return Err(ApiError::Transport(message.clone()));
            }
            let next = self.queued.lock().unwrap().pop_front();
            Ok(next.unwrap_or_else(|| self.fallback.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_json_sets_content_type() {
        let req = HttpRequest::post_json("https://x/api", "{}").header("api-key", "k");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.header_value("API-KEY"), Some("k"));
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[tokio::test]
    async fn test_mock_serves_queue_then_fallback() {
        let mock = MockTransport::responding(404, "nope");
        mock.push_response(200, "first");

        let first = mock.send(HttpRequest::get("https://x/1")).await.unwrap();
        let second = mock.send(HttpRequest::get("https://x/2")).await.unwrap();

        assert_eq!(first, HttpResponse::new(200, "first"));
        assert_eq!(second, HttpResponse::new(404, "nope"));
        assert_eq!(mock.request_count(), 2);
        assert_eq!(mock.last_request().unwrap().url, "https://x/2");
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let mock = Arc::new(MockTransport::failing("connection reset"));
        let err = mock.send(HttpRequest::get("https://x")).await.unwrap_err();
        assert_eq!(err.to_string(), "Transport error: connection reset");
        assert_eq!(mock.request_count(), 1);
    }
}
