//! HTTP client for Ecwid API communication.
//!
//! This module provides the [`HttpClient`] type for making requests to the
//! Ecwid API with rate-limit handling and cooperative cancellation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::EcwidConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Ecwid API.
///
/// The client handles:
/// - URL construction from the configured API base URL
/// - Default headers including User-Agent
/// - Waiting out 429 lock windows, bounded by the configured maximum wait
/// - Racing every network call against a [`CancellationToken`]
///
/// Authentication is not a header in the legacy API; callers add the
/// `secure_auth_key` query parameter themselves.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ecwid_api::EcwidConfig;
/// use ecwid_api::clients::{HttpClient, HttpRequest, HttpMethod};
/// use tokio_util::sync::CancellationToken;
///
/// let client = HttpClient::new(&EcwidConfig::default());
///
/// let request = HttpRequest::builder(HttpMethod::Get, "123/orders")
///     .query_param("secure_auth_key", "token")
///     .build()
///     .unwrap();
///
/// let response = client.request(request, &CancellationToken::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI, always ending in `/`.
    base_uri: String,
    default_headers: HashMap<String, String>,
    retry_interval: Duration,
    max_wait: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &EcwidConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Ecwid API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.api_url().as_ref().to_string(),
            default_headers,
            retry_interval: Duration::from_secs(config.retry_interval()),
            max_wait: config.max_wait(),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Ecwid API.
    ///
    /// Every non-2xx response becomes [`HttpError::Response`]; callers decide
    /// what a 404 means for them. A 429 is retried after `Retry-After` (or
    /// the configured retry interval) until the configured maximum wait is
    /// used up.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - The lock window outlasted the maximum wait (`MaxRetries`)
    /// - `cancel` fired before the response arrived (`Cancelled`)
    pub async fn request(
        &self,
        request: HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path.trim_start_matches('/'));

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let started = Instant::now();
        let mut tries: u32 = 0;
        loop {
            if cancel.is_cancelled() {
                return Err(HttpError::Cancelled);
            }
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
            };
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                tries,
                "Sending request to Ecwid API"
            );

            let response = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(HttpError::Cancelled),
                response = Self::send(req_builder) => response?,
            };

            if response.is_ok() {
                return Ok(response);
            }

            let code = response.code;
            let reason = reqwest::StatusCode::from_u16(code)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("Something happened to the HTTP call.");
            let message = response.error_message(reason);

            if !(response.is_locked() && request.retry_on_lock) {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            let delay = self.calculate_retry_delay(&response);
            let waited = started.elapsed();
            if waited.checked_add(delay).map_or(true, |total| total > self.max_wait) {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries,
                    waited_secs: waited.as_secs(),
                    message,
                }));
            }

            tracing::warn!(
                path = %request.path,
                tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Ecwid API is rate limited, waiting before retry"
            );

            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(HttpError::Cancelled),
                () = tokio::time::sleep(delay) => {}
            }
        }
    }

    /// Sends one request and reads the whole body.
    async fn send(req_builder: reqwest::RequestBuilder) -> Result<HttpResponse, reqwest::Error> {
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Uses `Retry-After` when the server sent one, the configured interval otherwise.
    ///
    /// A `Retry-After` too large for a [`Duration`] saturates to [`Duration::MAX`].
    fn calculate_retry_delay(&self, response: &HttpResponse) -> Duration {
        response.retry_request_after.map_or(self.retry_interval, |secs| {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        })
    }
}
