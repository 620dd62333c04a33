//! REST client implementation for the legacy Ecwid API.
//!
//! This module provides the [`RestClient`] type for making typed JSON
//! requests with path normalization and uniform error translation.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::EcwidConfig;

/// Typed JSON client for the legacy Ecwid REST API.
///
/// Provides `get_json`, `post_json` and `put_json`. Response bodies are
/// decoded with `serde`; a 404 on GET becomes `Ok(None)`.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::collections::BTreeMap;
/// use ecwid_api::EcwidConfig;
/// use ecwid_api::clients::rest::RestClient;
/// use tokio_util::sync::CancellationToken;
///
/// let client = RestClient::new(&EcwidConfig::default());
///
/// let mut query = BTreeMap::new();
/// query.insert("secure_auth_key".to_string(), "token".to_string());
///
/// let profile: Option<serde_json::Value> = client
///     .get_json("1003/profile", query, &CancellationToken::new())
///     .await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    #[must_use]
    pub fn new(config: &EcwidConfig) -> Self {
        tracing::debug!(api_url = config.api_url().as_ref(), "Creating Ecwid REST client");

        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// Returns `Ok(None)` when the server answers 404.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Deserialize`] if the body does not decode into `T`.
    /// Returns [`RestError::Http`] for every other HTTP-level error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: BTreeMap<String, String>,
        cancel: &CancellationToken,
    ) -> Result<Option<T>, RestError> {
        match self
            .make_request(HttpMethod::Get, path, None, query, cancel)
            .await
        {
            Ok(response) => Ok(Some(serde_json::from_value(response.body)?)),
            Err(RestError::Http(HttpError::Response(e))) if e.code == 404 => {
                tracing::debug!(path, "Ecwid API returned 404, treating as absent");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Sends a POST request and decodes the JSON body.
    ///
    /// `body` is optional: legacy update calls carry their parameters in the
    /// query string.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Deserialize`] if the body does not decode into `T`.
    /// Returns [`RestError::Http`] for HTTP-level errors, including 404.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: BTreeMap<String, String>,
        body: Option<serde_json::Value>,
        cancel: &CancellationToken,
    ) -> Result<T, RestError> {
        let response = self
            .make_request(HttpMethod::Post, path, body, query, cancel)
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Sends a PUT request with a serialized body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Deserialize`] if `body` fails to serialize or the
    /// response does not decode into `T`.
    /// Returns [`RestError::Http`] for HTTP-level errors, including 404.
    pub async fn put_json<B, T>(
        &self,
        path: &str,
        query: BTreeMap<String, String>,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<T, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self
            .make_request(HttpMethod::Put, path, Some(body), query, cancel)
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: BTreeMap<String, String>,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }
        if !query.is_empty() {
            builder = builder.query(query);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client
            .request(request, cancel)
            .await
            .map_err(Into::into)
    }
}

/// Strips leading `/` characters and rejects an empty path.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}
