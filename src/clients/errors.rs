//! HTTP-specific error types for the Ecwid API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: The rate-limit lock window did not end in time
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request, &cancel).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) if e.code == 403 => println!("Rejected token"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} tries", e.tries),
//!     Err(HttpError::Cancelled) => println!("Cancelled"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is the body the server sent back, or the canonical reason
/// phrase when the body was empty.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 403,
///     message: "Invalid secure_auth_key".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 403: Invalid secure_auth_key");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Server-provided error message.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when the API stayed rate-limited for the whole wait window.
#[derive(Debug, Error)]
#[error("Exceeded maximum wait of {waited_secs}s after {tries} tries. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Seconds spent waiting before giving up.
    pub waited_secs: u64,
    /// Message from the last response.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "put".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use put without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The rate-limit lock window did not end in time.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The cancellation token fired while the request was in flight.
    #[error("The request was cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Cancelled => None,
        }
    }
}
