//! REST-specific error types for the Ecwid API client.
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Deserialize`]: When a response body does not match the expected type
//! - [`RestError::Http`]: Wraps underlying HTTP errors

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// Returned when a path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// The response body could not be decoded into the requested type.
    #[error("Failed to decode response body: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            Self::InvalidPath { .. } | Self::Deserialize(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_error_with_empty_path() {
        let error = RestError::InvalidPath {
            path: String::new(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: ");
    }

    #[test]
    fn test_http_error_is_transparent() {
        let rest_error: RestError = HttpError::Response(HttpResponseError {
            code: 403,
            message: "Forbidden".to_string(),
            error_reference: None,
        })
        .into();

        assert!(matches!(rest_error, RestError::Http(_)));
        assert_eq!(rest_error.to_string(), "HTTP 403: Forbidden");
        assert_eq!(rest_error.status_code(), Some(403));
    }

    #[test]
    fn test_deserialize_error_has_no_status_code() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let error = RestError::from(source);

        assert!(error.to_string().starts_with("Failed to decode response body"));
        assert_eq!(error.status_code(), None);
    }
}
