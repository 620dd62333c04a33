//! Error type for order operations.
//!
//! [`OrdersError`] collects every failure an orders call can surface:
//!
//! - [`OrdersError::Config`]: the shop or a token is not configured
//! - [`OrdersError::Validation`]: a query or update failed validation
//! - [`OrdersError::Rest`]: the HTTP call failed (403, 5xx, decode errors)
//! - [`OrdersError::Cancelled`]: the cancellation token fired
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get_orders(&query, &cancel).await {
//!     Ok(orders) => println!("{} orders", orders.len()),
//!     Err(e) if e.status_code() == Some(403) => println!("Token rejected"),
//!     Err(OrdersError::Cancelled) => println!("Stopped"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::rest::RestError;
use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::query::ValidationError;

/// Error type for order operations.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// Required configuration is missing.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The REST call failed.
    #[error(transparent)]
    Rest(RestError),

    /// The cancellation token fired. Orders fetched so far are discarded.
    #[error("The operation was cancelled")]
    Cancelled,
}

impl OrdersError {
    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Rest(e) => e.status_code(),
            Self::Config(_) | Self::Validation(_) | Self::Cancelled => None,
        }
    }
}

impl From<RestError> for OrdersError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(HttpError::Cancelled) => Self::Cancelled,
            other => Self::Rest(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_transport_cancellation_becomes_cancelled() {
        let error = OrdersError::from(RestError::Http(HttpError::Cancelled));
        assert!(matches!(error, OrdersError::Cancelled));
    }

    #[test]
    fn test_status_code_reaches_through_layers() {
        let error = OrdersError::from(RestError::Http(HttpError::Response(HttpResponseError {
            code: 403,
            message: "Forbidden".to_string(),
            error_reference: None,
        })));

        assert_eq!(error.status_code(), Some(403));
        assert_eq!(error.to_string(), "HTTP 403: Forbidden");
    }

    #[test]
    fn test_config_and_validation_have_no_status_code() {
        assert_eq!(
            OrdersError::from(ConfigError::ShopNotConfigured).status_code(),
            None
        );
        assert_eq!(
            OrdersError::from(ValidationError::NothingToUpdate).status_code(),
            None
        );
    }
}
