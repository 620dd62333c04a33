//! Error types for the Ecwid API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and credential validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Every variant is raised before any network call is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop identifier must be a positive number.
    #[error("Invalid shop id '{shop_id}'. Expected a positive numeric store identifier.")]
    InvalidShopId {
        /// The invalid identifier that was provided.
        shop_id: String,
    },

    /// Authorization token cannot be empty.
    #[error("Authorization token cannot be empty. Please provide a valid Ecwid secure auth key.")]
    EmptyAuthToken,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide an http(s) URL (e.g., 'https://app.ecwid.com/api/v1/').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A retry setting is out of range.
    #[error("Invalid value {value} for '{field}'. The value must be at least 1 second.")]
    InvalidRetrySetting {
        /// The name of the offending setting.
        field: &'static str,
        /// The value that was provided.
        value: u64,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The client was used before a shop was configured.
    #[error("The shop is not configured. Call configure_shop() with the store id and auth tokens first.")]
    ShopNotConfigured,

    /// The token required for this call is missing.
    #[error("The {scope} token is not configured for this shop.")]
    MissingToken {
        /// Which token was needed ("orders" or "general").
        scope: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_auth_token_error_message() {
        let message = ConfigError::EmptyAuthToken.to_string();
        assert!(message.contains("cannot be empty"));
        assert!(message.contains("secure auth key"));
    }

    #[test]
    fn test_invalid_shop_id_error_message() {
        let error = ConfigError::InvalidShopId {
            shop_id: "0".to_string(),
        };
        assert!(error.to_string().contains("'0'"));
    }

    #[test]
    fn test_missing_token_names_scope() {
        let error = ConfigError::MissingToken { scope: "orders" };
        assert_eq!(
            error.to_string(),
            "The orders token is not configured for this shop."
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::ShopNotConfigured;
        let _: &dyn std::error::Error = &error;
    }
}
