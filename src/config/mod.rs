//! Configuration types for the Ecwid API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`EcwidConfig`]: The configuration struct holding transport settings
//! - [`EcwidConfigBuilder`]: A builder for constructing [`EcwidConfig`] instances
//! - [`ShopId`]: A validated store identifier
//! - [`AuthToken`]: A validated secure auth key with masked debug output
//! - [`ApiUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::{EcwidConfig, ApiUrl};
//!
//! let config = EcwidConfig::builder()
//!     .api_url(ApiUrl::new("https://app.ecwid.com/api/v1/").unwrap())
//!     .max_seconds_to_wait(120)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_seconds_to_wait(), 120);
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, AuthToken, ShopId};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the legacy REST API.
pub const DEFAULT_API_URL: &str = "https://app.ecwid.com/api/v1/";

/// Default upper bound, in seconds, on waiting out a rate-limit lock window.
pub const DEFAULT_MAX_SECONDS_TO_WAIT: u64 = 600;

/// Default interval, in seconds, between retries while the API is locked.
pub const DEFAULT_RETRY_INTERVAL: u64 = 1;

/// Configuration for the Ecwid API client.
///
/// Holds everything the transport needs that is not a per-shop credential:
/// the API base URL, the rate-limit lock window settings, and an optional
/// User-Agent prefix.
///
/// # Thread Safety
///
/// `EcwidConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct EcwidConfig {
    api_url: ApiUrl,
    max_seconds_to_wait: u64,
    retry_interval: u64,
    user_agent_prefix: Option<String>,
}

impl EcwidConfig {
    /// Creates a new builder for constructing an `EcwidConfig`.
    #[must_use]
    pub fn builder() -> EcwidConfigBuilder {
        EcwidConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the maximum number of seconds to wait for a lock window to end.
    #[must_use]
    pub const fn max_seconds_to_wait(&self) -> u64 {
        self.max_seconds_to_wait
    }

    /// Returns the retry interval in seconds.
    #[must_use]
    pub const fn retry_interval(&self) -> u64 {
        self.retry_interval
    }

    /// Returns the lock window as a [`Duration`].
    #[must_use]
    pub const fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_seconds_to_wait)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for EcwidConfig {
    fn default() -> Self {
        Self {
            api_url: ApiUrl::default(),
            max_seconds_to_wait: DEFAULT_MAX_SECONDS_TO_WAIT,
            retry_interval: DEFAULT_RETRY_INTERVAL,
            user_agent_prefix: None,
        }
    }
}

// Verify EcwidConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EcwidConfig>();
};

/// Builder for constructing [`EcwidConfig`] instances.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `max_seconds_to_wait`: 600
/// - `retry_interval`: 1
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct EcwidConfigBuilder {
    api_url: Option<ApiUrl>,
    max_seconds_to_wait: Option<u64>,
    retry_interval: Option<u64>,
    user_agent_prefix: Option<String>,
}

impl EcwidConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the maximum seconds to wait out a rate-limit lock window.
    #[must_use]
    pub const fn max_seconds_to_wait(mut self, seconds: u64) -> Self {
        self.max_seconds_to_wait = Some(seconds);
        self
    }

    /// Sets the interval between retries while the API is locked.
    #[must_use]
    pub const fn retry_interval(mut self, seconds: u64) -> Self {
        self.retry_interval = Some(seconds);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`EcwidConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRetrySetting`] if either retry setting is zero.
    pub fn build(self) -> Result<EcwidConfig, ConfigError> {
        let max_seconds_to_wait = self
            .max_seconds_to_wait
            .unwrap_or(DEFAULT_MAX_SECONDS_TO_WAIT);
        if max_seconds_to_wait == 0 {
            return Err(ConfigError::InvalidRetrySetting {
                field: "max_seconds_to_wait",
                value: max_seconds_to_wait,
            });
        }

        let retry_interval = self.retry_interval.unwrap_or(DEFAULT_RETRY_INTERVAL);
        if retry_interval == 0 {
            return Err(ConfigError::InvalidRetrySetting {
                field: "retry_interval",
                value: retry_interval,
            });
        }

        Ok(EcwidConfig {
            api_url: self.api_url.unwrap_or_default(),
            max_seconds_to_wait,
            retry_interval,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
