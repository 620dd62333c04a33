//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around raw values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated Ecwid store identifier.
///
/// # Example
///
/// ```rust
/// use ecwid_api::ShopId;
///
/// let shop = ShopId::new(123).unwrap();
/// assert_eq!(shop.get(), 123);
/// assert_eq!(shop.to_string(), "123");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShopId(u64);

impl ShopId {
    /// Creates a new validated shop id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopId`] if the id is zero.
    pub fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::InvalidShopId {
                shop_id: id.to_string(),
            });
        }
        Ok(Self(id))
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShopId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().parse::<u64>().map_err(|_| ConfigError::InvalidShopId {
            shop_id: s.to_string(),
        })?;
        Self::new(id)
    }
}

impl Serialize for ShopId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for ShopId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Self::new(id).map_err(de::Error::custom)
    }
}

/// A validated Ecwid secure auth key.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AuthToken(*****)`.
///
/// # Example
///
/// ```rust
/// use ecwid_api::AuthToken;
///
/// let token = AuthToken::new("secret-key").unwrap();
/// assert_eq!(token.as_ref(), "secret-key");
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated base URL for the Ecwid REST API.
///
/// The stored URL always ends with `/` so that relative resource paths can
/// be appended directly.
///
/// # Example
///
/// ```rust
/// use ecwid_api::ApiUrl;
///
/// let url = ApiUrl::new("https://app.ecwid.com/api/v1").unwrap();
/// assert_eq!(url.as_ref(), "https://app.ecwid.com/api/v1/");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
}

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL has no http(s) scheme
    /// or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        let host_start = scheme_end + 3;
        let host = url[host_start..]
            .split(['/', '?', '#', ':'])
            .next()
            .unwrap_or_default();
        if host.is_empty() {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl Default for ApiUrl {
    /// The production legacy API endpoint.
    fn default() -> Self {
        Self {
            url: super::DEFAULT_API_URL.to_string(),
            scheme_end: "https".len(),
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_id_rejects_zero() {
        assert!(matches!(
            ShopId::new(0),
            Err(ConfigError::InvalidShopId { .. })
        ));
    }

    #[test]
    fn test_shop_id_parses_from_string() {
        let shop: ShopId = " 4870020 ".parse().unwrap();
        assert_eq!(shop.get(), 4_870_020);
        assert!("abc".parse::<ShopId>().is_err());
        assert!("0".parse::<ShopId>().is_err());
    }

    #[test]
    fn test_shop_id_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<ShopId>("0").is_err());
        let shop: ShopId = serde_json::from_str("42").unwrap();
        assert_eq!(shop.get(), 42);
    }

    #[test]
    fn test_auth_token_rejects_blank() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
        assert!(matches!(
            AuthToken::new("   "),
            Err(ConfigError::EmptyAuthToken)
        ));
    }

    #[test]
    fn test_auth_token_masks_value_in_debug() {
        let token = AuthToken::new("super-secret").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AuthToken(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_api_url_appends_trailing_slash() {
        let url = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080/");
        assert_eq!(url.scheme(), "http");

        let url = ApiUrl::new("https://app.ecwid.com/api/v1/").unwrap();
        assert_eq!(url.as_ref(), "https://app.ecwid.com/api/v1/");
    }

    #[test]
    fn test_api_url_default_matches_validated_form() {
        let validated = ApiUrl::new(super::super::DEFAULT_API_URL).unwrap();
        assert_eq!(ApiUrl::default(), validated);
    }

    #[test]
    fn test_api_url_rejects_invalid() {
        assert!(ApiUrl::new("app.ecwid.com/api/v1").is_err());
        assert!(ApiUrl::new("ftp://app.ecwid.com").is_err());
        assert!(ApiUrl::new("https://").is_err());
        assert!(ApiUrl::new("https:///api").is_err());
    }
}
