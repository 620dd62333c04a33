//! Store credentials for authenticated API calls.

use crate::config::{AuthToken, ShopId};
use crate::error::ConfigError;

/// Name of the query parameter carrying the auth token on every call.
pub const AUTH_QUERY_PARAM: &str = "secure_auth_key";

/// Identifies a store and holds the tokens needed to call its API.
///
/// The crate never stores or refreshes credentials; callers load them from
/// wherever they keep secrets and hand them to
/// [`LegacyClient::configure_shop`](crate::orders::LegacyClient::configure_shop).
///
/// # Thread Safety
///
/// `Credentials` is `Send + Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// The store this client talks to.
    pub shop_id: ShopId,

    /// Token scoped to the Order API.
    pub orders_token: Option<AuthToken>,

    /// General token for the other endpoints.
    pub general_token: Option<AuthToken>,
}

impl Credentials {
    /// Creates new credentials.
    #[must_use]
    pub const fn new(
        shop_id: ShopId,
        orders_token: Option<AuthToken>,
        general_token: Option<AuthToken>,
    ) -> Self {
        Self {
            shop_id,
            orders_token,
            general_token,
        }
    }

    /// Returns the orders token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when no orders token was provided.
    pub fn orders_token(&self) -> Result<&AuthToken, ConfigError> {
        self.orders_token
            .as_ref()
            .ok_or(ConfigError::MissingToken { scope: "orders" })
    }

    /// Returns the general token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when no general token was provided.
    pub fn general_token(&self) -> Result<&AuthToken, ConfigError> {
        self.general_token
            .as_ref()
            .ok_or(ConfigError::MissingToken { scope: "general" })
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};
