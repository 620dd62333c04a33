//! Client for the legacy Ecwid orders API.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use crate::auth::{Credentials, AUTH_QUERY_PARAM};
use crate::clients::rest::RestClient;
use crate::config::{AuthToken, EcwidConfig};
use crate::error::ConfigError;
use crate::orders::errors::OrdersError;
use crate::orders::models::{Order, OrdersPage, OrdersUpdate, UpdateOrdersResponse};
use crate::orders::pagination::{fetch_all_pages, PageSource};
use crate::query::{OrdersQuery, ValidationError};

/// Client for the legacy Ecwid orders API.
///
/// Every orders call carries the shop's orders token as the
/// `secure_auth_key` query parameter. Calls fail with
/// [`ConfigError::ShopNotConfigured`] until
/// [`configure_shop`](Self::configure_shop) has been called.
///
/// # Thread Safety
///
/// `LegacyClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ecwid_api::{AuthToken, Credentials, EcwidConfig, LegacyClient, ShopId};
/// use tokio_util::sync::CancellationToken;
///
/// let client = LegacyClient::new(&EcwidConfig::default()).configure_shop(Credentials::new(
///     ShopId::new(1003)?,
///     Some(AuthToken::new("orders-key")?),
///     None,
/// ));
///
/// let query = client.orders().add_payment_statuses("PAID")?.limit(100);
/// let orders = client.get_orders(&query, &CancellationToken::new()).await?;
/// ```
#[derive(Debug)]
pub struct LegacyClient {
    rest: RestClient,
    credentials: Option<Credentials>,
}

// Verify LegacyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LegacyClient>();
};

impl LegacyClient {
    /// Creates a client without a shop.
    #[must_use]
    pub fn new(config: &EcwidConfig) -> Self {
        Self {
            rest: RestClient::new(config),
            credentials: None,
        }
    }

    /// Sets the shop and tokens used by every call, replacing earlier ones.
    #[must_use]
    pub fn configure_shop(mut self, credentials: Credentials) -> Self {
        tracing::debug!(shop_id = %credentials.shop_id, "Configured Ecwid shop");
        self.credentials = Some(credentials);
        self
    }

    /// Returns the configured credentials, if any.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Starts a new, empty orders query.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn orders(&self) -> OrdersQuery {
        OrdersQuery::new()
    }

    /// Fetches every order matching `query`, following pagination.
    ///
    /// A 404 ends pagination early; see [`fetch_all_pages`] for how that
    /// truncates the result.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::Config`] if the shop or orders token is missing,
    /// [`OrdersError::Cancelled`] if `cancel` fires, and
    /// [`OrdersError::Rest`] if a page request fails.
    pub async fn get_orders(
        &self,
        query: &OrdersQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Order>, OrdersError> {
        let path = self.orders_path()?;
        self.orders_token()?;
        fetch_all_pages(self, &path, query, cancel).await
    }

    /// Returns `true` if the orders token is accepted, `false` on 403.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError`] for missing configuration and for every
    /// failure other than 403.
    pub async fn check_orders_auth(&self, cancel: &CancellationToken) -> Result<bool, OrdersError> {
        match self.probe_orders(cancel).await {
            Ok(_) => Ok(true),
            Err(e) if e.status_code() == Some(403) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Returns the number of orders in the store.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError`] for missing configuration or a failed request.
    pub async fn get_orders_count(&self, cancel: &CancellationToken) -> Result<u64, OrdersError> {
        let page = self.probe_orders(cancel).await?;
        Ok(page.map_or(0, |page| page.total))
    }

    /// Returns `true` if the general token is accepted by the store profile
    /// endpoint, `false` on 403.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError`] for missing configuration and for every
    /// failure other than 403.
    pub async fn check_shop_auth(&self, cancel: &CancellationToken) -> Result<bool, OrdersError> {
        let credentials = self.shop()?;
        let path = format!("{}/profile", credentials.shop_id);
        let params = auth_params(credentials.general_token()?);

        let result = self
            .rest
            .get_json::<serde_json::Value>(&path, params, cancel)
            .await
            .map_err(OrdersError::from);
        match result {
            Ok(_) => Ok(true),
            Err(e) if e.status_code() == Some(403) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Orders that are paid or awaiting payment and not yet processed.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn get_new_orders(&self, cancel: &CancellationToken) -> Result<Vec<Order>, OrdersError> {
        let query = self
            .orders()
            .statuses("AWAITING_PAYMENT PAID", "AWAITING_PROCESSING")?;
        self.get_orders(&query, cancel).await
    }

    /// Orders whose payment did not go through.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn get_non_paid_orders(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Order>, OrdersError> {
        let query = self
            .orders()
            .add_payment_statuses("AWAITING_PAYMENT CANCELLED DECLINED INCOMPLETE")?;
        self.get_orders(&query, cancel).await
    }

    /// Paid orders that have not been shipped.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn get_paid_not_shipped_orders(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Order>, OrdersError> {
        let query = self
            .orders()
            .statuses("PAID", "AWAITING_PROCESSING PROCESSING")?;
        self.get_orders(&query, cancel).await
    }

    /// Paid orders that are shipped but not delivered.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn get_shipped_not_delivered_orders(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Order>, OrdersError> {
        let query = self.orders().statuses("PAID", "SHIPPED")?;
        self.get_orders(&query, cancel).await
    }

    /// Applies `update` to every order matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NothingToUpdate`] (wrapped) if `update`
    /// is empty, [`ValidationError::UnfilteredUpdate`] if `query` carries no
    /// parameter, and [`OrdersError`] for missing configuration or a failed
    /// request.
    pub async fn update_orders(
        &self,
        query: &OrdersQuery,
        update: &OrdersUpdate,
        cancel: &CancellationToken,
    ) -> Result<UpdateOrdersResponse, OrdersError> {
        if update.is_empty() {
            return Err(ValidationError::NothingToUpdate.into());
        }
        if query.is_empty() {
            return Err(ValidationError::UnfilteredUpdate.into());
        }

        let path = self.orders_path()?;
        let mut params = query.to_query_pairs();
        for (name, value) in update.to_query_pairs() {
            params.insert(name.to_string(), value);
        }
        params.extend(auth_params(self.orders_token()?));

        tracing::debug!(path = %path, "Updating Ecwid orders");
        Ok(self.rest.post_json(&path, params, None, cancel).await?)
    }

    async fn probe_orders(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Option<OrdersPage>, OrdersError> {
        let path = self.orders_path()?;
        self.fetch_page(&path, &self.orders().limit(0), cancel).await
    }

    fn shop(&self) -> Result<&Credentials, ConfigError> {
        self.credentials
            .as_ref()
            .ok_or(ConfigError::ShopNotConfigured)
    }

    fn orders_token(&self) -> Result<&AuthToken, ConfigError> {
        self.shop()?.orders_token()
    }

    fn orders_path(&self) -> Result<String, ConfigError> {
        Ok(format!("{}/orders", self.shop()?.shop_id))
    }
}

impl PageSource for LegacyClient {
    async fn fetch_page(
        &self,
        path: &str,
        query: &OrdersQuery,
        cancel: &CancellationToken,
    ) -> Result<Option<OrdersPage>, OrdersError> {
        let mut params = query.to_query_pairs();
        params.extend(auth_params(self.orders_token()?));

        tracing::debug!(
            path,
            limit = ?query.limit_value(),
            offset = ?query.offset_value(),
            "Fetching orders page"
        );
        Ok(self.rest.get_json(path, params, cancel).await?)
    }
}

fn auth_params(token: &AuthToken) -> BTreeMap<String, String> {
    BTreeMap::from([(AUTH_QUERY_PARAM.to_string(), token.as_ref().to_string())])
}
