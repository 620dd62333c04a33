//! Wire types of the legacy orders endpoint.

use serde::{Deserialize, Serialize};

use crate::query::{FulfillmentStatus, PaymentStatus};

/// One page of orders as returned by `GET {shop_id}/orders`.
///
/// `count` is the number of orders in this page and `total` the number of
/// orders matching the filter across all pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    /// Orders in this page.
    pub count: u64,
    /// Orders matching the filter.
    pub total: u64,
    /// The orders themselves. Older responses name this field `order`.
    #[serde(default, alias = "order")]
    pub orders: Vec<Order>,
    /// URL of the next page, when the server provides one.
    #[serde(rename = "nextUrl", default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
}

/// A single order.
///
/// Only the fields used for filtering are typed. Every other field is kept
/// as received in [`extra`](Self::extra) and written back unchanged on
/// serialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Plain order number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    /// Order number with the store's prefix and suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_number: Option<String>,
    /// Payment status as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    /// Fulfillment status as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    /// Every other field of the order.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Order {
    /// Parses [`payment_status`](Self::payment_status), if it is a known status.
    #[must_use]
    pub fn payment(&self) -> Option<PaymentStatus> {
        self.payment_status.as_deref()?.parse().ok()
    }

    /// Parses [`fulfillment_status`](Self::fulfillment_status), if it is a known status.
    #[must_use]
    pub fn fulfillment(&self) -> Option<FulfillmentStatus> {
        self.fulfillment_status.as_deref()?.parse().ok()
    }
}

/// Changes applied by [`LegacyClient::update_orders`](crate::orders::LegacyClient::update_orders)
/// to every order matching a query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrdersUpdate {
    /// New payment status.
    pub payment_status: Option<PaymentStatus>,
    /// New fulfillment status.
    pub fulfillment_status: Option<FulfillmentStatus>,
    /// New shipping tracking code.
    pub shipping_tracking_code: Option<String>,
}

impl OrdersUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new payment status.
    #[must_use]
    pub const fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    /// Sets the new fulfillment status.
    #[must_use]
    pub const fn fulfillment_status(mut self, status: FulfillmentStatus) -> Self {
        self.fulfillment_status = Some(status);
        self
    }

    /// Sets the new shipping tracking code.
    #[must_use]
    pub fn shipping_tracking_code(mut self, code: impl Into<String>) -> Self {
        self.shipping_tracking_code = Some(code.into());
        self
    }

    /// Returns `true` if no change is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.payment_status.is_none()
            && self.fulfillment_status.is_none()
            && self.shipping_tracking_code.is_none()
    }

    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.payment_status {
            pairs.push(("new_payment_status", status.as_str().to_string()));
        }
        if let Some(status) = self.fulfillment_status {
            pairs.push(("new_fulfillment_status", status.as_str().to_string()));
        }
        if let Some(code) = &self.shipping_tracking_code {
            pairs.push(("new_shipping_tracking_code", code.clone()));
        }
        pairs
    }
}

/// Result of an update call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrdersResponse {
    /// Orders matched by the query.
    #[serde(default)]
    pub count: u64,
    /// Orders actually changed.
    #[serde(default)]
    pub success: u64,
}
