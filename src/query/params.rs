//! The immutable orders query value and its typed setters.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::query::errors::ValidationError;
use crate::query::status::{validate_fulfillment_statuses, validate_payment_statuses};

/// Parameter name of the page size.
pub const LIMIT: &str = "limit";

/// Parameter name of the page offset.
pub const OFFSET: &str = "offset";

/// Parameter name of the merged status filter.
pub const STATUSES: &str = "statuses";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single query parameter value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryValue {
    /// A text value, sent as is.
    Text(String),
    /// An integer value, sent in decimal.
    Integer(i64),
}

impl QueryValue {
    /// Returns the value as a non-negative integer, if it is one.
    ///
    /// Text values holding a decimal number count as numbers too.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => u64::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Integer)
    }
}

/// Identifies an order either by its plain number or by its vendor number.
///
/// The vendor number is the order number decorated with the store's
/// prefix and suffix, e.g. `"SHOP-1024"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrderRef {
    /// The plain order number.
    Number(u64),
    /// The vendor order number.
    Vendor(String),
}

impl From<u64> for OrderRef {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for OrderRef {
    fn from(vendor_number: &str) -> Self {
        Self::Vendor(vendor_number.to_string())
    }
}

impl From<String> for OrderRef {
    fn from(vendor_number: String) -> Self {
        Self::Vendor(vendor_number)
    }
}

impl From<OrderRef> for QueryValue {
    fn from(order: OrderRef) -> Self {
        match order {
            OrderRef::Number(number) => number.into(),
            OrderRef::Vendor(vendor_number) => Self::Text(vendor_number),
        }
    }
}

/// Filter parameters for the legacy orders endpoint.
///
/// An `OrdersQuery` is a plain value: every setter consumes it and returns
/// the updated query, so a query can be cloned and reused without any
/// shared state. Each parameter name appears at most once; setting it again
/// replaces the previous value. Status setters are the exception: they
/// append to the `statuses` parameter.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use ecwid_api::query::{OrdersQuery, QueryValue};
///
/// let query = OrdersQuery::new()
///     .from_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
///     .customer_id(None)
///     .statuses("paid accepted", "shipped")
///     .unwrap()
///     .limit(50);
///
/// assert_eq!(
///     query.get("from_date"),
///     Some(&QueryValue::Text("2024-01-31".to_string()))
/// );
/// assert_eq!(
///     query.get("statuses"),
///     Some(&QueryValue::Text("PAID,ACCEPTED,SHIPPED".to_string()))
/// );
/// assert_eq!(query.get("customer_id"), Some(&QueryValue::Text("null".to_string())));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrdersQuery {
    params: BTreeMap<String, QueryValue>,
}

// Verify OrdersQuery is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrdersQuery>();
};

impl OrdersQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.params.get(name)
    }

    /// Returns all parameters.
    #[must_use]
    pub const fn params(&self) -> &BTreeMap<String, QueryValue> {
        &self.params
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders every parameter as a query string value.
    #[must_use]
    pub fn to_query_pairs(&self) -> BTreeMap<String, String> {
        self.params
            .iter()
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    }

    /// Inserts `value` under `name`, replacing any previous value.
    #[must_use]
    pub fn add_or_update(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Sets a parameter this crate does not model. No validation is done.
    #[must_use]
    pub fn custom(self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.add_or_update(name, value)
    }

    /// Orders placed on this day.
    #[must_use]
    pub fn date(self, date: NaiveDate) -> Self {
        self.add_date("date", date)
    }

    /// Orders placed on or after this day.
    #[must_use]
    pub fn from_date(self, date: NaiveDate) -> Self {
        self.add_date("from_date", date)
    }

    /// Orders placed on or before this day.
    #[must_use]
    pub fn to_date(self, date: NaiveDate) -> Self {
        self.add_date("to_date", date)
    }

    /// Orders changed on or after this day.
    #[must_use]
    pub fn from_update_date(self, date: NaiveDate) -> Self {
        self.add_date("from_update_date", date)
    }

    /// Orders changed on or before this day.
    #[must_use]
    pub fn to_update_date(self, date: NaiveDate) -> Self {
        self.add_date("to_update_date", date)
    }

    /// A single order, by number or vendor number.
    #[must_use]
    pub fn order(self, order: impl Into<OrderRef>) -> Self {
        self.add_or_update("order", order.into())
    }

    /// Orders numbered at or above this one.
    #[must_use]
    pub fn from_order(self, order: impl Into<OrderRef>) -> Self {
        self.add_or_update("from_order", order.into())
    }

    /// Orders of one customer. `None` selects anonymous orders.
    #[must_use]
    pub fn customer_id(self, customer_id: Option<u64>) -> Self {
        match customer_id {
            Some(id) => self.add_or_update("customer_id", id),
            None => self.add_or_update("customer_id", "null"),
        }
    }

    /// Orders with this customer email. `None` or `""` selects orders
    /// without an email.
    #[must_use]
    pub fn customer_email(self, customer_email: Option<&str>) -> Self {
        self.add_or_update("customer_email", customer_email.unwrap_or_default())
    }

    /// Page size. The server caps it at 200.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.add_or_update(LIMIT, limit)
    }

    /// Number of orders to skip.
    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.add_or_update(OFFSET, offset)
    }

    /// Adds payment and fulfillment statuses to the filter.
    ///
    /// Both inputs are comma or whitespace separated and case-insensitive.
    /// Tokens are appended after those already present, payment first.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStatus`] if any token is unknown.
    pub fn statuses(self, payment: &str, fulfillment: &str) -> Result<Self, ValidationError> {
        let mut tokens = validate_payment_statuses(payment)?;
        tokens.extend(validate_fulfillment_statuses(fulfillment)?);
        Ok(self.append_statuses(tokens))
    }

    /// Adds payment statuses to the filter. Blank input leaves the query unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStatus`] if any token is unknown.
    pub fn add_payment_statuses(self, payment: &str) -> Result<Self, ValidationError> {
        let tokens = validate_payment_statuses(payment)?;
        Ok(self.append_statuses(tokens))
    }

    /// Adds fulfillment statuses to the filter. Blank input leaves the query unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStatus`] if any token is unknown.
    pub fn add_fulfillment_statuses(self, fulfillment: &str) -> Result<Self, ValidationError> {
        let tokens = validate_fulfillment_statuses(fulfillment)?;
        Ok(self.append_statuses(tokens))
    }

    /// Returns the stored page size, if it is a non-negative number.
    #[must_use]
    pub fn limit_value(&self) -> Option<u64> {
        self.get(LIMIT).and_then(QueryValue::as_u64)
    }

    /// Returns the stored offset, if it is a non-negative number.
    #[must_use]
    pub fn offset_value(&self) -> Option<u64> {
        self.get(OFFSET).and_then(QueryValue::as_u64)
    }

    fn add_date(self, name: &str, date: NaiveDate) -> Self {
        self.add_or_update(name, date.format(DATE_FORMAT).to_string())
    }

    fn append_statuses(self, tokens: Vec<String>) -> Self {
        if tokens.is_empty() {
            return self;
        }

        let mut merged: Vec<String> = match self.get(STATUSES) {
            Some(existing) => existing
                .to_string()
                .split(',')
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect(),
            None => Vec::new(),
        };
        merged.extend(tokens);

        self.add_or_update(STATUSES, merged.join(","))
    }
}
