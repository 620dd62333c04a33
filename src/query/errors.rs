//! Validation errors raised while building an orders query.

use std::fmt;

use thiserror::Error;

/// Which status vocabulary a token was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Payment statuses (`PAID`, `DECLINED`, ...).
    Payment,
    /// Fulfillment statuses (`SHIPPED`, `DELIVERED`, ...).
    Fulfillment,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payment => f.write_str("payment"),
            Self::Fulfillment => f.write_str("fulfillment"),
        }
    }
}

/// Errors raised by query setters before any network call.
///
/// # Example
///
/// ```rust
/// use ecwid_api::query::{OrdersQuery, StatusKind, ValidationError};
///
/// let result = OrdersQuery::new().add_payment_statuses("PAID, LOST");
/// assert_eq!(
///     result.unwrap_err(),
///     ValidationError::InvalidStatus {
///         kind: StatusKind::Payment,
///         token: "LOST".to_string(),
///     }
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A status token is not part of its vocabulary.
    #[error("'{token}' is not a valid {kind} status")]
    InvalidStatus {
        /// The vocabulary the token was checked against.
        kind: StatusKind,
        /// The offending token, uppercased.
        token: String,
    },

    /// An update request did not carry any change.
    #[error("Nothing to update. Set a payment status, a fulfillment status or a tracking code.")]
    NothingToUpdate,

    /// An update request had no filter and would change every order.
    #[error("Refusing to update every order. Narrow the query with at least one filter.")]
    UnfilteredUpdate,
}
