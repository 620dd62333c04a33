//! Typed filters for the legacy orders endpoint.
//!
//! # Overview
//!
//! - [`OrdersQuery`]: An immutable parameter map built with consuming setters
//! - [`QueryValue`]: A parameter value, text or integer
//! - [`OrderRef`]: An order number or vendor number
//! - [`PaymentStatus`] / [`FulfillmentStatus`]: The two status vocabularies
//! - [`ValidationError`]: Raised by setters that check their input
//!
//! Nothing in this module performs I/O. A query is handed to
//! [`LegacyClient::get_orders`](crate::orders::LegacyClient::get_orders),
//! which pages through the results.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::query::OrdersQuery;
//!
//! let query = OrdersQuery::new()
//!     .add_payment_statuses("PAID")?
//!     .add_fulfillment_statuses("AWAITING_PROCESSING PROCESSING")?
//!     .limit(100);
//!
//! assert_eq!(
//!     query.to_query_pairs()["statuses"],
//!     "PAID,AWAITING_PROCESSING,PROCESSING"
//! );
//! # Ok::<(), ecwid_api::query::ValidationError>(())
//! ```

mod errors;
mod params;
mod status;

pub use errors::{StatusKind, ValidationError};
pub use params::{OrderRef, OrdersQuery, QueryValue, LIMIT, OFFSET, STATUSES};
pub use status::{
    normalize_statuses, validate_fulfillment_statuses, validate_payment_statuses,
    FulfillmentStatus, PaymentStatus,
};
