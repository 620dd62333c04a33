//! # Ecwid API Rust Client
//!
//! A Rust client for the legacy Ecwid REST API, with typed order queries,
//! automatic pagination, and cooperative cancellation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`EcwidConfig`] and [`EcwidConfigBuilder`]
//! - Validated newtypes for store identifiers and auth tokens
//! - An immutable [`OrdersQuery`] with typed, validating filter setters
//! - Offset pagination that merges every page into one result
//! - Auth probes, order counts and bulk order updates via [`LegacyClient`]
//! - An async HTTP client that waits out rate-limit lock windows
//!
//! ## Quick Start
//!
//! ```rust
//! use ecwid_api::{AuthToken, Credentials, EcwidConfig, ShopId};
//!
//! let config = EcwidConfig::builder()
//!     .max_seconds_to_wait(120)
//!     .build()
//!     .unwrap();
//!
//! let credentials = Credentials::new(
//!     ShopId::new(1003).unwrap(),
//!     Some(AuthToken::new("orders-key").unwrap()),
//!     Some(AuthToken::new("general-key").unwrap()),
//! );
//! # let _ = (config, credentials);
//! ```
//!
//! ## Fetching Orders
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use ecwid_api::{EcwidConfig, LegacyClient};
//! use tokio_util::sync::CancellationToken;
//!
//! let client = LegacyClient::new(&EcwidConfig::default()).configure_shop(credentials);
//! let cancel = CancellationToken::new();
//!
//! if !client.check_orders_auth(&cancel).await? {
//!     return Err("orders token rejected".into());
//! }
//!
//! let query = client
//!     .orders()
//!     .from_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .statuses("PAID", "AWAITING_PROCESSING PROCESSING")?;
//!
//! let orders = client.get_orders(&query, &cancel).await?;
//! println!("{} orders to ship", orders.len());
//! ```
//!
//! ## Errors
//!
//! Every layer has its own error type: [`ConfigError`] for missing or
//! invalid settings, [`ValidationError`] for bad filter input, [`HttpError`]
//! and [`RestError`](clients::rest::RestError) for transport failures, and
//! [`OrdersError`] wrapping them all. A 404 is never an error: it reads as
//! an absent page or an empty result.
//!
//! ## Logging
//!
//! Requests are traced with the `tracing` crate at `debug` level; rate-limit
//! retries at `warn`. Install a subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and status filters validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable queries**: Every setter returns a new query value

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod orders;
pub mod query;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{ApiUrl, AuthToken, EcwidConfig, EcwidConfigBuilder, ShopId};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export query and order types
pub use orders::{LegacyClient, Order, OrdersError, OrdersPage, OrdersUpdate, UpdateOrdersResponse};
pub use query::{FulfillmentStatus, OrderRef, OrdersQuery, PaymentStatus, ValidationError};
