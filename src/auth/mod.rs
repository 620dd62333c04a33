//! Authentication types for the Ecwid API client.
//!
//! Ecwid authenticates legacy API calls with a `secure_auth_key` query
//! parameter. A store has two keys: one scoped to the Order API and a
//! general one used for the remaining endpoints (store profile, products).
//!
//! - [`Credentials`]: The store identifier together with both tokens
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::{AuthToken, Credentials, ShopId};
//!
//! let credentials = Credentials::new(
//!     ShopId::new(123).unwrap(),
//!     Some(AuthToken::new("orders-key").unwrap()),
//!     None,
//! );
//!
//! assert!(credentials.orders_token().is_ok());
//! assert!(credentials.general_token().is_err());
//! ```

pub mod credentials;

pub use credentials::{Credentials, AUTH_QUERY_PARAM};
