//! Typed JSON client for the legacy Ecwid REST API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that serializes request bodies
//! and deserializes response bodies with `serde`.
//!
//! # Overview
//!
//! - [`RestClient`]: `get_json()`, `post_json()` and `put_json()`
//! - [`RestError`]: Error type for REST operations
//!
//! # Not Found
//!
//! `get_json` returns `Ok(None)` for a 404 response. An absent resource is
//! a normal outcome for the legacy API, not an error.
//!
//! # Path Normalization
//!
//! Leading slashes are stripped (`/1003/orders` becomes `1003/orders`) and an
//! empty path is rejected with [`RestError::InvalidPath`].

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
