//! Orders: listing, counting, auth probes and bulk updates.
//!
//! # Overview
//!
//! - [`LegacyClient`]: Calls the legacy orders endpoints for one shop
//! - [`fetch_all_pages`] / [`PageSource`]: The pagination walk and its page supplier
//! - [`OrdersPage`], [`Order`]: Wire types
//! - [`OrdersUpdate`], [`UpdateOrdersResponse`]: Bulk update request and result
//! - [`OrdersError`]: Error type for every operation here
//!
//! # Pagination
//!
//! Pages are fetched one after another. The walk continues while the last
//! page was non-empty and `offset + count < total`, advancing `offset` by
//! the page size. A 404 ends the walk. Firing the cancellation token fails
//! the whole call with [`OrdersError::Cancelled`].

mod client;
mod errors;
mod models;
mod pagination;

pub use client::LegacyClient;
pub use errors::OrdersError;
pub use models::{Order, OrdersPage, OrdersUpdate, UpdateOrdersResponse};
pub use pagination::{fetch_all_pages, PageSource, MAX_PAGE_SIZE};
