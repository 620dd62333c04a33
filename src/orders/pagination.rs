//! Offset-based walk over every page of an orders query.
//!
//! [`fetch_all_pages`] asks a [`PageSource`] for one page at a time,
//! advancing `offset` by the page size until the server reports that the
//! last page was reached, and concatenates the orders in the order they
//! were received.
//!
//! Page size: an absent `limit` means the server default of
//! [`MAX_PAGE_SIZE`]; a larger one is rewritten to [`MAX_PAGE_SIZE`].
//! `limit = 0` is a count probe and fetches exactly one page.

use tokio_util::sync::CancellationToken;

use crate::orders::errors::OrdersError;
use crate::orders::models::{Order, OrdersPage};
use crate::query::{OrdersQuery, QueryValue, LIMIT, OFFSET};

/// Largest page the legacy API returns.
pub const MAX_PAGE_SIZE: u64 = 200;

/// Supplies single pages of orders.
///
/// Implemented by [`LegacyClient`](crate::orders::LegacyClient) over HTTP;
/// tests drive the walk with in-memory sources.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetches the page selected by `query` from `path`.
    ///
    /// Returns `Ok(None)` when the server answers 404.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError`] when the page cannot be fetched.
    async fn fetch_page(
        &self,
        path: &str,
        query: &OrdersQuery,
        cancel: &CancellationToken,
    ) -> Result<Option<OrdersPage>, OrdersError>;
}

/// Fetches every page of `query` and returns the merged orders.
///
/// The token is checked before each page and raced against each fetch.
///
/// A page answered with 404 ends the walk. A 404 on the first page yields
/// an empty result; a 404 on a later page returns only the orders received
/// before it, so the result may hold fewer than the `total` the server
/// reported.
///
/// # Errors
///
/// Returns [`OrdersError::Cancelled`] if `cancel` fires, discarding any
/// pages already received. Errors from the source are returned unchanged.
pub async fn fetch_all_pages<S>(
    source: &S,
    path: &str,
    query: &OrdersQuery,
    cancel: &CancellationToken,
) -> Result<Vec<Order>, OrdersError>
where
    S: PageSource + ?Sized,
{
    let (mut query, limit) = clamp_limit(query.clone());
    let mut offset = query.offset_value().unwrap_or(0);
    let mut orders = Vec::new();

    loop {
        if cancel.is_cancelled() {
            return Err(OrdersError::Cancelled);
        }

        let page = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(OrdersError::Cancelled),
            page = source.fetch_page(path, &query, cancel) => page?,
        };
        let Some(page) = page else {
            break;
        };

        let count = page.count;
        orders.extend(page.orders);

        if limit == 0 || count == 0 || offset.saturating_add(count) >= page.total {
            break;
        }

        offset = offset.saturating_add(limit);
        query = query.add_or_update(OFFSET, QueryValue::from(offset));
    }

    Ok(orders)
}

/// Returns the query to send and the page size to advance by.
fn clamp_limit(query: OrdersQuery) -> (OrdersQuery, u64) {
    match (query.get(LIMIT), query.limit_value()) {
        (None, _) => (query, MAX_PAGE_SIZE),
        (Some(_), Some(limit)) if limit <= MAX_PAGE_SIZE => (query, limit),
        (Some(_), _) => (
            query.add_or_update(LIMIT, QueryValue::from(MAX_PAGE_SIZE)),
            MAX_PAGE_SIZE,
        ),
    }
}
