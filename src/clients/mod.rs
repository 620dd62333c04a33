//! HTTP client types for Ecwid API communication.
//!
//! This module provides the transport layer for the legacy Ecwid REST API.
//! It handles request/response processing, rate-limit waiting, and
//! cooperative cancellation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`DataType`]: Content types for request bodies
//! - [`rest::RestClient`]: Typed JSON client built on [`HttpClient`]
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::EcwidConfig;
//! use ecwid_api::clients::{HttpClient, HttpRequest, HttpMethod};
//! use tokio_util::sync::CancellationToken;
//!
//! let client = HttpClient::new(&EcwidConfig::default());
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "1003/orders")
//!     .query_param("secure_auth_key", "token")
//!     .query_param("limit", "0")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request, &CancellationToken::new()).await?;
//! ```
//!
//! # Rate Limiting
//!
//! The legacy API answers `429 Too Many Requests` while a store is locked.
//! The client waits `Retry-After` seconds (or the configured
//! `retry_interval`) and tries again until `max_seconds_to_wait` is used up,
//! then fails with [`HttpError::MaxRetries`]. Every other non-2xx status is
//! returned to the caller at once.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
