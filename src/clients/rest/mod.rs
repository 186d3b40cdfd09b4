//! REST API client for the Shopify Admin API.
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `get_with_parameters()`, `post()`, `put()`,
//!   `delete()` and the generic `request()`
//! - [`RestError`]: error type for REST API operations
//! - [`QueryParams`]: ordered query parameters for `get_with_parameters()`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{QueryParams, RestClient};
//! use shopify_rest::resources::OrdersResponse;
//!
//! let client = RestClient::from_credentials("my-store", "api-key", "password")?;
//!
//! let mut params = QueryParams::new();
//! params.insert("status".to_string(), "any".to_string());
//!
//! let response = client.get_with_parameters("orders", &params).await?;
//! if response.is_ok() {
//!     let orders: OrdersResponse = response.json()?;
//!     println!("{} orders", orders.orders.len());
//! }
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/products` -> `products.json`
//! - Trailing `.json` is stripped and re-added: `products/5.json` -> `products/5.json`
//! - Empty paths are rejected with [`RestError::InvalidPath`]

mod client;
mod errors;

pub use client::{QueryParams, RestClient};
pub use errors::RestError;
