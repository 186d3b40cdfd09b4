//! HTTP client types for Shopify REST Admin API communication.
//!
//! # Overview
//!
//! - [`HttpTransport`]: the minimal verb-based transport the REST client depends on
//! - [`HttpClient`]: the default `reqwest` transport
//! - [`HttpRequest`]: a request to be sent, with its fully built URL
//! - [`HttpResponse`]: status, headers and raw body of a reply
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: content types for request bodies
//! - [`rest::RestClient`]: the REST Admin API client
//! - [`rest::RestError`]: REST-specific error type
//!
//! # Status Codes
//!
//! Status codes are never classified. A 404 or 500 reply is returned as a
//! normal [`HttpResponse`]; only failures to obtain a response are errors.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, HttpTransport, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse};

pub use rest::{QueryParams, RestClient, RestError};
