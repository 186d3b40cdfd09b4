//! HTTP-level error types.
//!
//! HTTP status codes are never turned into errors here: a 404 or 500 reply is
//! a successful [`HttpResponse`](crate::clients::HttpResponse). The errors in
//! this module cover requests that could not be built or sent at all.
//!
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error for everything the transport can report

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// ```rust
/// use shopify_rest::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBodyType;
/// assert_eq!(error.to_string(), "Cannot set a body without also setting body_type.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,
}

/// Unified error type for transport failures.
///
/// # Example
///
/// ```rust,ignore
/// match transport.send(request).await {
///     Ok(response) => { /* any status code, including 4xx/5xx */ }
///     Err(HttpError::Network(e)) => { /* DNS, TLS, connection errors */ }
///     Err(other) => { /* invalid request or custom transport error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The target URL could not be parsed.
    #[error("Invalid request URL: {url}")]
    InvalidUrl {
        /// The URL with credentials redacted.
        url: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Error raised by a custom [`HttpTransport`](crate::clients::HttpTransport).
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}
