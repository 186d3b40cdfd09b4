//! REST-specific error types.
//!
//! - [`RestError::Config`]: credentials or store name failed validation
//! - [`RestError::InvalidPath`]: an endpoint is empty after normalization
//! - [`RestError::Serialization`]: a request body could not be encoded as JSON
//! - [`RestError::Http`]: the transport could not deliver the request
//!
//! A non-2xx status is not an error; it comes back as a normal
//! [`HttpResponse`](crate::clients::HttpResponse).

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// ```rust
/// use shopify_rest::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/".to_string() };
/// assert!(error.to_string().contains("Invalid REST API path"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// Client configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The REST API path is invalid.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// The request body could not be serialized; no request was sent.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
