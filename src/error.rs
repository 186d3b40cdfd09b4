//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or store names are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the API key of your private app.")]
    EmptyApiKey,

    /// API password cannot be empty.
    #[error("API password cannot be empty. Please provide the password of your private app.")]
    EmptyPassword,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://127.0.0.1:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
