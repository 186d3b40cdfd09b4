//! Configuration types for the REST client.
//!
//! # Overview
//!
//! - [`ShopifyConfig`]: store domain, credentials and transport settings
//! - [`ShopifyConfigBuilder`]: a builder for [`ShopifyConfig`]
//! - [`ApiKey`] / [`ApiPassword`]: validated private-app credentials
//! - [`ShopDomain`]: a validated `*.myshopify.com` domain
//! - [`HostUrl`]: an optional origin override (proxies, local test servers)
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ApiKey, ApiPassword, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .password(ApiPassword::new("my-password").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().shop_name(), "my-store");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiPassword, HostUrl, ShopDomain};

use crate::error::ConfigError;

/// Configuration for a single Shopify store.
///
/// `ShopifyConfig` is immutable once built and is `Clone + Send + Sync`.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    api_key: ApiKey,
    password: ApiPassword,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API password.
    #[must_use]
    pub const fn password(&self) -> &ApiPassword {
        &self.password
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop`, `api_key` and `password` are required; `host` and
/// `user_agent_prefix` default to `None`.
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    api_key: Option<ApiKey>,
    password: Option<ApiPassword>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API password (required).
    #[must_use]
    pub fn password(mut self, password: ApiPassword) -> Self {
        self.password = Some(password);
        self
    }

    /// Routes requests to `host` instead of `https://{shop}`.
    ///
    /// The credentials and the `/admin/...` path are kept; only the scheme
    /// and authority change.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop`, `api_key` or
    /// `password` is not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;

        Ok(ShopifyConfig {
            shop,
            api_key,
            password,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> ShopifyConfigBuilder {
        ShopifyConfig::builder()
            .shop(ShopDomain::new("my-store").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .password(ApiPassword::new("pass").unwrap())
    }

    #[test]
    fn test_builder_requires_shop() {
        let result = ShopifyConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .password(ApiPassword::new("pass").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = ShopifyConfigBuilder::new()
            .shop(ShopDomain::new("my-store").unwrap())
            .password(ApiPassword::new("pass").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_requires_password() {
        let result = ShopifyConfigBuilder::new()
            .shop(ShopDomain::new("my-store").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "password" })
        ));
    }

    #[test]
    fn test_builder_defaults_optional_fields() {
        let config = complete_builder().build().unwrap();

        assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
        assert_eq!(config.api_key().as_ref(), "key");
        assert_eq!(config.password().as_ref(), "pass");
        assert!(config.host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://127.0.0.1:8080").unwrap();
        let config = complete_builder()
            .host(host.clone())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.host(), Some(&host));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_password() {
        let config = complete_builder().build().unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("ShopifyConfig"));
        assert!(debug_str.contains("ApiPassword(*****)"));
    }
}
