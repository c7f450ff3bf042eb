//! Configuration types for the Data2Rest SDK.
//!
//! This module provides the configuration used to build a
//! [`Data2RestClient`](crate::Data2RestClient).
//!
//! # Overview
//!
//! - [`ClientConfig`]: The configuration struct holding all SDK settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`BaseUrl`]: A validated API base URL with trailing slashes stripped
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiVersion`]: The API response format to negotiate
//!
//! # Example
//!
//! ```rust
//! use data2rest::{ClientConfig, ApiKey, ApiVersion, BaseUrl};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/api").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Data2Rest SDK.
///
/// Immutable once built. `ClientConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use data2rest::{ClientConfig, ApiKey, BaseUrl};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com/api/").unwrap())
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://api.example.com/api");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    api_key: ApiKey,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `base_url` and `api_key`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::V2`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(ClientConfig {
            base_url,
            api_key,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
