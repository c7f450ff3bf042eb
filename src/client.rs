//! The Data2Rest API client.
//!
//! [`Data2RestClient`] owns the configuration and the one authenticated HTTP
//! session. Resource handles borrow it, so header setup happens exactly once.

use std::fmt;

use crate::clients::HttpClient;
use crate::config::{ApiKey, ApiVersion, BaseUrl, ClientConfig};
use crate::error::ConfigError;
use crate::resources::DatabaseResource;

/// Client for the Data2Rest API.
///
/// # Thread Safety
///
/// `Data2RestClient` is `Send + Sync`; share it behind an `Arc` or a
/// reference to issue requests from several tasks.
///
/// # Example
///
/// ```rust,ignore
/// use data2rest::Data2RestClient;
///
/// let client = Data2RestClient::new("https://api.example.com/api", "my-api-key")?;
/// let users = client.database(5).table("users");
///
/// let record = users.find(42).await?;
/// ```
#[derive(Debug)]
pub struct Data2RestClient {
    config: ClientConfig,
    http_client: HttpClient,
}

// Verify Data2RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Data2RestClient>();
};

impl Data2RestClient {
    /// Creates a client for the default API version (`v2`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL or API key is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use data2rest::{ApiVersion, Data2RestClient};
    ///
    /// let client = Data2RestClient::new("https://api.example.com/api/", "key").unwrap();
    /// assert_eq!(client.base_url().as_ref(), "https://api.example.com/api");
    /// assert_eq!(client.api_version(), &ApiVersion::V2);
    /// ```
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        Self::with_version(base_url, api_key, ApiVersion::default())
    }

    /// Creates a client for a specific API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL or API key is invalid.
    pub fn with_version(
        base_url: &str,
        api_key: &str,
        version: ApiVersion,
    ) -> Result<Self, ConfigError> {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new(base_url)?)
            .api_key(ApiKey::new(api_key)?)
            .api_version(version)
            .build()?;

        Ok(Self::from_config(config))
    }

    /// Creates a client from a prepared configuration.
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        if !config.api_version().is_known() {
            tracing::warn!(
                "Data2Rest client using unrecognized API version {}; no Accept header will be sent",
                config.api_version()
            );
        }

        let http_client = HttpClient::new(&config);

        Self {
            config,
            http_client,
        }
    }

    /// Returns a handle for the database with the given id. No I/O happens.
    #[must_use]
    pub fn database(&self, db_id: impl fmt::Display) -> DatabaseResource<'_> {
        DatabaseResource::new(self, db_id.to_string())
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the shared HTTP session.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the base URL, without trailing slashes.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.config.base_url()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        self.config.api_version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_v2() {
        let client = Data2RestClient::new("https://api.example.com/api", "key").unwrap();
        assert_eq!(client.api_version(), &ApiVersion::V2);
        assert_eq!(
            client.http_client().default_headers().get("Accept"),
            Some(&"application/vnd.data2rest.v2+json".to_string())
        );
    }

    #[test]
    fn test_with_version_v1_has_no_accept_header() {
        let client =
            Data2RestClient::with_version("https://api.example.com/api", "key", ApiVersion::V1)
                .unwrap();
        assert_eq!(client.api_version(), &ApiVersion::V1);
        assert!(client.http_client().default_headers().get("Accept").is_none());
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        assert!(matches!(
            Data2RestClient::new("", "key"),
            Err(ConfigError::EmptyBaseUrl)
        ));
        assert!(matches!(
            Data2RestClient::new("https://api.example.com", ""),
            Err(ConfigError::EmptyApiKey)
        ));
    }

    #[test]
    fn test_database_handle_keeps_id() {
        let client = Data2RestClient::new("https://api.example.com/api", "key").unwrap();
        let database = client.database(5);
        assert_eq!(database.db_id(), "5");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Data2RestClient>();
    }
}
