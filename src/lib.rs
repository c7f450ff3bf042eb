//! # Data2Rest Rust SDK
//!
//! A Rust client for the Data2Rest REST data API. It wraps the API's
//! database → table → record hierarchy, injects the authentication headers,
//! and turns every response into either parsed JSON or a typed error.
//!
//! ## Overview
//!
//! This SDK provides:
//! - [`Data2RestClient`]: owns the configuration and one authenticated session
//! - [`DatabaseResource`] / [`TableResource`]: URL-composing handles with
//!   `get`, `find`, `create`, `update`, `delete` and `bulk` operations
//! - [`Query`]: ordered, open-ended query parameters for filtering, sorting
//!   and paging
//! - [`RecordPage`]: typed decoding of the collection envelope
//! - [`HttpError`] / [`ApiError`]: a single API failure kind rendered as
//!   `[<status>] <message>`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use data2rest::{Data2RestClient, Query};
//! use serde_json::json;
//!
//! let client = Data2RestClient::new("https://api.example.com/api", "your-api-key")?;
//! let users = client.database(5).table("users");
//!
//! // GET /db/5/users?limit=10&sort=-id&name__like=Test%25
//! let records = users
//!     .get(&Query::new().limit(10).sort("-id").param("name__like", "Test%"))
//!     .await?;
//!
//! // GET /db/5/users/42
//! let ann = users.find(42).await?;
//!
//! // POST /db/5/users
//! let bob = users.create(&json!({"name": "Bob"})).await?;
//!
//! // POST /db/5/users/bulk
//! let result = users.bulk(&[json!({"op": "delete", "id": 1})]).await?;
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use data2rest::{ApiKey, ApiVersion, BaseUrl, ClientConfig, Data2RestClient};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/api").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_version(ApiVersion::V1)
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! let client = Data2RestClient::from_config(config);
//! ```
//!
//! ## Error Handling
//!
//! Any non-2xx response becomes [`HttpError::Api`]. Transport failures are
//! passed through as [`HttpError::Network`]. Nothing is retried.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **One request per call**: no retries, caching or hidden round-trips
//! - **Thread-safe**: the client is `Send + Sync`

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use client::Data2RestClient;
pub use config::{ApiKey, ApiVersion, BaseUrl, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, Query,
};

pub use resources::{DatabaseResource, PageMetadata, RecordPage, TableResource};
