//! HTTP client for Data2Rest API communication.
//!
//! This module provides the [`HttpClient`] type: the single authenticated
//! session shared by every resource of a [`Data2RestClient`](crate::Data2RestClient).

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, ClientConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// HTTP client for making requests to the Data2Rest API.
///
/// The client holds:
/// - The base URL every request path is appended to
/// - Default headers: `X-API-KEY`, `Content-Type: application/json`,
///   `User-Agent`, and for v2 the versioned `Accept` header
///
/// Each call to [`request`](Self::request) issues exactly one HTTP request.
/// There is no retry, no timeout beyond the transport defaults, and no
/// locking; concurrent use relies on the underlying `reqwest::Client`.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.example.com/api`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// No network I/O happens here.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Data2Rest Rust SDK v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        if let Some(accept) = config.api_version().accept_header() {
            default_headers.insert("Accept".to_string(), accept);
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request and returns the parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<serde_json::Value, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query.as_pairs());
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let body_text = res.text().await?;

        let response = HttpResponse::from_body(status, &body_text);
        if !response.is_ok() {
            tracing::debug!(
                "Data2Rest API returned status {} for {} {}",
                status,
                request.http_method,
                request.path
            );
        }

        response.into_result().map_err(HttpError::from)
    }
}
