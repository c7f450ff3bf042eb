//! HTTP-specific error types for the Data2Rest SDK.
//!
//! # Error Handling
//!
//! The SDK reports failures through these types:
//!
//! - [`ApiError`]: The server answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type returned by every API call
//!
//! Client (4xx) and server (5xx) failures are not distinguished and nothing
//! is retried; the caller decides how to recover.
//!
//! # Example
//!
//! ```rust,ignore
//! use data2rest::HttpError;
//!
//! match table.find(42).await {
//!     Ok(record) => println!("Record: {record}"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status, e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Message used when a failed response carries no `error` field.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Error returned when the API answers with a non-2xx status.
///
/// Displays as `[<status>] <message>`, where the message is the `error`
/// field of the response body.
///
/// # Example
///
/// ```rust
/// use data2rest::ApiError;
///
/// let error = ApiError {
///     status: 404,
///     message: "Record not found".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "[404] Record not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("[{status}] {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The `error` field of the response body, or [`UNKNOWN_ERROR`].
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all Data2Rest API calls.
///
/// Transport failures are passed through untranslated in
/// [`HttpError::Network`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A successful response did not have the expected shape.
    #[error("Failed to deserialize response body: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if the API answered with a failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }
}
