//! Error types for the Data2Rest SDK.
//!
//! This module contains the configuration errors returned while building a
//! client. Errors produced by API calls live in [`crate::clients`].
//!
//! # Example
//!
//! ```rust
//! use data2rest::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK.
///
/// Every constructor of a configuration type returns `Result<T, ConfigError>`
/// so invalid input is rejected before any request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide the URL of your Data2Rest API.")]
    EmptyBaseUrl,

    /// Base URL is not an absolute HTTP(S) URL.
    #[error("Invalid base URL '{url}'. Expected an absolute URL with scheme (e.g., 'https://api.example.com/api').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Data2Rest API key.")]
    EmptyApiKey,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v1', 'v2' or another non-empty version tag.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
