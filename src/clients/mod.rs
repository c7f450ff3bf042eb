//! HTTP client types for Data2Rest API communication.
//!
//! This module provides the transport layer under the resource handles:
//!
//! - [`HttpClient`]: The authenticated session shared by all resources
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The response handler (JSON parsing and status check)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Query`]: Ordered query parameters for collection requests
//! - [`HttpError`] / [`ApiError`]: Error types for failed calls
//!
//! # Example
//!
//! ```rust,ignore
//! use data2rest::clients::{HttpRequest, HttpMethod};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/db/5/users/42")
//!     .build()
//!     .unwrap();
//!
//! let record = client.http_client().request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;

pub use errors::{ApiError, HttpError, InvalidHttpRequestError, UNKNOWN_ERROR};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use query::Query;
