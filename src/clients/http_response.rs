//! HTTP response handling for the Data2Rest SDK.
//!
//! Every API call funnels its response through [`HttpResponse`]: the body is
//! parsed as JSON (or wrapped as `{"error": <raw text>}` when it is not JSON),
//! then [`HttpResponse::into_result`] turns a non-2xx status into an
//! [`ApiError`].

use crate::clients::errors::{ApiError, UNKNOWN_ERROR};

/// A response from the Data2Rest API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a response from its status code and raw body text.
    ///
    /// A body that is not valid JSON (including an empty body) is replaced by
    /// `{"error": <raw text>}`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use data2rest::clients::HttpResponse;
    /// use serde_json::json;
    ///
    /// let response = HttpResponse::from_body(502, "Bad Gateway");
    /// assert_eq!(response.body, json!({"error": "Bad Gateway"}));
    /// ```
    #[must_use]
    pub fn from_body(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text)
            .unwrap_or_else(|_| serde_json::json!({ "error": text }));
        Self { status, body }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the `error` field of the body, or [`UNKNOWN_ERROR`].
    ///
    /// String values are used verbatim; any other JSON value is rendered as
    /// JSON text. Bodies that are not objects have no `error` field.
    #[must_use]
    pub fn error_message(&self) -> String {
        match self.body.get("error") {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => UNKNOWN_ERROR.to_string(),
        }
    }

    /// Returns the body on success, or an [`ApiError`] for non-2xx statuses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] carrying the status code and
    /// [`error_message`](Self::error_message) when the status is not 2xx.
    pub fn into_result(self) -> Result<serde_json::Value, ApiError> {
        if self.is_ok() {
            return Ok(self.body);
        }

        Err(ApiError {
            status: self.status,
            message: self.error_message(),
        })
    }
}
