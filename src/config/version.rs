//! Data2Rest API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Data2Rest API responses the client asks for.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Data2Rest API version.
///
/// The server serves `v1` and `v2` response formats. Only `v2` is negotiated
/// explicitly, through the `Accept: application/vnd.data2rest.v2+json` header.
/// Any other version tag is kept as [`ApiVersion::Custom`] and sends no
/// `Accept` header, leaving the server on its default format.
///
/// # Example
///
/// ```rust
/// use data2rest::ApiVersion;
///
/// let version = ApiVersion::default();
/// assert_eq!(version, ApiVersion::V2);
/// assert_eq!(
///     version.accept_header().as_deref(),
///     Some("application/vnd.data2rest.v2+json")
/// );
///
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert!(version.accept_header().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Legacy response format.
    V1,
    /// Current response format (default).
    #[default]
    V2,
    /// Any other version tag, passed through as-is.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` for the versions this SDK knows about.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the `Accept` header value for this version, if one is sent.
    ///
    /// Only `v2` negotiates its media type; every other version returns `None`.
    #[must_use]
    pub fn accept_header(&self) -> Option<String> {
        match self {
            Self::V2 => Some(format!("application/vnd.data2rest.{self}+json")),
            Self::Custom(tag) if tag == "v2" => Some(format!("application/vnd.data2rest.{tag}+json")),
            Self::V1 | Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::Custom(s) => s.as_str(),
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    // Matching is exact: "V2" is a custom tag, not v2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "" => Err(ConfigError::InvalidApiVersion {
                version: String::new(),
            }),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}
