//! Resource Manager API version handling.
//!
//! This module provides the [`ApiVersion`] type for specifying which version
//! of a Resource Manager API to call.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Resource Manager API version.
///
/// Azure services version their management APIs by date, in `YYYY-MM-DD`
/// format with an optional `-preview` suffix. Every request carries the
/// version as the `api-version` query parameter. Unlike quarterly-versioned
/// APIs there is no global "latest" — each service publishes its own set of
/// versions — so this type validates the shape of the string rather than
/// enumerating known versions.
///
/// # Example
///
/// ```rust
/// use azure_arm::ApiVersion;
///
/// let version = ApiVersion::new("2021-04-01").unwrap();
/// assert!(!version.is_preview());
/// assert_eq!(version.to_string(), "2021-04-01");
///
/// // Parse from string
/// let preview: ApiVersion = "2024-03-01-preview".parse().unwrap();
/// assert!(preview.is_preview());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    const PREVIEW_SUFFIX: &'static str = "-preview";

    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the string is not a
    /// `YYYY-MM-DD` date with an optional `-preview` suffix.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        let date = version
            .strip_suffix(Self::PREVIEW_SUFFIX)
            .unwrap_or(&version);

        if !Self::is_valid_date(date) {
            return Err(ConfigError::InvalidApiVersion { version });
        }

        Ok(Self(version))
    }

    /// Returns `true` if this is a preview API version.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.0.ends_with(Self::PREVIEW_SUFFIX)
    }

    fn is_valid_date(date: &str) -> bool {
        let bytes = date.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return false;
        }
        date.bytes()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
