//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Azure Resource Manager endpoint URL.
///
/// This newtype validates that the URL has a proper format with a scheme
/// and host, and normalizes away any trailing slash so request URLs can be
/// built by simple concatenation.
///
/// # Example
///
/// ```rust
/// use azure_arm::Endpoint;
///
/// let endpoint = Endpoint::new("https://management.azure.com").unwrap();
/// assert_eq!(endpoint.scheme(), "https");
/// assert_eq!(endpoint.host_name(), Some("management.azure.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// The public Azure cloud management endpoint.
    pub const PUBLIC_CLOUD: &'static str = "https://management.azure.com";

    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the endpoint for the public Azure cloud.
    ///
    /// # Panics
    ///
    /// Never panics; the constant is known to be a valid URL.
    #[must_use]
    pub fn public_cloud() -> Self {
        Self::new(Self::PUBLIC_CLOUD).expect("public cloud endpoint is valid")
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// A caller-supplied bearer token for Resource Manager requests.
///
/// Credential acquisition (OAuth flows, managed identity, token refresh) is
/// out of scope for this SDK; callers obtain a token through their identity
/// library of choice and hand it to [`ArmConfig`](crate::ArmConfig).
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use azure_arm::AccessToken;
///
/// let token = AccessToken::new("eyJ0eXAi...").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}
