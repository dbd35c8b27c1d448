//! Configuration types for the Resource Manager SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for Resource Manager API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ArmConfig`]: The main configuration struct holding all SDK settings
//! - [`ArmConfigBuilder`]: A builder for constructing [`ArmConfig`] instances
//! - [`Endpoint`]: A validated management endpoint URL
//! - [`AccessToken`]: A caller-supplied bearer token with masked debug output
//! - [`ApiVersion`]: The Resource Manager API version to use
//!
//! # Example
//!
//! ```rust
//! use azure_arm::{ArmConfig, ApiVersion};
//!
//! let config = ArmConfig::builder()
//!     .api_version(ApiVersion::new("2021-04-01").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, Endpoint};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Resource Manager SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// the management endpoint, API version, and an optional bearer token.
/// Credential acquisition is out of scope — callers bring a token from their
/// identity library of choice.
///
/// # Thread Safety
///
/// `ArmConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use azure_arm::{ArmConfig, ApiVersion, AccessToken};
///
/// let config = ArmConfig::builder()
///     .api_version(ApiVersion::new("2021-04-01").unwrap())
///     .access_token(AccessToken::new("eyJ0eXAi...").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "https://management.azure.com");
/// ```
#[derive(Clone, Debug)]
pub struct ArmConfig {
    endpoint: Endpoint,
    api_version: ApiVersion,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl ArmConfig {
    /// Creates a new builder for constructing an `ArmConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use azure_arm::{ArmConfig, ApiVersion};
    ///
    /// let config = ArmConfig::builder()
    ///     .api_version(ApiVersion::new("2021-04-01").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ArmConfigBuilder {
        ArmConfigBuilder::new()
    }

    /// Returns the management endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ArmConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArmConfig>();
};

/// Builder for constructing [`ArmConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `api_version`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `endpoint`: the public Azure cloud (`https://management.azure.com`)
/// - `access_token`: `None` (requests are sent without an `Authorization` header)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use azure_arm::{ArmConfig, ApiVersion, Endpoint};
///
/// let config = ArmConfig::builder()
///     .api_version(ApiVersion::new("2021-04-01").unwrap())
///     .endpoint(Endpoint::new("https://management.usgovcloudapi.net").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ArmConfigBuilder {
    endpoint: Option<Endpoint>,
    api_version: Option<ApiVersion>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl ArmConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the management endpoint.
    ///
    /// Defaults to the public Azure cloud. Sovereign clouds and test
    /// servers are configured by overriding this.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API version (required).
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the bearer token to send in the `Authorization` header.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ArmConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_version` is not set.
    pub fn build(self) -> Result<ArmConfig, ConfigError> {
        let api_version = self.api_version.ok_or(ConfigError::MissingRequiredField {
            field: "api_version",
        })?;

        Ok(ArmConfig {
            endpoint: self.endpoint.unwrap_or_else(Endpoint::public_cloud),
            api_version,
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
