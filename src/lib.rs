//! # Azure Resource Manager Rust SDK core
//!
//! A Rust SDK core for the Azure Resource Manager API, providing the
//! non-generated runtime that service clients build on: resource identifier
//! parsing, long-running-operation polling, and an async HTTP transport with
//! retry handling.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ArmConfig`] and [`ArmConfigBuilder`]
//! - Validated newtypes for the endpoint, API version, and bearer token
//! - Hierarchical resource identifier parsing via [`resource::ResourceId`]
//! - Long-running-operation polling via [`lro::Poller`], with resume tokens
//! - Async HTTP client with throttling-aware retry logic
//! - A generic [`resources::ResourcesClient`] for by-ID resource operations
//!
//! ## Quick Start
//!
//! ```rust
//! use azure_arm::{ArmConfig, ApiVersion, AccessToken};
//!
//! // Create configuration using the builder pattern
//! let config = ArmConfig::builder()
//!     .api_version(ApiVersion::new("2021-04-01").unwrap())
//!     .access_token(AccessToken::new("eyJ0eXAi...").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Resource identifiers
//!
//! Every resource is addressed by a hierarchical path. [`resource::ResourceId`]
//! parses such paths into an immutable tree with parent navigation, and
//! round-trips them exactly:
//!
//! ```rust
//! use azure_arm::resource::ResourceId;
//!
//! let id = ResourceId::parse(
//!     "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Network/virtualNetworks/net-1",
//! )
//! .unwrap();
//!
//! assert_eq!(id.resource_group_name(), Some("rg-1"));
//! assert_eq!(id.parent().name(), "rg-1");
//! ```
//!
//! ## Long-running operations
//!
//! Mutating calls are accepted immediately and polled to completion. Clients
//! return a [`lro::Poller`]; drive it manually or block until done:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use azure_arm::resources::ResourcesClient;
//!
//! let client = ResourcesClient::new(&config);
//! let mut poller = client.begin_create_or_update(&id, resource).await?;
//! let created = poller.poll_until_done(Duration::from_secs(5)).await?;
//!
//! // Or suspend and resume in another process:
//! let token = poller.resume_token()?;
//! let mut poller = azure_arm::lro::Poller::from_resume_token(http, &token)?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global mutable state**: configuration is instance-based; the only
//!   process-wide value is the frozen root resource ID sentinel
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Caller-driven loops**: pollers and pagers perform exactly one
//!   round-trip per call; looping, delays, and cancellation belong to the
//!   caller
//! - **Thread-safe sharing**: parsed resource IDs are immutable and freely
//!   shareable; pollers are single-owner by design
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod lro;
pub mod resource;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiVersion, ArmConfig, ArmConfigBuilder, Endpoint};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export the core polling types for convenience
pub use lro::{LroError, OperationStatus, Poller, PollingMode};
