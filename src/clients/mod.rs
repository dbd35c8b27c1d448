//! HTTP client infrastructure for Resource Manager communication.
//!
//! This module provides the transport layer the rest of the SDK is built on:
//!
//! - [`HttpClient`]: Async HTTP client with retry handling for throttled requests
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: Request construction with validation
//! - [`HttpResponse`]: Parsed responses with accessors for polling headers
//! - Error types for response failures, retry exhaustion, and validation
//!
//! Retry and backoff policy is a transport concern and lives entirely in
//! [`HttpClient`]; higher layers such as the long-running-operation poller
//! never retry on their own.
//!
//! # Example
//!
//! ```rust,ignore
//! use azure_arm::{ArmConfig, ApiVersion};
//! use azure_arm::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = ArmConfig::builder()
//!     .api_version(ApiVersion::new("2021-04-01")?)
//!     .build()?;
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub-1/resources")
//!     .query_param("api-version", "2021-04-01")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
