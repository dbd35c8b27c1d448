//! HTTP response types for the Resource Manager SDK.
//!
//! This module provides the [`HttpResponse`] type for parsing and accessing
//! Resource Manager response data, including the headers that drive
//! long-running-operation polling.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// An HTTP response from a Resource Manager endpoint.
///
/// Contains the response status code, headers, and parsed JSON body, with
/// accessors for the service headers the SDK consumes: the polling headers
/// (`Azure-AsyncOperation`, `Location`), throttling (`Retry-After`), and
/// the diagnostic request ID (`x-ms-request-id`).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values). Keys are lowercase.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header keys are expected to be lowercase; the client lowercases them
    /// when parsing the wire response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched lowercase.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `x-ms-request-id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-ms-request-id")
    }

    /// Returns the `Azure-AsyncOperation` header value, if present.
    ///
    /// This is the operation-status URL for operations using the
    /// azure-async-operation polling pattern.
    #[must_use]
    pub fn azure_async_operation(&self) -> Option<&str> {
        self.header("azure-asyncoperation")
    }

    /// Returns the `Location` header value, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Returns the suggested delay from the `Retry-After` header, if present.
    ///
    /// Both forms defined for the header are handled: a delay in seconds and
    /// an HTTP-date (interpreted relative to the current time; past dates
    /// yield a zero delay).
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        let value = self.header("retry-after")?;

        if let Ok(secs) = value.parse::<u64>() {
            return Some(Duration::from_secs(secs));
        }

        let date = DateTime::parse_from_rfc2822(value).ok()?;
        let delay = date.with_timezone(&Utc) - Utc::now();
        Some(delay.to_std().unwrap_or(Duration::ZERO))
    }
}
