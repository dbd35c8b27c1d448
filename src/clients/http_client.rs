//! HTTP client for Resource Manager communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to Resource Manager endpoints with automatic retry handling.
//!
//! The client is the transport collaborator for the rest of the SDK: the
//! long-running-operation poller and the service clients are built on top of
//! it and never talk to the network directly. Retry policy for throttling and
//! transient server errors lives here and only here.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ArmConfig;

/// Fixed retry wait time in seconds when the service does not suggest one.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to Resource Manager endpoints.
///
/// The client handles:
/// - Base URL construction from the configured endpoint
/// - Default headers including User-Agent and the bearer token
/// - Automatic retry logic for throttled (429) and server-error responses
/// - Absolute pass-through URLs for polling and `nextLink` requests
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone, making it safe to share
/// across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use azure_arm::{ArmConfig, ApiVersion};
/// use azure_arm::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = ArmConfig::builder()
///     .api_version(ApiVersion::new("2021-04-01")?)
///     .build()?;
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub-1/resources")
///     .query_param("api-version", "2021-04-01")
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://management.azure.com`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ArmConfig) -> Self {
        let base_url = config.endpoint().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}azure-arm-rust v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Add bearer token header if present
        if let Some(token) = config.access_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the service.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction (absolute paths pass through unchanged)
    /// - Header merging
    /// - Response parsing
    /// - Retry logic for 429 and 5xx responses, honoring `Retry-After`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL; polling and nextLink URLs arrive absolute
        let url = if request.is_absolute() {
            request.path.clone()
        } else {
            format!("{}{}", self.base_url, request.path)
        };

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Retry loop
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            // Build the reqwest request
            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Patch => self.client.patch(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            // Add headers
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            // Add query params
            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            // Add body
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            // Send request
            let res = req_builder.send().await?;

            // Parse response
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            // Parse body as JSON
            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    // For 5xx errors, return raw body as string value
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            // Check if response is OK
            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);
            let error_code = Self::extract_error_code(&response);

            // Check if we should retry
            let should_retry = code == 429 || code >= 500;
            if !should_retry {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    error_code,
                    message: error_message,
                    request_id: response.request_id().map(String::from),
                }));
            }

            // Check if we've exhausted retries
            if tries >= request.tries {
                if request.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        error_code,
                        message: error_message,
                        request_id: response.request_id().map(String::from),
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    request_id: response.request_id().map(String::from),
                }));
            }

            // Calculate retry delay and wait
            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                status = code,
                delay_ms = delay.as_millis() as u64,
                "Retrying throttled request to {}",
                request.path
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap` with lowercase keys.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        // For 429: use Retry-After if present, otherwise fixed delay
        // For 5xx: always use fixed delay (ignore Retry-After)
        if status == 429 {
            if let Some(retry_after) = response.retry_after() {
                return retry_after;
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes an error response to JSON, preserving the service error shape.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
        } else if !response.body.is_null() && response.body != serde_json::json!({}) {
            // Some services report errors at the top level of the body
            error_body.insert("error".to_string(), response.body.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert("requestId".to_string(), serde_json::json!(request_id));
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }

    /// Extracts the service-defined error code from the response body.
    fn extract_error_code(response: &HttpResponse) -> Option<String> {
        response
            .body
            .get("error")
            .or(Some(&response.body))
            .and_then(|e| e.get("code"))
            .and_then(serde_json::Value::as_str)
            .map(String::from)
    }
}
