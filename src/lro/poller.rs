//! The long-running-operation poller.
//!
//! Resource Manager accepts mutating calls with `202 Accepted`/`201 Created`
//! and completes them asynchronously; the caller polls a status URL until the
//! operation reaches a terminal state. [`Poller`] drives that cycle: it is
//! created from the initial response of a `begin_*` client call, advances one
//! round-trip per [`Poller::poll`], and exposes the final typed payload (or
//! the service-reported failure) through [`Poller::result`].
//!
//! The poller never retries on its own — transport failures surface to the
//! caller unchanged, and retry policy for throttled requests lives in the
//! [`HttpClient`]. Cancellation is cooperative: dropping the future returned
//! by `poll` aborts the in-flight request, and the last-known state is
//! retained so polling can resume with a fresh call.

use std::marker::PhantomData;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::lro::errors::{LroError, OperationError};
use crate::lro::status::{OperationStatus, PollingMode};
use crate::lro::token::ResumeToken;

/// Drives a long-running operation to completion.
///
/// The type parameter `T` is the final payload type decoded on success.
///
/// A poller holds mutable state (`status`, polling URL) and is intended for a
/// single owner; callers drive it either step-by-step with [`Poller::poll`]
/// (e.g. to report progress) or with the blocking convenience
/// [`Poller::poll_until_done`], which is ordinary sequential code — one poll,
/// one sleep — built strictly on top of `poll`.
///
/// # Example
///
/// ```rust,ignore
/// let mut poller = client.begin_create_or_update(&id, resource).await?;
/// let created: GenericResource = poller.poll_until_done(Duration::from_secs(5)).await?;
/// ```
#[derive(Debug)]
pub struct Poller<T> {
    client: HttpClient,
    mode: PollingMode,
    method: HttpMethod,
    original_url: String,
    polling_url: String,
    status: OperationStatus,
    last_body: serde_json::Value,
    error: Option<OperationError>,
    retry_after: Option<Duration>,
    _result: PhantomData<fn() -> T>,
}

impl<T> Poller<T> {
    /// Creates a poller from the initial response of a long-running call.
    ///
    /// `original_url` is the absolute URL of the initiating request,
    /// including any query parameters needed to re-GET the resource; it is
    /// used for provisioning-state polling and for the final payload fetch.
    /// The polling pattern is declared per operation by the service's API
    /// description and passed here — it is never auto-detected from the
    /// response content.
    ///
    /// # Errors
    ///
    /// Returns [`LroError::MissingPollingUrl`] if the declared pattern
    /// requires a polling header that the initial response does not carry.
    pub fn from_initial_response(
        client: HttpClient,
        method: HttpMethod,
        original_url: impl Into<String>,
        response: &HttpResponse,
        mode: PollingMode,
    ) -> Result<Self, LroError> {
        let original_url = original_url.into();

        let status = match response.code {
            200 => provisioning_state(&response.body)
                .map_or(OperationStatus::Succeeded, OperationStatus::from_service_state),
            201 => provisioning_state(&response.body)
                .map_or(OperationStatus::InProgress, OperationStatus::from_service_state),
            202 => OperationStatus::InProgress,
            204 => OperationStatus::Succeeded,
            _ => OperationStatus::Failed,
        };

        // An operation that completed synchronously needs no polling URL.
        let polling_url = if status.is_terminal() {
            original_url.clone()
        } else {
            match mode {
                PollingMode::AzureAsyncOperation => response
                    .azure_async_operation()
                    .ok_or(LroError::MissingPollingUrl {
                        header: "Azure-AsyncOperation",
                    })?
                    .to_string(),
                PollingMode::Location => response
                    .location()
                    .ok_or(LroError::MissingPollingUrl { header: "Location" })?
                    .to_string(),
                PollingMode::ProvisioningState => original_url.clone(),
            }
        };

        let error = matches!(status, OperationStatus::Failed | OperationStatus::Canceled)
            .then(|| OperationError::from_body(&response.body));

        Ok(Self {
            client,
            mode,
            method,
            original_url,
            polling_url,
            status,
            last_body: response.body.clone(),
            error,
            retry_after: response.retry_after(),
            _result: PhantomData,
        })
    }

    /// Reconstructs a poller from a resume token produced by
    /// [`Poller::resume_token`], typically in a new process.
    ///
    /// The reconstructed poller starts in the in-progress state and converges
    /// to the same terminal state and payload as the original would have.
    ///
    /// # Errors
    ///
    /// Returns [`LroError::ResumeToken`] if the token is malformed or
    /// references an unsupported polling pattern.
    pub fn from_resume_token(client: HttpClient, token: &str) -> Result<Self, LroError> {
        let token = ResumeToken::decode(token)?;

        Ok(Self {
            client,
            mode: token.mode,
            method: token.method,
            original_url: token.original_url,
            polling_url: token.polling_url,
            status: OperationStatus::InProgress,
            last_body: serde_json::json!({}),
            error: None,
            retry_after: None,
            _result: PhantomData,
        })
    }

    /// Returns `true` if the operation has reached a terminal state.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the current operation status.
    #[must_use]
    pub const fn status(&self) -> OperationStatus {
        self.status
    }

    /// Returns the delay the service suggested via `Retry-After` on the most
    /// recent response, if any.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }

    /// Returns the URL the next poll will query.
    #[must_use]
    pub fn polling_url(&self) -> &str {
        &self.polling_url
    }

    /// Performs exactly one polling round-trip.
    ///
    /// Still-in-progress is a normal `Ok(OperationStatus::InProgress)`
    /// result, not an error. Once the operation is terminal, further calls
    /// are no-ops returning the terminal status.
    ///
    /// The poller does not retry: a transport failure is surfaced unchanged
    /// and the caller decides whether to call `poll` again. The last known
    /// polling URL and status are retained, so a failed poll can be retried
    /// with a fresh call.
    ///
    /// # Errors
    ///
    /// - [`LroError::Transport`] if the request cannot be sent or received
    /// - [`LroError::Decode`] if the response body does not carry the shape
    ///   the declared pattern expects
    pub async fn poll(&mut self) -> Result<OperationStatus, LroError> {
        if self.done() {
            return Ok(self.status);
        }

        let request = HttpRequest::builder(HttpMethod::Get, &self.polling_url)
            .build()
            .map_err(HttpError::from)?;

        let response = match self.client.request(request).await {
            Ok(response) => response,
            // For location polling a failing status on the polling URL is the
            // operation itself failing, not a transport problem.
            Err(HttpError::Response(e)) if self.mode == PollingMode::Location => {
                self.status = OperationStatus::Failed;
                self.error = Some(OperationError {
                    code: e.error_code.clone(),
                    message: e.message,
                });
                return Ok(self.status);
            }
            Err(e) => return Err(LroError::Transport(e)),
        };

        self.retry_after = response.retry_after();

        self.status = match self.mode {
            PollingMode::AzureAsyncOperation => {
                let state = response
                    .body
                    .get("status")
                    .and_then(serde_json::Value::as_str)
                    .ok_or_else(|| LroError::Decode {
                        reason: "the operation status envelope has no 'status' field".to_string(),
                    })?;
                OperationStatus::from_service_state(state)
            }
            PollingMode::Location => {
                if let Some(location) = response.location() {
                    self.polling_url = location.to_string();
                }
                if response.code == 202 {
                    OperationStatus::InProgress
                } else {
                    provisioning_state(&response.body)
                        .map_or(OperationStatus::Succeeded, OperationStatus::from_service_state)
                }
            }
            PollingMode::ProvisioningState => match response.code {
                202 => OperationStatus::InProgress,
                204 => OperationStatus::Succeeded,
                _ => provisioning_state(&response.body)
                    .map_or(OperationStatus::Succeeded, OperationStatus::from_service_state),
            },
        };

        self.last_body = response.body;
        if matches!(
            self.status,
            OperationStatus::Failed | OperationStatus::Canceled
        ) {
            self.error = Some(OperationError::from_body(&self.last_body));
        }

        tracing::debug!(
            status = %self.status,
            url = %self.polling_url,
            "polled long-running operation"
        );

        Ok(self.status)
    }

    /// Serializes enough state to reconstruct an equivalent poller later,
    /// possibly in another process.
    ///
    /// # Errors
    ///
    /// Returns [`ResumeTokenError::TerminalState`](crate::lro::ResumeTokenError::TerminalState)
    /// once the operation is terminal — there is nothing left to resume.
    pub fn resume_token(&self) -> Result<String, LroError> {
        if self.done() {
            return Err(crate::lro::errors::ResumeTokenError::TerminalState.into());
        }
        Ok(ResumeToken {
            mode: self.mode,
            method: self.method,
            polling_url: self.polling_url.clone(),
            original_url: self.original_url.clone(),
        }
        .encode())
    }
}

impl<T: DeserializeOwned> Poller<T> {
    /// Returns the final payload once the operation is terminal.
    ///
    /// On `Succeeded` the payload is decoded into `T`, performing a final GET
    /// of the resource when the polling pattern tracks status out-of-band
    /// (azure-async-operation with a PUT/PATCH/GET initiator). On `Failed` or
    /// `Canceled` this returns the structured service detail — a normal,
    /// expected outcome, not a defect.
    ///
    /// # Errors
    ///
    /// - [`LroError::NotDone`] if the operation is still in progress
    /// - [`LroError::OperationFailed`] / [`LroError::OperationCanceled`] with
    ///   the service-reported detail
    /// - [`LroError::Transport`] / [`LroError::Decode`] if the final payload
    ///   cannot be fetched or decoded
    pub async fn result(&self) -> Result<T, LroError> {
        match self.status {
            OperationStatus::InProgress => Err(LroError::NotDone),
            OperationStatus::Failed => Err(LroError::OperationFailed(self.failure_detail())),
            OperationStatus::Canceled => Err(LroError::OperationCanceled(self.failure_detail())),
            OperationStatus::Succeeded => {
                let body = if self.needs_final_get() {
                    let request = HttpRequest::builder(HttpMethod::Get, &self.original_url)
                        .build()
                        .map_err(HttpError::from)?;
                    self.client.request(request).await?.body
                } else {
                    self.last_body.clone()
                };
                serde_json::from_value(body).map_err(|e| LroError::Decode {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Polls until the operation is terminal, then returns the final payload.
    ///
    /// Ordinary sequential code on top of [`Poller::poll`]: one poll, then a
    /// sleep for the service-suggested `Retry-After` (or `interval` when the
    /// service does not suggest one), repeated until a terminal state.
    /// Cancellation and timeouts are the caller's: wrap the returned future
    /// in `tokio::time::timeout` or drop it to abort.
    ///
    /// # Errors
    ///
    /// Propagates the same errors as [`Poller::poll`] and [`Poller::result`].
    pub async fn poll_until_done(&mut self, interval: Duration) -> Result<T, LroError> {
        while !self.done() {
            self.poll().await?;
            if self.done() {
                break;
            }
            let delay = self.retry_after.unwrap_or(interval);
            tokio::time::sleep(delay).await;
        }
        self.result().await
    }

    fn failure_detail(&self) -> OperationError {
        self.error
            .clone()
            .unwrap_or_else(|| OperationError::from_body(&self.last_body))
    }

    /// The async-operation pattern tracks status in a separate envelope, so
    /// the resource payload of a PUT/PATCH/GET initiator lives at the
    /// original URL and needs a final fetch. POST and DELETE results, when
    /// any, are carried in the envelope itself.
    fn needs_final_get(&self) -> bool {
        self.mode == PollingMode::AzureAsyncOperation
            && matches!(
                self.method,
                HttpMethod::Put | HttpMethod::Patch | HttpMethod::Get
            )
    }
}

fn provisioning_state(body: &serde_json::Value) -> Option<&str> {
    body.get("properties")?
        .get("provisioningState")?
        .as_str()
}

// Verify the poller is Send regardless of T at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Poller<std::convert::Infallible>>();
};
