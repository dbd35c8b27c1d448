//! Error types for long-running-operation polling.
//!
//! # Error Handling
//!
//! The poller distinguishes failures of the *machinery* (transport, decoding,
//! malformed resume tokens) from failures of the *operation itself*.
//! [`LroError::OperationFailed`] and [`LroError::OperationCanceled`] are
//! normal, expected outcomes of [`Poller::result`](crate::lro::Poller::result)
//! carrying the service-reported detail — "the requested change did not
//! complete" — while the other variants indicate something went wrong talking
//! to the service and are fatal to the call.

use thiserror::Error;

use crate::clients::HttpError;

/// Service-reported detail for a failed or canceled operation.
///
/// Resource Manager reports operation failures as an `error` object with a
/// service-defined `code` and human-readable `message`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}{message}", .code.as_deref().map(|c| format!("{c}: ")).unwrap_or_default())]
pub struct OperationError {
    /// The service-defined error code (e.g. `OperationPreempted`).
    pub code: Option<String>,
    /// The human-readable error message from the service.
    pub message: String,
}

impl OperationError {
    /// Extracts failure detail from a polled response body.
    ///
    /// Reads the `error.code` / `error.message` shape when present, falling
    /// back to the serialized body so the detail is never silently dropped.
    #[must_use]
    pub fn from_body(body: &serde_json::Value) -> Self {
        let error = body.get("error").unwrap_or(body);
        let code = error
            .get("code")
            .and_then(serde_json::Value::as_str)
            .map(String::from);
        let message = error
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(
                || serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string()),
                String::from,
            );
        Self { code, message }
    }
}

/// Errors that can occur when reconstructing a poller from a resume token.
///
/// Tokens fail closed: a token missing a required field or referencing an
/// unsupported polling pattern is rejected outright rather than guessed at.
/// Unknown extra fields are ignored for forward compatibility.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResumeTokenError {
    /// The token was not valid base64.
    #[error("Resume token is not valid base64.")]
    InvalidEncoding,

    /// The token payload was not a valid JSON envelope.
    #[error("Resume token does not contain a valid JSON envelope.")]
    MalformedEnvelope,

    /// A required envelope field is missing.
    #[error("Resume token is missing the required field '{field}'.")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The token was produced by an unsupported envelope version.
    #[error("Resume token version {version} is not supported.")]
    UnsupportedVersion {
        /// The version found in the token.
        version: u32,
    },

    /// The token references an unsupported polling pattern.
    #[error("Resume token references unsupported polling mode '{mode}'.")]
    UnsupportedMode {
        /// The mode string found in the token.
        mode: String,
    },

    /// The token references an unsupported HTTP method.
    #[error("Resume token references unsupported HTTP method '{method}'.")]
    UnsupportedMethod {
        /// The method string found in the token.
        method: String,
    },

    /// A resume token cannot be produced once the operation is terminal.
    #[error("Cannot create a resume token from a poller in a terminal state.")]
    TerminalState,
}

/// Unified error type for long-running-operation polling.
///
/// # Example
///
/// ```rust,ignore
/// match poller.poll_until_done(Duration::from_secs(1)).await {
///     Ok(resource) => { /* the operation succeeded */ }
///     Err(LroError::OperationFailed(detail)) => {
///         // the service completed the operation with a failure
///         eprintln!("operation failed: {detail}");
///     }
///     Err(LroError::Transport(e)) => { /* could not reach the service */ }
///     Err(other) => { /* decode error, bad resume token, ... */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum LroError {
    /// A network-level failure reaching the polling endpoint. Propagated
    /// unchanged; the caller decides whether to poll again.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response body did not match the expected shape for the status
    /// envelope or the final payload. Not retryable without intervention.
    #[error("Failed to decode the operation response: {reason}")]
    Decode {
        /// What failed to decode.
        reason: String,
    },

    /// The remote operation reached a terminal failure state.
    #[error("The operation failed: {0}")]
    OperationFailed(OperationError),

    /// The remote operation was canceled.
    #[error("The operation was canceled: {0}")]
    OperationCanceled(OperationError),

    /// The initial response did not carry the header the declared polling
    /// pattern requires.
    #[error("The initial response is missing the '{header}' header required for polling.")]
    MissingPollingUrl {
        /// The header the declared pattern requires.
        header: &'static str,
    },

    /// `result` was called before the operation reached a terminal state.
    #[error("The operation has not reached a terminal state.")]
    NotDone,

    /// A malformed or unsupported resume token was supplied.
    #[error(transparent)]
    ResumeToken(#[from] ResumeTokenError),
}
