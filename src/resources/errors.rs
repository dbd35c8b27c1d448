//! Error types for the generic resources client.

use thiserror::Error;

use crate::clients::HttpError;
use crate::lro::LroError;

/// Unified error type for resources client operations.
#[derive(Debug, Error)]
pub enum ResourcesError {
    /// The HTTP transport reported a failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A response body did not match the expected model shape.
    #[error("Failed to decode the service response: {reason}")]
    Decode {
        /// What failed to decode.
        reason: String,
    },

    /// A long-running operation could not be set up or driven.
    #[error(transparent)]
    Lro(#[from] LroError),
}
