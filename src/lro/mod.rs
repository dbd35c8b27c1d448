//! Long-running-operation polling.
//!
//! Resource Manager completes mutating calls asynchronously: the initiating
//! request is accepted immediately and the caller polls until the operation
//! reaches a terminal state. This module provides:
//!
//! - [`Poller`]: the state machine driving poll → status → final result
//! - [`OperationStatus`]: the closed set of operation states
//! - [`PollingMode`]: the per-operation declared polling pattern
//! - Resume tokens for continuing a poll loop in another process
//! - The error taxonomy separating machinery failures from the operation
//!   itself failing
//!
//! # State machine
//!
//! ```text
//! NotStarted -> InProgress -> { Succeeded, Failed, Canceled }
//! ```
//!
//! Terminal states are absorbing. Each [`Poller::poll`] call performs exactly
//! one HTTP round-trip; looping and delays between polls belong to the caller
//! (or the [`Poller::poll_until_done`] convenience, which is just such a loop).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use azure_arm::lro::OperationStatus;
//!
//! let mut poller = client.begin_delete(&resource_id).await?;
//!
//! // the state can be saved and picked up elsewhere
//! let token = poller.resume_token()?;
//!
//! // manual control, e.g. for progress reporting
//! while !poller.done() {
//!     let status = poller.poll().await?;
//!     println!("operation is {status}");
//!     tokio::time::sleep(poller.retry_after().unwrap_or(Duration::from_secs(5))).await;
//! }
//! ```

mod errors;
mod poller;
mod status;
mod token;

pub use errors::{LroError, OperationError, ResumeTokenError};
pub use poller::Poller;
pub use status::{OperationStatus, PollingMode};
