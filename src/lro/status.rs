//! Operation status and polling pattern types.

use std::fmt;
use std::str::FromStr;

use crate::lro::errors::ResumeTokenError;

/// The state of a long-running operation.
///
/// This is a closed set: the service reports states as free-form strings, and
/// the discriminator is read first and mapped onto exactly one of these
/// variants. `Succeeded`, `Failed` and `Canceled` (either spelling) map
/// case-insensitively; every other reported state (`Running`, `Started`,
/// `Updating`, ...) means the operation is still in progress.
///
/// Terminal states are absorbing — once reached, no further transitions occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationStatus {
    /// The operation has not yet reached a terminal state.
    InProgress,
    /// The operation completed successfully.
    Succeeded,
    /// The operation reached a terminal failure state.
    Failed,
    /// The operation was canceled before completing.
    Canceled,
}

impl OperationStatus {
    /// Maps a service-reported state string onto the closed status set.
    #[must_use]
    pub fn from_service_state(state: &str) -> Self {
        if state.eq_ignore_ascii_case("Succeeded") {
            Self::Succeeded
        } else if state.eq_ignore_ascii_case("Failed") {
            Self::Failed
        } else if state.eq_ignore_ascii_case("Canceled") || state.eq_ignore_ascii_case("Cancelled")
        {
            Self::Canceled
        } else {
            Self::InProgress
        }
    }

    /// Returns `true` if this is a terminal (absorbing) state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InProgress => "InProgress",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Canceled => "Canceled",
        };
        f.write_str(s)
    }
}

/// The polling pattern a long-running operation declares.
///
/// Which signals carry the operation state — a status URL in a header, a
/// follow-up `Location`, or a provisioning state embedded in the resource
/// body — is declared per operation by the service's API description. It is
/// supplied at poller construction and never auto-detected from response
/// content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollingMode {
    /// Poll the URL from the `Azure-AsyncOperation` header; the state lives
    /// in the `status` field of the returned envelope.
    AzureAsyncOperation,
    /// Poll the URL from the `Location` header; a `202` means in progress and
    /// any other success code is terminal.
    Location,
    /// Re-GET the original resource URL; the state lives in the body's
    /// `properties.provisioningState` field.
    ProvisioningState,
}

impl PollingMode {
    /// Returns the stable identifier used in resume tokens.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AzureAsyncOperation => "azure-async-operation",
            Self::Location => "location",
            Self::ProvisioningState => "provisioning-state",
        }
    }
}

impl fmt::Display for PollingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PollingMode {
    type Err = ResumeTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "azure-async-operation" => Ok(Self::AzureAsyncOperation),
            "location" => Ok(Self::Location),
            "provisioning-state" => Ok(Self::ProvisioningState),
            _ => Err(ResumeTokenError::UnsupportedMode {
                mode: s.to_string(),
            }),
        }
    }
}
