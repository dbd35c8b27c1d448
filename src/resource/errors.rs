//! Error types for resource identifier parsing.

use thiserror::Error;

/// Errors that can occur when parsing a resource ID string.
///
/// Parsing never panics: every malformed input is reported through one of
/// these variants, and no partially-built identifier is ever returned. Each
/// variant carries the offending input for diagnostics.
///
/// # Example
///
/// ```rust
/// use azure_arm::resource::{ParseError, ResourceId};
///
/// let result = ResourceId::parse("");
/// assert!(matches!(result, Err(ParseError::Empty)));
///
/// let result = ResourceId::parse("/providers");
/// assert!(matches!(result, Err(ParseError::MissingProviderNamespace { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("Resource ID cannot be empty.")]
    Empty,

    /// The input does not follow the resource ID grammar.
    #[error("Invalid resource ID '{id}'.")]
    InvalidResourceId {
        /// The input that failed to parse.
        id: String,
    },

    /// A `providers` segment was not followed by a provider namespace.
    #[error("Invalid resource ID '{id}': 'providers' must be followed by a namespace.")]
    MissingProviderNamespace {
        /// The input that failed to parse.
        id: String,
    },
}

impl ParseError {
    /// Shorthand for [`ParseError::InvalidResourceId`] with the given input.
    pub(crate) fn invalid(id: &str) -> Self {
        Self::InvalidResourceId { id: id.to_string() }
    }
}
