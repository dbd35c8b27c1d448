//! Resume token encoding for long-running operations.
//!
//! A resume token is an opaque string — base64 of a small JSON envelope —
//! carrying enough poller state to reconstruct an equivalent poller in a new
//! process: the polling URL, the original request's method and URL, and the
//! declared polling pattern.
//!
//! The format is forward compatible: unknown envelope fields are ignored.
//! Missing required fields fail closed with an explicit
//! [`ResumeTokenError`] rather than being guessed at.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::lro::errors::ResumeTokenError;
use crate::lro::status::PollingMode;

/// The envelope version this SDK produces.
const CURRENT_VERSION: u32 = 1;

/// The deserialized shape of a resume token envelope.
///
/// All fields are optional at the wire level so that a missing field can be
/// reported by name instead of as an opaque deserialization failure.
#[derive(Debug, Deserialize)]
struct WireEnvelope {
    version: Option<u32>,
    mode: Option<String>,
    method: Option<String>,
    #[serde(rename = "pollingUrl")]
    polling_url: Option<String>,
    #[serde(rename = "originalUrl")]
    original_url: Option<String>,
}

/// Validated poller state carried by a resume token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResumeToken {
    pub mode: PollingMode,
    pub method: HttpMethod,
    pub polling_url: String,
    pub original_url: String,
}

#[derive(Debug, Serialize)]
struct EncodeEnvelope<'a> {
    version: u32,
    mode: &'a str,
    method: &'a str,
    #[serde(rename = "pollingUrl")]
    polling_url: &'a str,
    #[serde(rename = "originalUrl")]
    original_url: &'a str,
}

impl ResumeToken {
    /// Serializes the token to its opaque string form.
    pub fn encode(&self) -> String {
        let envelope = EncodeEnvelope {
            version: CURRENT_VERSION,
            mode: self.mode.as_str(),
            method: self.method.as_str(),
            polling_url: &self.polling_url,
            original_url: &self.original_url,
        };
        let json = serde_json::to_string(&envelope).unwrap_or_else(|_| "{}".to_string());
        STANDARD.encode(json)
    }

    /// Parses and validates an opaque token string.
    pub fn decode(token: &str) -> Result<Self, ResumeTokenError> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|_| ResumeTokenError::InvalidEncoding)?;
        let wire: WireEnvelope =
            serde_json::from_slice(&bytes).map_err(|_| ResumeTokenError::MalformedEnvelope)?;

        let version = wire
            .version
            .ok_or(ResumeTokenError::MissingField { field: "version" })?;
        if version != CURRENT_VERSION {
            return Err(ResumeTokenError::UnsupportedVersion { version });
        }

        let mode = wire
            .mode
            .ok_or(ResumeTokenError::MissingField { field: "mode" })?
            .parse::<PollingMode>()?;
        let method = wire
            .method
            .ok_or(ResumeTokenError::MissingField { field: "method" })?;
        let method = method
            .parse::<HttpMethod>()
            .map_err(|_| ResumeTokenError::UnsupportedMethod { method })?;
        let polling_url = wire.polling_url.ok_or(ResumeTokenError::MissingField {
            field: "pollingUrl",
        })?;
        let original_url = wire.original_url.ok_or(ResumeTokenError::MissingField {
            field: "originalUrl",
        })?;

        Ok(Self {
            mode,
            method,
            polling_url,
            original_url,
        })
    }
}
