// ── Core error types ──
//
// User-facing errors from easyswitch-core. Consumers never see reqwest
// errors directly: the `From<easyswitch_api::Error>` impl translates
// transport-layer failures into domain-appropriate variants.

use thiserror::Error;

use crate::codec::CodecError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Connection to switch at {url} failed: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Switch connection timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    /// A value was present on a page but has no domain meaning.
    #[error("Unexpected value on {page}: {source}")]
    Decode {
        page: &'static str,
        #[source]
        source: CodecError,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed for {field}: {message}")]
    ValidationFailed { field: &'static str, message: String },

    #[error("Switch rejected request: {message}")]
    Rejected { message: String, status: Option<u16> },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<easyswitch_api::Error> for CoreError {
    fn from(err: easyswitch_api::Error) -> Self {
        match err {
            easyswitch_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if let Some(status) = e.status() {
                    CoreError::Rejected {
                        message: e.to_string(),
                        status: Some(status.as_u16()),
                    }
                } else {
                    // The exchange broke down before any answer arrived
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            easyswitch_api::Error::Status { status, path } => CoreError::Rejected {
                message: format!("HTTP {status} from {path}"),
                status: Some(status),
            },
            easyswitch_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            easyswitch_api::Error::InvalidHost { host } => CoreError::Config {
                message: format!("Invalid switch host '{host}'"),
            },
            easyswitch_api::Error::ClientBuild(message) => CoreError::Internal(message),
        }
    }
}
