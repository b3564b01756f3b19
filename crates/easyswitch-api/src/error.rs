use thiserror::Error;

/// Top-level error type for the `easyswitch-api` crate.
///
/// Covers the failure modes of talking to the switch web console:
/// transport, URL construction, and non-success HTTP status codes.
/// `easyswitch-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Host string could not be turned into a switch base URL.
    #[error("Invalid switch host '{host}'")]
    InvalidHost { host: String },

    /// Failed to construct the underlying HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Device ──────────────────────────────────────────────────────
    /// The console answered with a non-success status.
    #[error("HTTP {status} from {path}")]
    Status { status: u16, path: String },
}

impl Error {
    /// Returns `true` if the connection timed out before the switch
    /// accepted it.
    pub fn is_connect_timeout(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() && e.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if the switch could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }
}
