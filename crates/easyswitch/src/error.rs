//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use easyswitch_config::ConfigError;
use easyswitch_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to switch at {url}")]
    #[diagnostic(
        code(easyswitch::connection_failed),
        help(
            "Check that the switch is powered and reachable from this host.\n\
             {reason}\n\
             Try: easyswitch diagnose"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Switch at {host} is not accepting connections")]
    #[diagnostic(
        code(easyswitch::not_accessible),
        help("The connection attempt timed out. Check the address and network path.")
    )]
    NotAccessible { host: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Switch at {host} refused the credentials")]
    #[diagnostic(
        code(easyswitch::auth_failed),
        help(
            "Verify username and password, and that nobody else is logged in:\n\
             the switch only allows one web session at a time."
        )
    )]
    AuthFailed { host: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(easyswitch::no_credentials),
        help(
            "Pass --username and --password, set EASYSWITCH_PASSWORD,\n\
             or add username and password_env to the profile."
        )
    )]
    NoCredentials { profile: String },

    // ── Device ───────────────────────────────────────────────────────
    #[error("Switch rejected the request: {message}")]
    #[diagnostic(code(easyswitch::rejected))]
    Rejected { message: String },

    #[error("Could not read switch state: {message}")]
    #[diagnostic(
        code(easyswitch::decode),
        help("The firmware reported a value this tool does not know. Run with -vv for details.")
    )]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(easyswitch::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(easyswitch::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: easyswitch config set-profile <NAME> --host <HOST>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No switch configured")]
    #[diagnostic(
        code(easyswitch::no_config),
        help(
            "Pass --host, or create a profile with: easyswitch config set-profile\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(easyswitch::config))]
    Config(Box<ConfigError>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(easyswitch::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request to the switch timed out")]
    #[diagnostic(
        code(easyswitch::timeout),
        help("Increase timeout with --timeout or check switch responsiveness.")
    )]
    Timeout,

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    #[diagnostic(code(easyswitch::internal))]
    Internal(String),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(easyswitch::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(easyswitch::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::NotAccessible { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },

            CoreError::Timeout => CliError::Timeout,

            CoreError::Decode { .. } => CliError::Decode {
                message: err.to_string(),
            },

            CoreError::ValidationFailed { field, message } => CliError::Validation {
                field: field.into(),
                reason: message,
            },

            CoreError::Rejected { message, .. } => CliError::Rejected { message },

            CoreError::Config { message } => CliError::Validation {
                field: "host".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: String::new(),
            },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(Box::new(other)),
        }
    }
}
