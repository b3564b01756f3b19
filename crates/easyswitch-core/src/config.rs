// ── Connection configuration ──
//
// What a `Switch` needs to reach and log into one device. Loading this
// from files or the environment is the config crate's job.

use std::time::Duration;

use secrecy::SecretString;

/// Default request timeout for normal operations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout for the diagnosis probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Web console login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// Configuration for one switch.
#[derive(Debug, Clone)]
pub struct SwitchConfig {
    /// Host name or address, optionally with `:port` or an `http://` prefix.
    pub host: String,
    pub credentials: Credentials,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connect timeout used only by [`Switch::diagnose`](crate::Switch::diagnose).
    pub probe_timeout: Duration,
}

impl SwitchConfig {
    pub fn new(host: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            host: host.into(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}
