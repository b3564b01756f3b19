// Shared transport configuration for building reqwest::Client instances.
//
// The regular session client and the diagnosis probe share timeout and
// cookie settings through this module, avoiding duplicated builder logic.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Total request timeout.
    pub timeout: Duration,
    /// Upper bound on establishing the TCP connection. `None` leaves it
    /// to the total timeout.
    pub connect_timeout: Option<Duration>,
    pub cookie_jar: Option<Arc<Jar>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: None,
            cookie_jar: None,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("easyswitch/", env!("CARGO_PKG_VERSION")));

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        if let Some(ref jar) = self.cookie_jar {
            builder = builder.cookie_provider(Arc::clone(jar));
        }

        builder
            .build()
            .map_err(|e| crate::error::Error::ClientBuild(e.to_string()))
    }

    /// Create a config with a fresh cookie jar (for session auth).
    pub fn with_cookie_jar(mut self) -> Self {
        self.cookie_jar = Some(Arc::new(Jar::default()));
        self
    }

    /// Bound the connection phase, as the diagnosis probe does.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_jar_and_no_connect_bound() {
        let config = TransportConfig::default();
        assert!(config.cookie_jar.is_none());
        assert!(config.connect_timeout.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builders_fill_optional_settings() {
        let config = TransportConfig::default()
            .with_cookie_jar()
            .with_connect_timeout(Duration::from_secs(1));
        assert!(config.cookie_jar.is_some());
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(1)));
        assert!(config.build_client().is_ok());
    }
}
