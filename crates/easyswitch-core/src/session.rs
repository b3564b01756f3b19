// ── Scoped console session ──
//
// The console has a single authenticated slot and no session timeout
// this client can rely on, so every path out of an authenticated region
// must release it. `Session::run` is the only way domain operations log
// in; it logs out whether the work succeeded or not.

use std::future::Future;

use easyswitch_api::SwitchClient;
use tracing::{debug, warn};

use crate::config::Credentials;
use crate::error::CoreError;

/// Lifecycle of one console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Closed,
}

/// One login/logout cycle against a switch.
#[derive(Debug)]
pub struct Session<'a> {
    client: &'a SwitchClient,
    state: SessionState,
}

impl<'a> Session<'a> {
    pub fn new(client: &'a SwitchClient) -> Self {
        Self {
            client,
            state: SessionState::Unauthenticated,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Send the login form.
    ///
    /// The session counts as authenticated as soon as the request
    /// completes; the console does not say whether the credentials were
    /// accepted. The raw transport error is returned so callers can tell
    /// a connect timeout apart from other failures.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), easyswitch_api::Error> {
        self.client
            .login(&credentials.username, &credentials.password)
            .await?;
        self.state = SessionState::Authenticated;
        Ok(())
    }

    /// Release the session slot. Best-effort: a failure is logged and
    /// the session is closed regardless. No request is made if login
    /// never completed.
    pub async fn logout(&mut self) {
        if self.state == SessionState::Authenticated {
            if let Err(e) = self.client.logout().await {
                warn!(error = %e, "logout failed (non-fatal)");
            }
        }
        self.state = SessionState::Closed;
    }

    /// Log in, run `work`, log out, and return what `work` returned.
    ///
    /// A failed login returns before `work` runs. Once login succeeded,
    /// logout is attempted whatever `work` returns, and never replaces
    /// its result.
    pub async fn run<T, F, Fut>(
        client: &'a SwitchClient,
        credentials: &Credentials,
        work: F,
    ) -> Result<T, CoreError>
    where
        F: FnOnce(&'a SwitchClient) -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        let mut session = Session::new(client);
        session.login(credentials).await?;
        debug!("session open");

        let result = work(client).await;

        session.logout().await;
        debug!(ok = result.is_ok(), "session closed");
        result
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if self.state == SessionState::Authenticated {
            warn!("session dropped while still logged in");
        }
    }
}
