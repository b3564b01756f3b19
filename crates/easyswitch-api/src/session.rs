// Console session requests
//
// Form-encoded login and GET logout. The console grants a single
// authenticated slot; the login response carries no usable verdict, so
// a successful request here only means the switch answered.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::SwitchClient;
use crate::error::Error;
use crate::paths;

impl SwitchClient {
    /// Authenticate with username/password.
    ///
    /// `POST /logon.cgi` with `username`, `password`, `logon=Login`.
    ///
    /// Succeeds whenever the request completes: the firmware answers bad
    /// credentials with the same status as good ones. Whether the session
    /// is authorized only shows on the next authenticated read.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.url(paths::LOGIN)?;
        debug!("logging in at {}", url);

        let form = [
            ("username", username),
            ("password", password.expose_secret()),
            ("logon", "Login"),
        ];

        let _resp = self
            .http()
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Transport)?;

        debug!("login request accepted");
        Ok(())
    }

    /// Release the session slot.
    ///
    /// `GET /Logout.htm`
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.url(paths::LOGOUT)?;
        debug!("logging out at {}", url);

        let _resp = self
            .http()
            .get(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        debug!("logout complete");
        Ok(())
    }
}
