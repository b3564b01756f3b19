// Switch console HTTP client
//
// Wraps `reqwest::Client` with base-URL construction and status checking
// for the switch's web console. Endpoint groups (session, actions) are
// implemented as inherent methods in separate files to keep this module
// focused on transport mechanics.

use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::paths::Page;
use crate::transport::TransportConfig;

/// Raw HTTP client for the switch web console.
///
/// Every method maps onto one HTTP request. The console never answers in a
/// structured format: pages come back as HTML for the caller to scrape,
/// and mutations only report success through the HTTP status.
#[derive(Debug, Clone)]
pub struct SwitchClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SwitchClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// If the config doesn't already include a cookie jar, one is created
    /// automatically (newer firmware tracks the session with a cookie).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Build the console base URL for a host name or `host:port` pair.
    ///
    /// The console only speaks plaintext HTTP; an explicit `http://`
    /// prefix is accepted, any other scheme is rejected.
    pub fn base_url_for_host(host: &str) -> Result<Url, Error> {
        let host = host.trim().trim_end_matches('/');
        let invalid = || Error::InvalidHost {
            host: host.to_owned(),
        };
        if host.is_empty() {
            return Err(invalid());
        }

        let candidate = if host.contains("://") {
            host.to_owned()
        } else {
            format!("http://{host}")
        };
        let url = Url::parse(&candidate).map_err(|_| invalid())?;
        if url.scheme() != "http" || url.host_str().is_none() {
            return Err(invalid());
        }
        Ok(url)
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The console base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a console path such as `/logon.cgi`.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Fetch a status page and return its HTML body.
    pub async fn fetch_page(&self, page: Page) -> Result<String, Error> {
        let url = self.url(page.path())?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let resp = check_status(resp, page.path())?;
        let body = resp.text().await.map_err(Error::Transport)?;

        trace!(page = page.path(), bytes = body.len(), "page fetched");
        Ok(body)
    }

    /// Fetch a status page and report only the HTTP status code.
    ///
    /// Used by the diagnosis probe, which cares whether the request was
    /// accepted rather than what the page says.
    pub async fn page_status(&self, page: Page) -> Result<u16, Error> {
        let url = self.url(page.path())?;
        debug!("GET {} (status probe)", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Ok(resp.status().as_u16())
    }

    /// Send a mutating GET with query parameters.
    pub(crate) async fn send_action(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!(params = ?redact(params), "GET {}", url);

        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(Error::Transport)?;
        check_status(resp, path)?;
        Ok(())
    }
}

fn check_status(resp: reqwest::Response, path: &str) -> Result<reqwest::Response, Error> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(Error::Status {
            status: status.as_u16(),
            path: path.to_owned(),
        })
    }
}

/// Parameter names only, for logging.
fn redact<'a>(params: &'a [(&'a str, String)]) -> Vec<&'a str> {
    params.iter().map(|(k, _)| *k).collect()
}
