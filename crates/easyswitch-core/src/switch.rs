// ── Switch facade ──
//
// The public operations on one device. Each call is a complete
// validate -> login -> requests -> logout cycle; nothing is cached
// between calls and requests inside a call are strictly sequential.

use easyswitch_api::{Page, SwitchClient, TransportConfig};
use tracing::{debug, info};

use crate::codec;
use crate::command::{
    PortChange, PortRequest, SystemSettingsRequest, SystemUpdate, VlanChange, VlanRequest,
};
use crate::config::SwitchConfig;
use crate::convert;
use crate::error::CoreError;
use crate::model::{Diagnosis, SwitchInfo};
use crate::session::Session;

/// One managed switch.
///
/// Holds the connection settings and a reusable HTTP client. The device
/// only has one session slot, so callers must not run two operations on
/// the same switch at once.
#[derive(Debug, Clone)]
pub struct Switch {
    config: SwitchConfig,
    client: SwitchClient,
}

impl Switch {
    pub fn new(config: SwitchConfig) -> Result<Self, CoreError> {
        let base_url = SwitchClient::base_url_for_host(&config.host)?;
        let transport = TransportConfig {
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let client = SwitchClient::new(base_url, &transport)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Read identity, ports and VLANs in one session.
    ///
    /// Pages are fetched in a fixed order: identity, port settings, port
    /// statistics, VLANs. Fields a page does not render are left empty.
    pub async fn read_state(&self) -> Result<SwitchInfo, CoreError> {
        info!(host = %self.config.host, "reading switch state");
        Session::run(&self.client, &self.config.credentials, read_all).await
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Rename the switch and/or toggle VLAN mode.
    ///
    /// Each part is validated on its own; an invalid part is skipped and
    /// reported in the returned [`SystemUpdate`]. When nothing valid is
    /// left no session is opened.
    pub async fn update_system(
        &self,
        request: &SystemSettingsRequest,
    ) -> Result<SystemUpdate, CoreError> {
        let update = request.plan();
        if update.is_empty() {
            info!(skipped = update.skipped.len(), "no valid system settings to apply");
            return Ok(update);
        }

        Session::run(&self.client, &self.config.credentials, |client| async move {
            if let Some(ref name) = update.name {
                client.set_system_name(name).await?;
            }
            if let Some(enabled) = update.vlan_mode {
                client.set_vlan_mode(u8::from(enabled)).await?;
            }
            Ok(update)
        })
        .await
    }

    /// Set a port's state and speed. Invalid requests are rejected before
    /// anything is sent.
    pub async fn configure_port(&self, request: &PortRequest) -> Result<PortChange, CoreError> {
        let change = request.validate()?;
        debug!(?change, "port change validated");

        Session::run(&self.client, &self.config.credentials, |client| async move {
            client
                .set_port(change.port, change.state.code(), change.speed.code())
                .await?;
            Ok(change)
        })
        .await
    }

    /// Create, modify or delete a VLAN. Invalid requests are rejected
    /// before anything is sent.
    pub async fn apply_vlan(&self, request: &VlanRequest) -> Result<VlanChange, CoreError> {
        let change = request.validate()?;
        debug!(?change, "VLAN change validated");

        Session::run(&self.client, &self.config.credentials, |client| async move {
            match change {
                VlanChange::Upsert {
                    id,
                    ref name,
                    ref members,
                } => {
                    let selectors = codec::encode_membership_selectors(members);
                    client.upsert_vlan(id, name, &selectors).await?;
                }
                VlanChange::Delete { id } => client.delete_vlan(id).await?,
            }
            Ok(change)
        })
        .await
    }

    // ── Diagnosis ────────────────────────────────────────────────────

    /// Probe reachability and credentials.
    ///
    /// Uses a separate client whose connect phase is bounded by
    /// `probe_timeout`. A connect timeout during login means the switch is
    /// not accessible; any other transport failure is returned as an
    /// error. Once login went through, logout is always attempted.
    pub async fn diagnose(&self) -> Result<Diagnosis, CoreError> {
        let transport = TransportConfig {
            timeout: self.config.timeout,
            ..TransportConfig::default()
        }
        .with_connect_timeout(self.config.probe_timeout);
        let probe = SwitchClient::new(self.client.base_url().clone(), &transport)?;

        let mut session = Session::new(&probe);
        if let Err(e) = session.login(&self.config.credentials).await {
            if e.is_connect_timeout() {
                info!(host = %self.config.host, "switch did not accept a connection in time");
                return Ok(Diagnosis::NotAccessible);
            }
            return Err(e.into());
        }

        let status = probe.page_status(Page::SystemInfo).await;
        session.logout().await;
        let status = status?;

        let diagnosis = if (200..300).contains(&status) {
            Diagnosis::Authorized
        } else {
            Diagnosis::NotAuthorized
        };
        info!(status, %diagnosis, "diagnosis complete");
        Ok(diagnosis)
    }
}

async fn read_all(client: &SwitchClient) -> Result<SwitchInfo, CoreError> {
    let mut info = SwitchInfo::default();

    let html = client.fetch_page(Page::SystemInfo).await?;
    convert::apply_system_info(&html, &mut info);

    let html = client.fetch_page(Page::PortSettings).await?;
    info.ports = convert::parse_port_settings(&html)?;

    let html = client.fetch_page(Page::PortStatistics).await?;
    convert::apply_port_statistics(&html, &mut info.ports)?;

    let html = client.fetch_page(Page::Vlan).await?;
    let table = convert::parse_vlan_table(&html)?;
    info.vlan_mode = table.enabled;
    info.vlans = table.vlans;

    debug!(
        ports = info.ports.len(),
        vlans = info.vlans.len(),
        "switch state assembled"
    );
    Ok(info)
}
