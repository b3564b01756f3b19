// Console mutation endpoints
//
// Every change is a GET with query parameters against a `.cgi` path.
// Values are passed through as wire codes; validation and the mapping
// from domain values live in `easyswitch-core`.

use tracing::debug;

use crate::client::SwitchClient;
use crate::error::Error;
use crate::paths;

impl SwitchClient {
    /// Rename the device.
    ///
    /// `GET /system_name_set.cgi?sysName={name}`
    pub async fn set_system_name(&self, name: &str) -> Result<(), Error> {
        debug!(name, "renaming switch");
        self.send_action(paths::SYSTEM_NAME, &[("sysName", name.to_owned())])
            .await
    }

    /// Turn 802.1Q VLAN mode on (`1`) or off (`0`).
    ///
    /// `GET /qvlanSet.cgi?qvlan_en={code}&qvlan_mode=Apply`
    pub async fn set_vlan_mode(&self, code: u8) -> Result<(), Error> {
        debug!(code, "setting 802.1Q VLAN mode");
        self.send_action(
            paths::QVLAN,
            &[
                ("qvlan_en", code.to_string()),
                ("qvlan_mode", "Apply".to_owned()),
            ],
        )
        .await
    }

    /// Configure one port. Flow control is always sent disabled.
    ///
    /// `GET /port_setting.cgi?portid={port}&state={state}&speed={speed}&flowcontrol=0&apply=Apply`
    pub async fn set_port(&self, port: u8, state: u8, speed: u8) -> Result<(), Error> {
        debug!(port, state, speed, "configuring port");
        self.send_action(
            paths::PORT_SETTING,
            &[
                ("portid", port.to_string()),
                ("state", state.to_string()),
                ("speed", speed.to_string()),
                ("flowcontrol", "0".to_owned()),
                ("apply", "Apply".to_owned()),
            ],
        )
        .await
    }

    /// Create a VLAN, or modify the one already carrying `vid`.
    ///
    /// `GET /qvlanSet.cgi?vid={vid}&vname={name}&selType_1..8={sel}&qvlan_add=Add/Modify`
    ///
    /// `selectors` holds the per-port `selType_<n>` pairs, already encoded.
    pub async fn upsert_vlan(
        &self,
        vid: u16,
        name: &str,
        selectors: &[(String, String)],
    ) -> Result<(), Error> {
        debug!(vid, name, "adding or modifying VLAN");
        let mut params: Vec<(&str, String)> = Vec::with_capacity(selectors.len() + 3);
        params.push(("vid", vid.to_string()));
        params.push(("vname", name.to_owned()));
        params.extend(selectors.iter().map(|(k, v)| (k.as_str(), v.clone())));
        params.push(("qvlan_add", "Add/Modify".to_owned()));
        self.send_action(paths::QVLAN, &params).await
    }

    /// Delete a VLAN.
    ///
    /// `GET /qvlanSet.cgi?selVlans={vid}&qvlan_del=Delete`
    pub async fn delete_vlan(&self, vid: u16) -> Result<(), Error> {
        debug!(vid, "deleting VLAN");
        self.send_action(
            paths::QVLAN,
            &[
                ("selVlans", vid.to_string()),
                ("qvlan_del", "Delete".to_owned()),
            ],
        )
        .await
    }
}
