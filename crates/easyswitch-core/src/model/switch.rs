// ── Switch domain types ──

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use super::port::Port;
use super::vlan::Vlan;

/// Full switch state, assembled fresh by each read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchInfo {
    pub hardware: Option<String>,
    pub firmware: Option<String>,
    pub name: Option<String>,
    pub mac: Option<String>,
    pub ip: Option<Ipv4Addr>,
    pub netmask: Option<Ipv4Addr>,
    pub gateway: Option<Ipv4Addr>,
    #[serde(rename = "vlan-mode")]
    pub vlan_mode: Option<bool>,
    pub ports: Vec<Port>,
    pub vlans: Vec<Vlan>,
}
