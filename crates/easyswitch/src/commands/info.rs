//! Read-only commands: `info`, `ports`, `vlans`.

use std::fmt::Write as _;

use tabled::Tabled;

use easyswitch_core::{Port, Switch, SwitchInfo, Vlan};

use crate::cli::GlobalOpts;
use crate::commands::util::{or_dash, port_list};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PortRow {
    #[tabled(rename = "Port")]
    number: u8,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Speed")]
    speed: String,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Tx Good")]
    tx_good: String,
    #[tabled(rename = "Tx Bad")]
    tx_bad: String,
    #[tabled(rename = "Rx Good")]
    rx_good: String,
    #[tabled(rename = "Rx Bad")]
    rx_bad: String,
}

impl From<&Port> for PortRow {
    fn from(p: &Port) -> Self {
        Self {
            number: p.number,
            state: or_dash(p.state),
            speed: or_dash(p.speed),
            link: or_dash(p.link),
            tx_good: or_dash(p.tx_good),
            tx_bad: or_dash(p.tx_bad),
            rx_good: or_dash(p.rx_good),
            rx_bad: or_dash(p.rx_bad),
        }
    }
}

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "ID")]
    id: u16,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tagged")]
    tagged: String,
    #[tabled(rename = "Untagged")]
    untagged: String,
}

impl From<&Vlan> for VlanRow {
    fn from(v: &Vlan) -> Self {
        Self {
            id: v.id,
            name: v.name.clone(),
            tagged: port_list(&v.tagged),
            untagged: port_list(&v.untagged),
        }
    }
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(info: &SwitchInfo) -> String {
    let mut out = String::new();
    let vlan_mode = match info.vlan_mode {
        Some(true) => "on",
        Some(false) => "off",
        None => "-",
    };
    let _ = writeln!(out, "Name:      {}", or_dash(info.name.as_deref()));
    let _ = writeln!(out, "Hardware:  {}", or_dash(info.hardware.as_deref()));
    let _ = writeln!(out, "Firmware:  {}", or_dash(info.firmware.as_deref()));
    let _ = writeln!(out, "MAC:       {}", or_dash(info.mac.as_deref()));
    let _ = writeln!(out, "IP:        {}", or_dash(info.ip));
    let _ = writeln!(out, "Netmask:   {}", or_dash(info.netmask));
    let _ = writeln!(out, "Gateway:   {}", or_dash(info.gateway));
    let _ = writeln!(out, "VLAN mode: {vlan_mode}");

    if !info.ports.is_empty() {
        let rows: Vec<PortRow> = info.ports.iter().map(PortRow::from).collect();
        let _ = write!(out, "\n{}\n", output::render_table(&rows));
    }
    if !info.vlans.is_empty() {
        let rows: Vec<VlanRow> = info.vlans.iter().map(VlanRow::from).collect();
        let _ = write!(out, "\n{}\n", output::render_table(&rows));
    }
    out.trim_end().to_owned()
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle_info(switch: &Switch, global: &GlobalOpts) -> Result<(), CliError> {
    let info = switch.read_state().await?;
    let out = output::render_single(&global.output, &info, detail, |i| {
        i.name.clone().unwrap_or_default()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_ports(switch: &Switch, global: &GlobalOpts) -> Result<(), CliError> {
    let info = switch.read_state().await?;
    let out = output::render_list(&global.output, &info.ports, |p| PortRow::from(p), |p| {
        p.number.to_string()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_vlans(switch: &Switch, global: &GlobalOpts) -> Result<(), CliError> {
    let info = switch.read_state().await?;
    let out = output::render_list(&global.output, &info.vlans, |v| VlanRow::from(v), |v| {
        v.id.to_string()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use easyswitch_core::{PortState, Speed};

    fn sample() -> SwitchInfo {
        let mut port = Port::new(1);
        port.state = Some(PortState::Enabled);
        port.speed = Some(Speed::Auto);
        port.link = Some(Speed::Down);
        SwitchInfo {
            name: Some("core-sw".into()),
            ip: Some("192.168.0.1".parse().expect("ip")),
            vlan_mode: Some(true),
            ports: vec![port, Port::new(2)],
            vlans: vec![Vlan {
                name: "Default".into(),
                id: 1,
                tagged: [].into_iter().collect(),
                untagged: (1..=8).collect(),
            }],
            ..SwitchInfo::default()
        }
    }

    #[test]
    fn detail_shows_identity_and_tables() {
        let text = detail(&sample());
        assert!(text.contains("Name:      core-sw"));
        assert!(text.contains("IP:        192.168.0.1"));
        assert!(text.contains("Firmware:  -"));
        assert!(text.contains("VLAN mode: on"));
        assert!(text.contains("1,2,3,4,5,6,7,8"));
    }

    #[test]
    fn unread_port_fields_render_as_dash() {
        let row = PortRow::from(&Port::new(2));
        assert_eq!(row.state, "-");
        assert_eq!(row.rx_bad, "-");
    }
}
