// ── Page-to-domain conversions ──
//
// Bridges the raw HTML of the console's status pages into canonical
// `crate::model` types. Each page carries one inline script whose first
// occurrence holds the data; lists are index-aligned per port or per VLAN.
//
// Policy: a missing script block, attribute or list element leaves the
// corresponding field `None` (logged at `warn` for whole blocks, `debug`
// for single fields). A value that is present but outside its wire table
// is a `CoreError::Decode`.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use tracing::{debug, trace, warn};

use crate::codec::{self, CodecError, PORT_COUNT};
use crate::error::CoreError;
use crate::model::{Port, SwitchInfo, Vlan};
use crate::scrape::{extract_attribute, extract_tag_content, extract_variable, split_list, strip_quotes};

const SCRIPT_TAG: &str = "script";

const SYSTEM_INFO: &str = "system info page";
const PORT_SETTINGS: &str = "port settings page";
const PORT_STATISTICS: &str = "port statistics page";
const VLAN_TABLE: &str = "VLAN page";

/// Counters per port in the statistics `pkts` list:
/// TxGoodPkt, TxBadPkt, RxGoodPkt, RxBadPkt.
const COUNTERS_PER_PORT: usize = 4;

// ── Helpers ────────────────────────────────────────────────────────

/// First inline script of a page, or `None` with a warning.
fn script_block<'a>(html: &'a str, page: &'static str) -> Option<&'a str> {
    let script = extract_tag_content(html, SCRIPT_TAG, 0);
    if script.is_none() {
        warn!(page, "no script block found, leaving fields empty");
    }
    script
}

/// A list attribute split into its elements.
fn list<'a>(script: &'a str, key: &str) -> Option<Vec<&'a str>> {
    let items = extract_attribute(script, key).map(split_list);
    if items.is_none() {
        debug!(key, "list attribute missing");
    }
    items
}

/// The first element of a single-element string list such as
/// `hardwareStr:["TL-SG108E 3.0"]`, unquoted.
fn first_string(script: &str, key: &str) -> Option<String> {
    let raw = extract_attribute(script, key)?;
    let first = split_list(raw).into_iter().next()?;
    Some(strip_quotes(first).trim().to_owned())
}

fn parse_ipv4(script: &str, key: &str) -> Option<Ipv4Addr> {
    let raw = first_string(script, key)?;
    match raw.parse() {
        Ok(ip) => Some(ip),
        Err(_) => {
            debug!(key, raw, "unparseable IPv4 address");
            None
        }
    }
}

/// Decode the `idx`-th element of an optional list. A missing list or a
/// short list yields `None`.
fn decode_at<T>(
    items: Option<&Vec<&str>>,
    idx: usize,
    page: &'static str,
    decode: impl Fn(&str) -> Result<T, CodecError>,
) -> Result<Option<T>, CoreError> {
    items
        .and_then(|list| list.get(idx))
        .map(|raw| decode(raw))
        .transpose()
        .map_err(|source| CoreError::Decode { page, source })
}

/// Number of ports a page describes: the `max_port_num` variable when
/// present, else the length of the per-port list. Never above the
/// front-panel port count.
fn port_count(script: &str, list_len: Option<usize>) -> u8 {
    let declared = extract_variable(script, "max_port_num").and_then(|v| v.parse::<usize>().ok());
    let count = declared.or(list_len).unwrap_or(0);
    u8::try_from(count.min(usize::from(PORT_COUNT))).unwrap_or(PORT_COUNT)
}

// ── System info ────────────────────────────────────────────────────

/// Fill the identity fields of `info` from the system info page.
///
/// Never fails: every field the page does not render stays `None`.
pub fn apply_system_info(html: &str, info: &mut SwitchInfo) {
    let Some(script) = script_block(html, SYSTEM_INFO) else {
        return;
    };

    info.name = first_string(script, "descriStr");
    info.mac = first_string(script, "macStr");
    info.ip = parse_ipv4(script, "ipStr");
    info.netmask = parse_ipv4(script, "netmaskStr");
    info.gateway = parse_ipv4(script, "gatewayStr");
    info.firmware = first_string(script, "firmwareStr");
    info.hardware = first_string(script, "hardwareStr");

    trace!(hardware = ?info.hardware, firmware = ?info.firmware, "system info parsed");
}

// ── Port settings ──────────────────────────────────────────────────

/// Allocate the port list from the port settings page.
///
/// This is the only place ports are created; the statistics page only
/// enriches what is allocated here.
pub fn parse_port_settings(html: &str) -> Result<Vec<Port>, CoreError> {
    let Some(script) = script_block(html, PORT_SETTINGS) else {
        return Ok(Vec::new());
    };

    let states = list(script, "state");
    let speeds = list(script, "spd_cfg");
    let flow_control = list(script, "fc_cfg");

    let count = port_count(script, states.as_ref().map(Vec::len));
    if count == 0 {
        warn!(page = PORT_SETTINGS, "no ports described");
    }

    let mut ports = Vec::with_capacity(usize::from(count));
    for number in 1..=count {
        let idx = usize::from(number - 1);
        let mut port = Port::new(number);
        port.state = decode_at(states.as_ref(), idx, PORT_SETTINGS, codec::decode_state)?;
        port.speed = decode_at(speeds.as_ref(), idx, PORT_SETTINGS, codec::decode_speed)?;
        port.flow_control = decode_at(flow_control.as_ref(), idx, PORT_SETTINGS, |raw| {
            codec::decode_flag("flow control", raw)
        })?;
        ports.push(port);
    }
    Ok(ports)
}

// ── Port statistics ────────────────────────────────────────────────

/// Enrich already-allocated ports with link status and packet counters.
///
/// Entries are matched by position. The firmware pads its lists past the
/// last port and the page is fetched independently of the settings page,
/// so only positions backed by an allocated port are read; anything the
/// statistics page says about further ports is ignored.
pub fn apply_port_statistics(html: &str, ports: &mut [Port]) -> Result<(), CoreError> {
    let Some(script) = script_block(html, PORT_STATISTICS) else {
        return Ok(());
    };

    let links = list(script, "link_status");
    let packets = list(script, "pkts");

    let described = port_count(script, links.as_ref().map(Vec::len));
    if usize::from(described) > ports.len() {
        warn!(
            described,
            allocated = ports.len(),
            "statistics describe ports that were never allocated, ignoring them"
        );
    }

    for (idx, port) in ports.iter_mut().enumerate() {
        port.link = decode_at(links.as_ref(), idx, PORT_STATISTICS, codec::decode_speed)?;

        let base = idx * COUNTERS_PER_PORT;
        let counter = |offset: usize| {
            decode_at(packets.as_ref(), base + offset, PORT_STATISTICS, codec::decode_counter)
        };
        port.tx_good = counter(0)?;
        port.tx_bad = counter(1)?;
        port.rx_good = counter(2)?;
        port.rx_bad = counter(3)?;
    }
    Ok(())
}

// ── VLAN table ─────────────────────────────────────────────────────

/// VLAN mode flag and VLAN list from the 802.1Q VLAN page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VlanTable {
    pub enabled: Option<bool>,
    pub vlans: Vec<Vlan>,
}

/// Parse the VLAN page.
///
/// VLANs are read from the index-aligned `vids`, `names`, `tagMbrs` and
/// `untagMbrs` lists, bounded by `count` when the page carries it. A VLAN
/// without any member port is dropped: the firmware never lists one, and
/// an empty membership means deletion on the write path.
pub fn parse_vlan_table(html: &str) -> Result<VlanTable, CoreError> {
    let Some(script) = script_block(html, VLAN_TABLE) else {
        return Ok(VlanTable::default());
    };

    let enabled = extract_attribute(script, "state")
        .map(|raw| codec::decode_flag("VLAN mode", raw))
        .transpose()
        .map_err(|source| CoreError::Decode {
            page: VLAN_TABLE,
            source,
        })?;

    let Some(ids) = list(script, "vids") else {
        return Ok(VlanTable {
            enabled,
            vlans: Vec::new(),
        });
    };
    let names = list(script, "names");
    let tag_masks = list(script, "tagMbrs");
    let untag_masks = list(script, "untagMbrs");

    let declared = extract_attribute(script, "count").and_then(|c| c.parse::<usize>().ok());
    let count = declared.map_or(ids.len(), |c| c.min(ids.len()));

    let mut vlans = Vec::with_capacity(count);
    for (idx, raw_id) in ids.iter().take(count).enumerate() {
        let id = raw_id.parse::<u16>().map_err(|_| CoreError::Decode {
            page: VLAN_TABLE,
            source: CodecError::Malformed {
                what: "VLAN id",
                raw: (*raw_id).to_owned(),
            },
        })?;
        let name = names
            .as_ref()
            .and_then(|n| n.get(idx))
            .map(|n| strip_quotes(n).to_owned())
            .unwrap_or_default();
        let tagged: BTreeSet<u8> =
            decode_at(tag_masks.as_ref(), idx, VLAN_TABLE, codec::decode_membership)?.unwrap_or_default();
        let untagged: BTreeSet<u8> =
            decode_at(untag_masks.as_ref(), idx, VLAN_TABLE, codec::decode_membership)?.unwrap_or_default();

        let vlan = Vlan {
            name,
            id,
            tagged,
            untagged,
        };
        if vlan.members().is_empty() {
            warn!(vid = id, "VLAN listed without member ports, skipping");
            continue;
        }
        vlans.push(vlan);
    }

    Ok(VlanTable { enabled, vlans })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::codec::{PortState, Speed};
    use pretty_assertions::assert_eq;

    const SYSTEM_INFO_HTML: &str = r#"<html><head>
<script>
var info_ds = {
descriStr:[
"lab-switch"
],
macStr:[
"50:C7:BF:00:11:22"
],
ipStr:[
"192.168.0.1"
],
netmaskStr:[
"255.255.255.0"
],
gatewayStr:[
"192.168.0.254"
],
firmwareStr:[
"1.0.0 Build 20171214 Rel.70905"
],
hardwareStr:[
"TL-SG108E 3.0"
]
};
var tip = "";
</script>
</head></html>"#;

    const STATISTICS_HTML: &str = r"<script>
var max_port_num = 8;
var all_info = {
state:[1,1,1,1,1,1,1,1,0,0],
link_status:[6,0,0,0,5,0,0,6,0,0],
pkts:[10,1,20,2,0,0,0,0,0,0,0,0,0,0,0,0,500,0,600,0,0,0,0,0,0,0,0,0,7,0,8,0,0,0,0,0,0,0,0,0]
};
</script>";

    #[test]
    fn system_info_fields() {
        let mut info = SwitchInfo::default();
        apply_system_info(SYSTEM_INFO_HTML, &mut info);
        assert_eq!(info.name.as_deref(), Some("lab-switch"));
        assert_eq!(info.mac.as_deref(), Some("50:C7:BF:00:11:22"));
        assert_eq!(info.ip, Some(Ipv4Addr::new(192, 168, 0, 1)));
        assert_eq!(info.netmask, Some(Ipv4Addr::new(255, 255, 255, 0)));
        assert_eq!(info.gateway, Some(Ipv4Addr::new(192, 168, 0, 254)));
        assert_eq!(info.firmware.as_deref(), Some("1.0.0 Build 20171214 Rel.70905"));
        assert_eq!(info.hardware.as_deref(), Some("TL-SG108E 3.0"));
    }

    #[test]
    fn system_info_partial_page() {
        let html = r#"<script>var info_ds = { hardwareStr:["TL-SG108E 3.0"], ipStr:["bogus"] };</script>"#;
        let mut info = SwitchInfo::default();
        apply_system_info(html, &mut info);
        assert_eq!(info.hardware.as_deref(), Some("TL-SG108E 3.0"));
        assert_eq!(info.ip, None);
        assert_eq!(info.name, None);
    }

    #[test]
    fn system_info_without_script_is_empty() {
        let mut info = SwitchInfo::default();
        apply_system_info("<html>login required</html>", &mut info);
        assert_eq!(info, SwitchInfo::default());
    }

    #[test]
    fn port_settings_allocate_declared_ports() {
        let html = r"<script>
var max_port_num = 8;
var all_info = {
state:[1,1,1,0,1,1,1,1,0,0],
spd_cfg:[1,1,1,4,1,1,1,6,0,0],
fc_cfg:[0,0,0,0,0,0,0,1,0,0]
};
</script>";
        let ports = parse_port_settings(html).expect("valid page");
        assert_eq!(ports.len(), 8);
        assert_eq!(ports[3].number, 4);
        assert_eq!(ports[3].state, Some(PortState::Disabled));
        assert_eq!(ports[3].speed, Some(Speed::Half100));
        assert_eq!(ports[7].speed, Some(Speed::Full1000));
        assert_eq!(ports[7].flow_control, Some(true));
        assert!(ports.iter().filter(|p| p.number != 4).all(Port::is_enabled));
    }

    #[test]
    fn port_settings_without_count_use_list_length() {
        let html = "<script>var all_info = { state:[1,0,1] };</script>";
        let ports = parse_port_settings(html).expect("valid page");
        assert_eq!(ports.len(), 3);
        assert_eq!(ports[1].state, Some(PortState::Disabled));
        assert_eq!(ports[1].speed, None);
    }

    #[test]
    fn port_settings_cap_at_front_panel() {
        let html = "<script>var all_info = { state:[1,1,1,1,1,1,1,1,1,1] };</script>";
        let ports = parse_port_settings(html).expect("valid page");
        assert_eq!(ports.len(), 8);
    }

    #[test]
    fn port_settings_reject_unknown_speed() {
        let html = "<script>var all_info = { state:[1], spd_cfg:[9] };</script>";
        let err = parse_port_settings(html).unwrap_err();
        assert!(
            matches!(
                err,
                CoreError::Decode {
                    source: CodecError::UnknownSpeed(9),
                    ..
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn statistics_enrich_by_index() {
        let mut ports: Vec<Port> = (1..=8).map(Port::new).collect();
        apply_port_statistics(STATISTICS_HTML, &mut ports).expect("valid page");

        assert_eq!(ports[0].link, Some(Speed::Full1000));
        assert_eq!(ports[0].tx_good, Some(10));
        assert_eq!(ports[0].tx_bad, Some(1));
        assert_eq!(ports[0].rx_good, Some(20));
        assert_eq!(ports[0].rx_bad, Some(2));
        assert_eq!(ports[4].link, Some(Speed::Full100));
        assert_eq!(ports[4].tx_good, Some(500));
        assert_eq!(ports[4].rx_good, Some(600));
        assert!(!ports[1].is_link_up());
        assert_eq!(ports[7].tx_good, Some(7));
        assert_eq!(ports[7].rx_good, Some(8));
    }

    #[test]
    fn statistics_ignore_unallocated_ports() {
        let mut ports: Vec<Port> = (1..=2).map(Port::new).collect();
        apply_port_statistics(STATISTICS_HTML, &mut ports).expect("valid page");
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[1].link, Some(Speed::Down));
    }

    #[test]
    fn statistics_short_lists_leave_fields_empty() {
        let html = "<script>var all_info = { link_status:[6], pkts:[1,2] };</script>";
        let mut ports: Vec<Port> = (1..=2).map(Port::new).collect();
        apply_port_statistics(html, &mut ports).expect("valid page");
        assert_eq!(ports[0].link, Some(Speed::Full1000));
        assert_eq!(ports[0].tx_bad, Some(2));
        assert_eq!(ports[0].rx_good, None);
        assert_eq!(ports[1].link, None);
    }

    #[test]
    fn vlan_table_default_vlan() {
        let html = "<script>var qvlan_ds = {
state:1,
portNum:8,
vids:[1],
count:1,
maxVids:32,
names:['Default'],
tagMbrs:[0x0],
untagMbrs:[0xFF]
};</script>";
        let table = parse_vlan_table(html).expect("valid page");
        assert_eq!(table.enabled, Some(true));
        assert_eq!(
            table.vlans,
            vec![Vlan {
                name: "Default".into(),
                id: 1,
                tagged: BTreeSet::new(),
                untagged: (1..=8).collect(),
            }]
        );
    }

    #[test]
    fn vlan_table_multiple_and_count_bound() {
        let html = "<script>var qvlan_ds = {
state:1, vids:[1,10,20], count:2,
names:['Default','lab','stale'],
tagMbrs:[0x0,0x3,0x0], untagMbrs:[0xFC,0x0,0x0]
};</script>";
        let table = parse_vlan_table(html).expect("valid page");
        assert_eq!(table.vlans.len(), 2);
        let lab = &table.vlans[1];
        assert_eq!(lab.id, 10);
        assert_eq!(lab.name, "lab");
        assert_eq!(lab.tagged, [1, 2].into_iter().collect());
        assert!(lab.untagged.is_empty());
    }

    #[test]
    fn vlan_table_skips_memberless_entries() {
        let html = "<script>var qvlan_ds = { state:1, vids:[1,5], names:['Default','x'], untagMbrs:[0xFF,0x0] };</script>";
        let table = parse_vlan_table(html).expect("valid page");
        assert_eq!(table.vlans.len(), 1);
        assert_eq!(table.vlans[0].id, 1);
    }

    #[test]
    fn vlan_table_mode_disabled_without_list() {
        let html = "<script>var qvlan_ds = { state:0 };</script>";
        let table = parse_vlan_table(html).expect("valid page");
        assert_eq!(table.enabled, Some(false));
        assert!(table.vlans.is_empty());
    }

    #[test]
    fn vlan_table_bad_mask_is_decode_error() {
        let html = "<script>var qvlan_ds = { vids:[1], untagMbrs:[0xZZ] };</script>";
        assert!(matches!(
            parse_vlan_table(html),
            Err(CoreError::Decode { .. })
        ));
    }
}
