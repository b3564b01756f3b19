// ── Wire codecs ──
//
// Fixed lookup tables between the firmware's wire codes and domain values.
// Speed and state codes are indices into ordered tables. VLAN membership
// has two unrelated encodings: the status page reports a packed hex
// bitmask, while the mutation endpoint takes one selector per port. They
// share the port-set representation but are separate functions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr};
use thiserror::Error;

/// Number of front-panel ports on the supported switches.
pub const PORT_COUNT: u8 = 8;

/// Selector value marking a port as a member of the VLAN being written.
const SELECT_MEMBER: &str = "1";
/// Selector value marking a port as not a member.
const SELECT_NOT_MEMBER: &str = "2";

/// A wire value that has no domain counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("speed code {0} is outside the speed table")]
    UnknownSpeed(u8),

    #[error("state code {0} is not 0 or 1")]
    UnknownState(u8),

    #[error("malformed {what} value '{raw}'")]
    Malformed { what: &'static str, raw: String },
}

// ── Speed ───────────────────────────────────────────────────────────

/// Port speed table. The discriminant is the wire code, so the variant
/// order is significant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Speed {
    /// No link. Only meaningful as an observed link speed.
    #[serde(rename = "down")]
    #[strum(serialize = "down")]
    Down = 0,
    Auto = 1,
    #[serde(rename = "10MH")]
    #[strum(serialize = "10MH")]
    Half10 = 2,
    #[serde(rename = "10MF")]
    #[strum(serialize = "10MF")]
    Full10 = 3,
    #[serde(rename = "100MH")]
    #[strum(serialize = "100MH")]
    Half100 = 4,
    #[serde(rename = "100MF")]
    #[strum(serialize = "100MF")]
    Full100 = 5,
    #[serde(rename = "1000MF")]
    #[strum(serialize = "1000MF")]
    Full1000 = 6,
    /// Placeholder the firmware uses for padding entries.
    #[serde(rename = "unset")]
    #[strum(serialize = "unset")]
    Unset = 7,
}

impl Speed {
    pub fn from_code(code: u8) -> Result<Self, CodecError> {
        Self::from_repr(code).ok_or(CodecError::UnknownSpeed(code))
    }

    #[allow(clippy::as_conversions)]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether a port can be configured to this speed.
    pub fn is_configurable(self) -> bool {
        !matches!(self, Self::Down | Self::Unset)
    }
}

// ── Port state ──────────────────────────────────────────────────────

/// Administrative port state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum PortState {
    Disabled = 0,
    Enabled = 1,
}

impl PortState {
    pub fn from_code(code: u8) -> Result<Self, CodecError> {
        Self::from_repr(code).ok_or(CodecError::UnknownState(code))
    }

    #[allow(clippy::as_conversions)]
    pub fn code(self) -> u8 {
        self as u8
    }
}

// ── Raw element decoding ────────────────────────────────────────────

/// Parse one decimal list element into a wire code.
pub fn parse_code(what: &'static str, raw: &str) -> Result<u8, CodecError> {
    raw.trim().parse().map_err(|_| CodecError::Malformed {
        what,
        raw: raw.to_owned(),
    })
}

pub fn decode_speed(raw: &str) -> Result<Speed, CodecError> {
    Speed::from_code(parse_code("speed", raw)?)
}

pub fn decode_state(raw: &str) -> Result<PortState, CodecError> {
    PortState::from_code(parse_code("state", raw)?)
}

/// Decode a `0`/`1` on/off flag.
pub fn decode_flag(what: &'static str, raw: &str) -> Result<bool, CodecError> {
    match parse_code(what, raw)? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(CodecError::Malformed {
            what,
            raw: raw.to_owned(),
        }),
    }
}

/// Decode an unsigned packet counter.
pub fn decode_counter(raw: &str) -> Result<u64, CodecError> {
    raw.trim().parse().map_err(|_| CodecError::Malformed {
        what: "counter",
        raw: raw.to_owned(),
    })
}

// ── VLAN membership ─────────────────────────────────────────────────

/// Decode a membership bitmask as reported by the VLAN status page.
///
/// Accepts `FF` as well as `0xFF`. Port `p` is a member iff bit `p-1` is
/// set; bits above the front-panel ports are ignored.
pub fn decode_membership(hex: &str) -> Result<BTreeSet<u8>, CodecError> {
    let trimmed = hex.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let mask = u16::from_str_radix(digits, 16).map_err(|_| CodecError::Malformed {
        what: "membership mask",
        raw: hex.to_owned(),
    })?;
    Ok((1..=PORT_COUNT)
        .filter(|port| mask & (1u16 << (port - 1)) != 0)
        .collect())
}

/// Encode a VLAN's member ports as the per-port `selType_<n>` parameters
/// the mutation endpoint expects.
pub fn encode_membership_selectors(members: &BTreeSet<u8>) -> Vec<(String, String)> {
    (1..=PORT_COUNT)
        .map(|port| {
            let value = if members.contains(&port) {
                SELECT_MEMBER
            } else {
                SELECT_NOT_MEMBER
            };
            (format!("selType_{port}"), value.to_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn ports(list: &[u8]) -> BTreeSet<u8> {
        list.iter().copied().collect()
    }

    fn members_from_selectors(selectors: &[(String, String)]) -> BTreeSet<u8> {
        selectors
            .iter()
            .filter(|(_, v)| v == SELECT_MEMBER)
            .filter_map(|(k, _)| k.strip_prefix("selType_")?.parse().ok())
            .collect()
    }

    #[test]
    fn speed_table_order() {
        let names: Vec<String> = Speed::iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            ["down", "Auto", "10MH", "10MF", "100MH", "100MF", "1000MF", "unset"]
        );
        for (idx, speed) in Speed::iter().enumerate() {
            assert_eq!(usize::from(speed.code()), idx);
        }
    }

    #[test]
    fn speed_decode_rejects_out_of_range() {
        assert_eq!(Speed::from_code(4), Ok(Speed::Half100));
        assert_eq!(Speed::from_code(8), Err(CodecError::UnknownSpeed(8)));
        assert!(decode_speed("x").is_err());
    }

    #[test]
    fn speed_names_parse_case_insensitively() {
        assert_eq!("100MH".parse::<Speed>(), Ok(Speed::Half100));
        assert_eq!("auto".parse::<Speed>(), Ok(Speed::Auto));
        assert_eq!("1000mf".parse::<Speed>(), Ok(Speed::Full1000));
        assert!("10G".parse::<Speed>().is_err());
    }

    #[test]
    fn configurable_speeds_exclude_placeholders() {
        assert!(!Speed::Down.is_configurable());
        assert!(!Speed::Unset.is_configurable());
        assert!(Speed::Auto.is_configurable());
        assert!(Speed::Full1000.is_configurable());
    }

    #[test]
    fn state_codes() {
        assert_eq!(decode_state("1"), Ok(PortState::Enabled));
        assert_eq!(decode_state(" 0 "), Ok(PortState::Disabled));
        assert_eq!(decode_state("2"), Err(CodecError::UnknownState(2)));
        assert_eq!(PortState::Enabled.code(), 1);
    }

    #[test]
    fn flags_and_counters() {
        assert_eq!(decode_flag("vlan mode", "1"), Ok(true));
        assert_eq!(decode_flag("vlan mode", "0"), Ok(false));
        assert!(decode_flag("vlan mode", "2").is_err());
        assert_eq!(decode_counter("4294967296"), Ok(4_294_967_296));
        assert!(decode_counter("-1").is_err());
    }

    #[test]
    fn membership_decode() {
        assert_eq!(decode_membership("FF"), Ok(ports(&[1, 2, 3, 4, 5, 6, 7, 8])));
        assert_eq!(decode_membership("AA"), Ok(ports(&[2, 4, 6, 8])));
        assert_eq!(decode_membership("00"), Ok(BTreeSet::new()));
        assert_eq!(decode_membership("0x3"), Ok(ports(&[1, 2])));
    }

    #[test]
    fn membership_decode_ignores_high_ports() {
        assert_eq!(decode_membership("0xFF01"), Ok(ports(&[1])));
    }

    #[test]
    fn membership_decode_rejects_garbage() {
        assert!(decode_membership("").is_err());
        assert!(decode_membership("0xZZ").is_err());
        assert!(decode_membership("10000").is_err());
    }

    #[test]
    fn membership_selectors_cover_every_port() {
        let selectors = encode_membership_selectors(&ports(&[2, 4]));
        assert_eq!(selectors.len(), 8);
        assert_eq!(selectors[0], ("selType_1".to_string(), "2".to_string()));
        assert_eq!(selectors[1], ("selType_2".to_string(), "1".to_string()));
        assert_eq!(selectors[3], ("selType_4".to_string(), "1".to_string()));
        assert_eq!(selectors[7], ("selType_8".to_string(), "2".to_string()));
    }

    #[test]
    fn membership_decode_then_encode_is_stable() {
        for mask in ["FF", "AA", "00", "0x81"] {
            let decoded = decode_membership(mask).expect("valid mask");
            let selectors = encode_membership_selectors(&decoded);
            assert_eq!(members_from_selectors(&selectors), decoded, "mask {mask}");
        }
    }
}
