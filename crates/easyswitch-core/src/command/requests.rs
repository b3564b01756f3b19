// ── Typed change requests ──
//
// Raw values as a caller supplies them, plus the checks that turn them
// into wire-ready changes. Port and VLAN requests are rejected as a whole;
// system settings are two independent sub-actions and an invalid one is
// only skipped.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::codec::{PORT_COUNT, PortState, Speed};
use crate::error::CoreError;

/// Longest accepted device name, in characters.
pub const MAX_NAME_LEN: usize = 31;

/// Lowest user-assignable VLAN id. VLAN 1 is the built-in default.
pub const VLAN_ID_MIN: u16 = 2;
/// Highest VLAN id the supported switches accept.
pub const VLAN_ID_MAX: u16 = 32;

/// Check a VLAN or device name: non-empty, only ASCII letters, digits,
/// `_` and `-`.
pub fn validate_name(field: &'static str, name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(CoreError::validation(
            field,
            format!("'{bad}' is not allowed, use letters, digits, '_' or '-'"),
        ));
    }
    Ok(())
}

/// Check a device name: [`validate_name`] plus at most [`MAX_NAME_LEN`]
/// characters.
pub fn validate_device_name(name: &str) -> Result<(), CoreError> {
    validate_name("name", name)?;
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::validation(
            "name",
            format!("must be at most {MAX_NAME_LEN} characters, got {}", name.len()),
        ));
    }
    Ok(())
}

fn validate_port(port: u8) -> Result<(), CoreError> {
    if (1..=PORT_COUNT).contains(&port) {
        Ok(())
    } else {
        Err(CoreError::validation(
            "port",
            format!("{port} is outside 1..={PORT_COUNT}"),
        ))
    }
}

// ── System settings ────────────────────────────────────────────────

/// Rename the switch and/or toggle 802.1Q VLAN mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `0` turns VLAN mode off, `1` turns it on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_mode: Option<u8>,
}

/// What a system settings request changes, and what it had to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "vlan-mode", skip_serializing_if = "Option::is_none")]
    pub vlan_mode: Option<bool>,
    /// One message per sub-action dropped by validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl SystemUpdate {
    /// Nothing left to send.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.vlan_mode.is_none()
    }
}

impl SystemSettingsRequest {
    /// Validate each sub-action on its own. Invalid values are logged and
    /// listed in [`SystemUpdate::skipped`] rather than failing the request.
    pub fn plan(&self) -> SystemUpdate {
        let mut update = SystemUpdate::default();

        if let Some(ref name) = self.name {
            match validate_device_name(name) {
                Ok(()) => update.name = Some(name.clone()),
                Err(e) => {
                    warn!(error = %e, "skipping rename");
                    update.skipped.push(e.to_string());
                }
            }
        }

        match self.vlan_mode {
            Some(0) => update.vlan_mode = Some(false),
            Some(1) => update.vlan_mode = Some(true),
            Some(other) => {
                let e = CoreError::validation("vlan_mode", format!("{other} is not 0 or 1"));
                warn!(error = %e, "skipping VLAN mode change");
                update.skipped.push(e.to_string());
            }
            None => {}
        }

        update
    }
}

// ── Port ───────────────────────────────────────────────────────────

/// Set a port's administrative state and speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRequest {
    pub port: u8,
    /// `0` disables the port, `1` enables it.
    pub state: u8,
    /// Speed name such as `Auto` or `100MH`.
    pub speed: String,
}

/// A validated port change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortChange {
    pub port: u8,
    pub state: PortState,
    pub speed: Speed,
}

impl PortRequest {
    pub fn validate(&self) -> Result<PortChange, CoreError> {
        validate_port(self.port)?;

        let state = PortState::from_code(self.state)
            .map_err(|_| CoreError::validation("state", format!("{} is not 0 or 1", self.state)))?;

        let speed = self
            .speed
            .parse::<Speed>()
            .ok()
            .filter(|s| s.is_configurable())
            .ok_or_else(|| {
                CoreError::validation(
                    "speed",
                    format!(
                        "'{}' is not one of Auto, 10MH, 10MF, 100MH, 100MF, 1000MF",
                        self.speed
                    ),
                )
            })?;

        Ok(PortChange {
            port: self.port,
            state,
            speed,
        })
    }
}

// ── VLAN ───────────────────────────────────────────────────────────

/// Create, modify or delete an 802.1Q VLAN.
///
/// An empty member set deletes the VLAN; anything else is sent as an
/// add-or-modify and the switch decides which by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlanRequest {
    pub id: u16,
    pub name: String,
    #[serde(default)]
    pub members: BTreeSet<u8>,
}

/// A validated VLAN change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum VlanChange {
    Upsert {
        id: u16,
        name: String,
        members: BTreeSet<u8>,
    },
    Delete {
        id: u16,
    },
}

impl VlanChange {
    pub fn id(&self) -> u16 {
        match self {
            Self::Upsert { id, .. } | Self::Delete { id } => *id,
        }
    }
}

impl VlanRequest {
    pub fn validate(&self) -> Result<VlanChange, CoreError> {
        if !(VLAN_ID_MIN..=VLAN_ID_MAX).contains(&self.id) {
            let message = if self.id == 1 {
                "VLAN 1 is the default VLAN and cannot be changed".to_owned()
            } else {
                format!("{} is outside {VLAN_ID_MIN}..={VLAN_ID_MAX}", self.id)
            };
            return Err(CoreError::validation("id", message));
        }
        validate_name("name", &self.name)?;
        for &port in &self.members {
            validate_port(port)?;
        }

        if self.members.is_empty() {
            Ok(VlanChange::Delete { id: self.id })
        } else {
            Ok(VlanChange::Upsert {
                id: self.id,
                name: self.name.clone(),
                members: self.members.clone(),
            })
        }
    }
}
