// ── Command layer ──
//
// Caller-supplied change requests and the validated plans they turn
// into. Validation happens here, before a session is opened, so an
// invalid port or VLAN request never reaches the switch.

pub mod requests;

pub use requests::{
    MAX_NAME_LEN, PortChange, PortRequest, SystemSettingsRequest, SystemUpdate, VLAN_ID_MAX,
    VLAN_ID_MIN, VlanChange, VlanRequest, validate_device_name, validate_name,
};
