/// A status page of the web console that carries an inline script block
/// describing part of the switch state.
///
/// Determines which path to fetch; the page contents are scraped by
/// `easyswitch-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Model, firmware, name, MAC and IPv4 settings.
    SystemInfo,
    /// Configured state, speed and flow control per port.
    PortSettings,
    /// Link status and packet counters per port.
    PortStatistics,
    /// 802.1Q VLAN table and VLAN mode flag.
    Vlan,
}

impl Page {
    /// Absolute path of the page on the console.
    pub fn path(self) -> &'static str {
        match self {
            Self::SystemInfo => "/SystemInfoRpm.htm",
            Self::PortSettings => "/PortSettingRpm.htm",
            Self::PortStatistics => "/PortStatisticsRpm.htm",
            Self::Vlan => "/Vlan8021QRpm.htm",
        }
    }
}

/// Form POST target for credentials.
pub const LOGIN: &str = "/logon.cgi";
/// GET target that releases the session slot.
pub const LOGOUT: &str = "/Logout.htm";
/// GET target for renaming the device.
pub const SYSTEM_NAME: &str = "/system_name_set.cgi";
/// GET target for the VLAN mode switch and all VLAN mutations.
pub const QVLAN: &str = "/qvlanSet.cgi";
/// GET target for per-port configuration.
pub const PORT_SETTING: &str = "/port_setting.cgi";
