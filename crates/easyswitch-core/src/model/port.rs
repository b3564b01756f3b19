// ── Port domain types ──

use serde::{Deserialize, Serialize};

use crate::codec::{PortState, Speed};

/// One front-panel port.
///
/// Allocated from the port settings page (state, speed, flow control) and
/// then enriched in place from the statistics page (link, counters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// 1-based port number.
    pub number: u8,
    pub state: Option<PortState>,
    /// Configured speed.
    pub speed: Option<Speed>,
    /// Observed link speed; [`Speed::Down`] when there is no link.
    pub link: Option<Speed>,

    #[serde(rename = "TxGoodPkt")]
    pub tx_good: Option<u64>,
    #[serde(rename = "TxBadPkt")]
    pub tx_bad: Option<u64>,
    #[serde(rename = "RxGoodPkt")]
    pub rx_good: Option<u64>,
    #[serde(rename = "RxBadPkt")]
    pub rx_bad: Option<u64>,

    /// Configured flow control, when the settings page reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_control: Option<bool>,
}

impl Port {
    /// An empty port record, before either page has been applied.
    pub fn new(number: u8) -> Self {
        Self {
            number,
            state: None,
            speed: None,
            link: None,
            tx_good: None,
            tx_bad: None,
            rx_good: None,
            rx_bad: None,
            flow_control: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, Some(PortState::Enabled))
    }

    pub fn is_link_up(&self) -> bool {
        self.link.is_some_and(|l| l != Speed::Down)
    }
}
