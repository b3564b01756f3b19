// ── VLAN domain types ──

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An 802.1Q VLAN as listed on the VLAN status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vlan {
    pub name: String,
    pub id: u16,
    pub tagged: BTreeSet<u8>,
    pub untagged: BTreeSet<u8>,
}

impl Vlan {
    /// All member ports, tagged or not.
    pub fn members(&self) -> BTreeSet<u8> {
        self.tagged.union(&self.untagged).copied().collect()
    }
}
