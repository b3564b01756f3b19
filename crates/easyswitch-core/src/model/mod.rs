// ── Domain model ──
//
// Normalized switch state as read from the console pages. Every scalar
// that comes from scraping is optional: a field the firmware did not
// render stays `None` instead of failing the whole read.

pub mod diagnosis;
pub mod port;
pub mod switch;
pub mod vlan;

pub use crate::codec::{PortState, Speed};
pub use diagnosis::Diagnosis;
pub use port::Port;
pub use switch::SwitchInfo;
pub use vlan::Vlan;
