use serde::{Deserialize, Serialize};
use strum::Display;

/// Outcome of the reachability/credentials probe.
///
/// Ordered: each state is only reached after the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Diagnosis {
    /// The login request never reached the console.
    NotAccessible,
    /// The console answered, but an authenticated read was refused.
    NotAuthorized,
    /// Login and an authenticated read both succeeded.
    Authorized,
}
