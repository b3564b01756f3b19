//! Command dispatch: bridges CLI args -> switch operations -> output formatting.

pub mod config_cmd;
pub mod diagnose;
pub mod info;
pub mod port;
pub mod system;
pub mod util;
pub mod vlan;

use easyswitch_core::Switch;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a switch-bound command to its handler.
pub async fn dispatch(cmd: Command, switch: &Switch, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Info => info::handle_info(switch, global).await,
        Command::Ports => info::handle_ports(switch, global).await,
        Command::Vlans => info::handle_vlans(switch, global).await,
        Command::Diagnose => diagnose::handle(switch, global).await,
        Command::System(args) => system::handle(switch, args, global).await,
        Command::Port(args) => port::handle(switch, args, global).await,
        Command::Vlan(args) => vlan::handle(switch, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
