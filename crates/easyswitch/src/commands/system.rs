//! `system`: rename the switch and toggle VLAN mode.

use std::fmt::Write as _;

use easyswitch_core::{Switch, SystemSettingsRequest, SystemUpdate};

use crate::cli::{GlobalOpts, SystemArgs};
use crate::error::CliError;
use crate::output;

fn detail(update: &SystemUpdate) -> String {
    let mut out = String::new();
    if let Some(ref name) = update.name {
        let _ = writeln!(out, "Renamed switch to {name}");
    }
    if let Some(enabled) = update.vlan_mode {
        let _ = writeln!(
            out,
            "Turned 802.1Q VLAN mode {}",
            if enabled { "on" } else { "off" }
        );
    }
    if update.is_empty() {
        out.push_str("Nothing applied");
    }
    out.trim_end().to_owned()
}

pub async fn handle(
    switch: &Switch,
    args: SystemArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let request = SystemSettingsRequest {
        name: args.name,
        vlan_mode: args.vlan_mode,
    };
    let update = switch.update_system(&request).await?;

    for skipped in &update.skipped {
        eprintln!("warning: skipped {skipped}");
    }

    let out = output::render_single(&global.output, &update, detail, |u| {
        u.name.clone().unwrap_or_default()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
