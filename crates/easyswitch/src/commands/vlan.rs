//! `vlan set` / `vlan delete`.

use easyswitch_core::{Switch, VlanChange, VlanRequest};

use crate::cli::{GlobalOpts, VlanArgs, VlanCommand};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn handle(switch: &Switch, args: VlanArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let request = match args.command {
        VlanCommand::Set { id, name, members } => VlanRequest {
            id,
            name,
            members: members.into_iter().collect(),
        },
        VlanCommand::Delete { id, name } => {
            // Validate first so a bad id never reaches the prompt
            let request = VlanRequest {
                id,
                name,
                members: std::collections::BTreeSet::new(),
            };
            request.validate()?;
            if !util::confirm(
                "vlan delete",
                &format!("Delete VLAN {id} ({})?", request.name),
                global.yes,
            )? {
                return Ok(());
            }
            request
        }
    };

    let change = switch.apply_vlan(&request).await?;

    let out = output::render_single(&global.output, &change, describe, |c| c.id().to_string())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn describe(change: &VlanChange) -> String {
    match change {
        VlanChange::Upsert { id, name, members } => {
            format!("VLAN {id} ({name}) set, members {}", util::port_list(members))
        }
        VlanChange::Delete { id } => format!("VLAN {id} deleted"),
    }
}
