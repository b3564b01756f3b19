//! `port`: set one port's state and speed.

use easyswitch_core::{PortRequest, Switch};

use crate::cli::{GlobalOpts, PortArgs};
use crate::error::CliError;
use crate::output;

pub async fn handle(switch: &Switch, args: PortArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let request = PortRequest {
        port: args.port,
        state: args.state,
        speed: args.speed,
    };
    let change = switch.configure_port(&request).await?;

    let out = output::render_single(
        &global.output,
        &change,
        |c| format!("Port {}: {}, speed {}", c.port, c.state, c.speed),
        |c| c.port.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
