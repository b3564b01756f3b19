//! `diagnose`: reachability and credentials probe.

use serde::Serialize;

use easyswitch_core::{Diagnosis, Switch};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct Report<'a> {
    host: &'a str,
    diagnosis: Diagnosis,
}

/// Print the probe result, then fail with the matching exit code unless
/// the switch accepted the credentials.
pub async fn handle(switch: &Switch, global: &GlobalOpts) -> Result<(), CliError> {
    let host = switch.config().host.as_str();
    let diagnosis = switch.diagnose().await?;

    let report = Report { host, diagnosis };
    let out = output::render_single(
        &global.output,
        &report,
        |r| format!("{}: {}", r.host, r.diagnosis),
        |r| r.diagnosis.to_string(),
    )?;
    output::print_output(&out, global.quiet);

    match diagnosis {
        Diagnosis::Authorized => Ok(()),
        Diagnosis::NotAuthorized => Err(CliError::AuthFailed { host: host.into() }),
        Diagnosis::NotAccessible => Err(CliError::NotAccessible { host: host.into() }),
    }
}
