//! CLI configuration: a thin layer over `easyswitch_config`.
//!
//! Adds the flag and environment overrides from `GlobalOpts` on top of
//! the profile resolution done by the shared crate.

use easyswitch_config::{Config, Profile};
use easyswitch_core::SwitchConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use easyswitch_config::{config_path, load_config, save_config};

/// Build a `SwitchConfig` from the config file, profile and CLI overrides.
///
/// Flags win over profile values. Without a matching profile the flags
/// alone must name a host and credentials; an explicitly requested
/// profile that does not exist is an error.
pub fn resolve_switch_config(global: &GlobalOpts) -> Result<SwitchConfig, CliError> {
    let cfg = load_config()?;
    let profile_name = cfg.active_profile_name(global.profile.as_deref());

    match cfg.profiles.get(&profile_name) {
        Some(profile) => {
            let merged = overlay(Some(profile), global);
            Ok(easyswitch_config::profile_to_switch_config(
                &merged,
                &profile_name,
                &cfg.defaults,
            )?)
        }
        None if global.profile.is_some() => Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(&cfg),
        }),
        None => {
            let merged = overlay(None, global);
            if merged.host.is_empty() {
                return Err(CliError::NoConfig {
                    path: config_path().display().to_string(),
                });
            }
            Ok(easyswitch_config::profile_to_switch_config(
                &merged,
                &profile_name,
                &cfg.defaults,
            )?)
        }
    }
}

/// Layer flag values over an optional profile.
///
/// A password given on the command line replaces both the profile's
/// plaintext password and its `password_env`.
fn overlay(profile: Option<&Profile>, global: &GlobalOpts) -> Profile {
    let base = profile.map_or_else(Profile::default, |p| Profile {
        host: p.host.clone(),
        username: p.username.clone(),
        password: p.password.clone(),
        password_env: p.password_env.clone(),
        timeout: p.timeout,
        probe_timeout: p.probe_timeout,
    });

    let flag_password = global.password.clone();
    Profile {
        host: global.host.clone().unwrap_or(base.host),
        username: global.username.clone().or(base.username),
        password_env: if flag_password.is_some() {
            None
        } else {
            base.password_env
        },
        password: flag_password.or(base.password),
        timeout: global.timeout.or(base.timeout),
        probe_timeout: base.probe_timeout,
    }
}

/// Comma-separated, sorted profile names for error help text.
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}
