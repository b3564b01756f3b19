//! Clap derive structures for the `easyswitch` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// easyswitch -- manage TP-Link Easy Smart switches from the command line
#[derive(Debug, Parser)]
#[command(
    name = "easyswitch",
    version,
    about = "Manage TP-Link Easy Smart switches from the command line",
    long_about = "Reads and changes the state of 8-port TP-Link Easy Smart switches\n\
        through their web console: identity, port settings and counters,\n\
        and 802.1Q VLANs.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Switch profile to use
    #[arg(long, short = 'p', env = "EASYSWITCH_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Switch address, optionally with :port (overrides profile)
    #[arg(long, short = 'H', env = "EASYSWITCH_HOST", global = true)]
    pub host: Option<String>,

    /// Web console username (overrides profile)
    #[arg(long, short = 'u', env = "EASYSWITCH_USERNAME", global = true)]
    pub username: Option<String>,

    /// Web console password (overrides profile)
    #[arg(long, env = "EASYSWITCH_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "EASYSWITCH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "EASYSWITCH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show identity, ports and VLANs
    #[command(alias = "show")]
    Info,

    /// List ports with state, speed, link and counters
    Ports,

    /// List 802.1Q VLANs
    Vlans,

    /// Check that the switch is reachable and the credentials work
    #[command(alias = "diag")]
    Diagnose,

    /// Rename the switch and/or toggle 802.1Q VLAN mode
    #[command(alias = "sys")]
    System(SystemArgs),

    /// Configure one port
    Port(PortArgs),

    /// Create, modify or delete a VLAN
    Vlan(VlanArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── System ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("settings")
        .required(true)
        .multiple(true)
        .args(["name", "vlan_mode"])
))]
pub struct SystemArgs {
    /// New device name (letters, digits, '_' and '-', at most 31)
    #[arg(long)]
    pub name: Option<String>,

    /// 802.1Q VLAN mode: 1 = on, 0 = off
    #[arg(long)]
    pub vlan_mode: Option<u8>,
}

// ── Port ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PortArgs {
    /// Port number (1-8)
    pub port: u8,

    /// Administrative state: 1 = enabled, 0 = disabled
    #[arg(long)]
    pub state: u8,

    /// Speed: Auto, 10MH, 10MF, 100MH, 100MF or 1000MF
    #[arg(long, default_value = "Auto")]
    pub speed: String,
}

// ── VLAN ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct VlanArgs {
    #[command(subcommand)]
    pub command: VlanCommand,
}

#[derive(Debug, Subcommand)]
pub enum VlanCommand {
    /// Create a VLAN, or replace the members of an existing one
    Set {
        /// VLAN id (2-32)
        id: u16,

        /// VLAN name
        name: String,

        /// Member ports, comma-separated (e.g. 1,2,5)
        #[arg(value_delimiter = ',', required = true, num_args = 1..)]
        members: Vec<u8>,
    },

    /// Delete a VLAN
    #[command(alias = "rm")]
    Delete {
        /// VLAN id (2-32)
        id: u16,

        /// VLAN name
        name: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current resolved configuration (passwords redacted)
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },

    /// Add or replace a profile
    SetProfile {
        /// Profile name
        name: String,

        /// Switch address
        #[arg(long)]
        host: String,

        /// Web console username
        #[arg(long, default_value = "admin")]
        user: String,

        /// Environment variable holding the password
        #[arg(long)]
        password_env: Option<String>,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
