//! Page scraping, wire codecs and switch operations on top of `easyswitch-api`.
//!
//! This crate owns the domain model and the business logic for talking to
//! a TP-Link Easy Smart switch:
//!
//! - **[`Switch`]**: facade for the public operations. Every call is one
//!   validate, login, request, logout cycle. [`read_state()`](Switch::read_state)
//!   assembles a [`SwitchInfo`] from four console pages;
//!   [`update_system()`](Switch::update_system),
//!   [`configure_port()`](Switch::configure_port) and
//!   [`apply_vlan()`](Switch::apply_vlan) change it;
//!   [`diagnose()`](Switch::diagnose) probes reachability and credentials.
//!
//! - **[`Session`]**: scoped login/logout. [`Session::run()`] guarantees the
//!   device's single session slot is released on every exit path.
//!
//! - **Extraction** ([`scrape`]): a small regex grammar over the inline
//!   scripts the console renders. Tag blocks, `name = value;` variables and
//!   `name: value` attributes; misses are `None`, never errors.
//!
//! - **Codecs** ([`codec`]): speed and state tables, the hex VLAN membership
//!   mask read from status pages, and the per-port selectors written back.
//!
//! - **Commands** ([`command`]): typed change requests and their validation.

pub mod codec;
pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod scrape;
pub mod session;
pub mod switch;

// ── Primary re-exports ──────────────────────────────────────────────
pub use codec::CodecError;
pub use command::requests::*;
pub use config::{Credentials, SwitchConfig};
pub use error::CoreError;
pub use model::{Diagnosis, Port, PortState, Speed, SwitchInfo, Vlan};
pub use session::{Session, SessionState};
pub use switch::Switch;
