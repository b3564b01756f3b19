// easyswitch-api: async HTTP client for the TP-Link Easy Smart switch web console

pub mod actions;
pub mod client;
pub mod error;
pub mod paths;
pub mod session;
pub mod transport;

pub use client::SwitchClient;
pub use error::Error;
pub use paths::Page;
pub use transport::TransportConfig;
