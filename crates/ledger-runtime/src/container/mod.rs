//! Runtime configuration and the module container.

pub mod config;
pub mod host;

pub use config::RuntimeConfig;
pub use host::{HostError, LedgerHost, INIT_FUNCTION};
