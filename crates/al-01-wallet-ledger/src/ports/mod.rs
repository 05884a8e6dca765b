//! # Ports Layer
//!
//! The driven port (the keyed store) is shared and lives in `shared-ledger`.

pub mod inbound;

pub use inbound::*;
