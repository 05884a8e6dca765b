//! Transaction log ports.

pub mod inbound;

pub use inbound::*;
