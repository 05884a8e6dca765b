//! # Ports Layer
//!
//! - **Driven Ports (Outbound)**: the keyed store each host must provide.
//! - **Driving Port (Inbound)**: the [`Chaincode`](crate::Chaincode) contract
//!   lives at the crate root since every module implements it.

pub mod outbound;

pub use outbound::*;
