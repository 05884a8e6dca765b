//! # Dispatch
//!
//! Maps host invocations (function name + positional string arguments) onto
//! the typed [`WalletLedgerApi`](crate::ports::WalletLedgerApi).

pub mod command;

pub use command::{functions, WalletCommand};
