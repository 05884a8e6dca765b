//! # Domain Layer
//!
//! The Asset record, its decrement rule and the registry configuration.
//! Index bookkeeping uses `shared_ledger::KeyIndex`.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
