//! # Adapters
//!
//! Store implementations shipped with the substrate. Hosts with a real
//! world-state database provide their own `KeyValueStore`.

pub mod memory;

pub use memory::InMemoryKVStore;
