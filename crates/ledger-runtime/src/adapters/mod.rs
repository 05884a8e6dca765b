//! Store adapters used by the runtime.

pub mod file_store;
pub mod namespaced;

pub use file_store::FileBackedKVStore;
pub use namespaced::NamespacedStore;
