//! # Domain Layer
//!
//! Pure wallet logic. No store access happens here; the service layer reads
//! a wallet, asks the domain for its next form, and writes that back.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
