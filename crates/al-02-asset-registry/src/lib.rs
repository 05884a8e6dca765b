//! # Asset Registry (al-02)
//!
//! Catalog of shareable assets, each with a remaining available quantity,
//! plus an ordered index (`_asset`) that is the only way to list them.
//!
//! ## Functions
//!
//! | Function | Args | Payload |
//! |----------|------|---------|
//! | `createAsset` | `[serialized Asset]` | empty |
//! | `updateAsset` | `[assetID, decrementQuantity]` | empty |
//! | `getAllAssets` | `[]` | JSON array in creation order |
//! | `query` | `[assetID]` | stored bytes |
//!
//! ## Invariants
//!
//! - `assetAvailableQuantity` never goes below zero
//! - Every indexed id names a stored asset (record and index are one batch)
//! - Each id is indexed once, in first-creation order
//! - The index key itself is never accepted as an `assetID`
//!
//! `getAllAssets` is strict: a listed but missing or undecodable asset fails
//! the whole call with `StorageFailure` rather than being skipped.

pub mod dispatch;
pub mod domain;
pub mod ports;
pub mod service;

pub use dispatch::{functions, AssetCommand};
pub use domain::{Asset, AssetRegistryConfig, ASSET_INDEX_KEY};
pub use ports::AssetRegistryApi;
pub use service::{AssetRegistryService, CHAINCODE_NAME};
