//! # Value Objects
//!
//! Configuration for the Asset Registry.

use super::entities::ASSET_INDEX_KEY;
use shared_ledger::WritePolicy;

/// Asset Registry configuration.
#[derive(Debug, Clone)]
pub struct AssetRegistryConfig {
    /// Key the enumeration index is stored under (default: `_asset`).
    pub index_key: String,

    /// What `createAsset` does when the `assetID` is already stored.
    ///
    /// Under `Overwrite` the record is replaced but the index keeps a single
    /// entry for the id.
    pub create_policy: WritePolicy,

    /// Reset the index to empty on every `init`, even if one exists.
    ///
    /// Resetting an existing store leaves every asset directly queryable but
    /// removes all of them from `getAllAssets`. Off by default: `init` only
    /// creates the index when it is missing.
    pub reset_index_on_init: bool,
}

impl Default for AssetRegistryConfig {
    fn default() -> Self {
        Self {
            index_key: ASSET_INDEX_KEY.to_string(),
            create_policy: WritePolicy::Overwrite,
            reset_index_on_init: false,
        }
    }
}

impl AssetRegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_key(mut self, key: impl Into<String>) -> Self {
        self.index_key = key.into();
        self
    }

    pub fn with_create_policy(mut self, policy: WritePolicy) -> Self {
        self.create_policy = policy;
        self
    }

    pub fn with_reset_index_on_init(mut self, reset: bool) -> Self {
        self.reset_index_on_init = reset;
        self
    }
}
