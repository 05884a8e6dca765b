//! # Core Domain Entities

use serde::{Deserialize, Serialize};
use shared_ledger::{decode_payload, LedgerError};

/// Well-known key of the asset enumeration index.
pub const ASSET_INDEX_KEY: &str = "_asset";

/// A shareable catalog entry, stored under `assetID`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    #[serde(rename = "assetID")]
    pub asset_id: String,
    #[serde(rename = "assetTitle")]
    pub asset_title: String,
    /// Remaining shareable units. Never negative.
    #[serde(rename = "assetAvailableQuantity")]
    pub asset_available_quantity: i64,
}

impl Asset {
    pub fn from_payload(payload: &str) -> Result<Self, LedgerError> {
        let asset: Asset = decode_payload(payload, "Asset")?;
        if asset.asset_id.is_empty() {
            return Err(LedgerError::malformed("Asset assetID must not be empty"));
        }
        if asset.asset_available_quantity < 0 {
            return Err(LedgerError::malformed(format!(
                "Asset available quantity must not be negative, got {}",
                asset.asset_available_quantity
            )));
        }
        Ok(asset)
    }

    /// The asset after sharing out `quantity` units.
    pub fn after_decrement(&self, quantity: i64) -> Result<Self, LedgerError> {
        if quantity > self.asset_available_quantity {
            return Err(LedgerError::NegativeBalance {
                available: self.asset_available_quantity,
                requested: quantity,
            });
        }
        Ok(Self {
            asset_available_quantity: self.asset_available_quantity - quantity,
            ..self.clone()
        })
    }
}
