//! # Asset Registry Service
//!
//! Implements [`AssetRegistryApi`] and the [`Chaincode`] contract.
//!
//! ## Index Consistency
//!
//! `createAsset` writes the record and the rewritten index as ONE atomic
//! batch through the store port, so an asset is never stored without being
//! enumerable (and never indexed without being stored).


use crate::dispatch::AssetCommand;
use crate::domain::{Asset, AssetRegistryConfig};
use crate::ports::AssetRegistryApi;
use shared_ledger::{
    decode_stored, encode_record, BatchPut, Chaincode, ChaincodeStub, InvokeResult, KeyIndex,
    LedgerError,
};
use tracing::{debug, info, warn};

pub const CHAINCODE_NAME: &str = "asset";

#[derive(Debug, Clone, Default)]
pub struct AssetRegistryService {
    config: AssetRegistryConfig,
}

impl AssetRegistryService {
    pub fn new(config: AssetRegistryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssetRegistryConfig {
        &self.config
    }

    fn index_key(&self) -> &str {
        &self.config.index_key
    }
}

impl AssetRegistryApi for AssetRegistryService {
    fn create_asset(
        &self,
        stub: &mut ChaincodeStub<'_>,
        payload: &str,
    ) -> Result<Asset, LedgerError> {
        let asset = Asset::from_payload(payload)?;
        debug!(?asset, "parsed asset");

        // The index lives in the same keyspace as the records.
        if asset.asset_id == self.index_key() {
            return Err(LedgerError::malformed(format!(
                "assetID '{}' is reserved for the asset index",
                asset.asset_id
            )));
        }

        self.config.create_policy.check(stub, &asset.asset_id)?;

        let mut index = KeyIndex::load_or_empty(stub, self.index_key())?;
        let mut writes = vec![BatchPut::new(
            asset.asset_id.clone(),
            encode_record(&asset.asset_id, &asset)?,
        )];
        if index.append(asset.asset_id.clone()) {
            writes.push(index.to_batch_put()?);
        } else {
            debug!(asset_id = %asset.asset_id, "asset already indexed");
        }
        stub.put_states(writes)?;

        info!(
            asset_id = %asset.asset_id,
            quantity = asset.asset_available_quantity,
            indexed = index.len(),
            "asset stored"
        );
        Ok(asset)
    }

    fn update_asset(
        &self,
        stub: &mut ChaincodeStub<'_>,
        asset_id: &str,
        quantity: i64,
    ) -> Result<Asset, LedgerError> {
        let asset: Asset = stub.read_record(asset_id)?;
        let updated = asset.after_decrement(quantity).inspect_err(|_| {
            warn!(
                asset_id,
                available = asset.asset_available_quantity,
                requested = quantity,
                "it is not possible to have negative balance"
            )
        })?;
        stub.write_record(asset_id, &updated)?;

        info!(
            asset_id,
            quantity,
            remaining = updated.asset_available_quantity,
            "asset updated"
        );
        Ok(updated)
    }

    fn get_all_assets(&self, stub: &ChaincodeStub<'_>) -> Result<Vec<Asset>, LedgerError> {
        let index = KeyIndex::load_or_empty(stub, self.index_key())?;

        index
            .keys()
            .iter()
            .map(|asset_id| {
                let bytes = stub.get_state(asset_id)?.ok_or_else(|| {
                    LedgerError::storage(format!(
                        "asset '{}' is listed in index '{}' but not stored",
                        asset_id,
                        index.name()
                    ))
                })?;
                decode_stored(asset_id, &bytes)
            })
            .collect()
    }

    fn query(&self, stub: &ChaincodeStub<'_>, asset_id: &str) -> Result<Vec<u8>, LedgerError> {
        stub.query_state(asset_id)
    }
}

impl Chaincode for AssetRegistryService {
    fn name(&self) -> &'static str {
        CHAINCODE_NAME
    }

    /// Create the index if it is missing; reset it only when configured to.
    fn init(&self, stub: &mut ChaincodeStub<'_>) -> InvokeResult {
        match KeyIndex::load(stub, self.index_key()) {
            Ok(Some(index)) if !self.config.reset_index_on_init => {
                info!(entries = index.len(), "asset index present, keeping it");
                return Ok(Vec::new());
            }
            Ok(Some(index)) => {
                warn!(
                    entries = index.len(),
                    "resetting asset index; existing assets stay queryable but are no longer enumerable"
                );
            }
            Ok(None) => {}
            // An unreadable index is replaced only on an explicit reset.
            Err(err) if !self.config.reset_index_on_init => return Err(err),
            Err(err) => warn!(%err, "replacing unreadable asset index"),
        }

        KeyIndex::empty(self.index_key()).store(stub)?;
        info!(index_key = self.index_key(), "asset registry initialized");
        Ok(Vec::new())
    }

    fn dispatch(&self, stub: &mut ChaincodeStub<'_>, function: &str, args: &[String]) -> InvokeResult {
        match AssetCommand::parse(function, args)? {
            AssetCommand::CreateAsset { payload } => {
                self.create_asset(stub, &payload)?;
                Ok(Vec::new())
            }
            AssetCommand::UpdateAsset {
                asset_id,
                decrement_quantity,
            } => {
                self.update_asset(stub, &asset_id, decrement_quantity)?;
                Ok(Vec::new())
            }
            AssetCommand::GetAllAssets => {
                let assets = self.get_all_assets(stub)?;
                serde_json::to_vec(&assets)
                    .map_err(|e| LedgerError::storage(format!("cannot encode asset list: {}", e)))
            }
            AssetCommand::Query { asset_id } => self.query(stub, &asset_id),
        }
    }
}
