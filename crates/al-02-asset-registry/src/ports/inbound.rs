use crate::domain::Asset;
use shared_ledger::{ChaincodeStub, LedgerError};

/// Typed API of the Asset Registry.
pub trait AssetRegistryApi: Send + Sync {
    /// Store a new asset and append its id to the enumeration index, in
    /// one atomic batch.
    fn create_asset(&self, stub: &mut ChaincodeStub<'_>, payload: &str)
        -> Result<Asset, LedgerError>;

    /// Share out `quantity` units of the asset under `asset_id`.
    fn update_asset(
        &self,
        stub: &mut ChaincodeStub<'_>,
        asset_id: &str,
        quantity: i64,
    ) -> Result<Asset, LedgerError>;

    /// Every indexed asset, in index (creation) order.
    ///
    /// Strict: a listed asset that is missing or undecodable aborts the
    /// whole enumeration with `StorageFailure`.
    fn get_all_assets(&self, stub: &ChaincodeStub<'_>) -> Result<Vec<Asset>, LedgerError>;

    fn query(&self, stub: &ChaincodeStub<'_>, asset_id: &str) -> Result<Vec<u8>, LedgerError>;
}
