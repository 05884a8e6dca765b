//! Closed command set of the Asset Registry, validated at the boundary.

use shared_ledger::{expect_args, parse_quantity, LedgerError};

pub mod functions {
    pub const CREATE_ASSET: &str = "createAsset";
    pub const UPDATE_ASSET: &str = "updateAsset";
    pub const GET_ALL_ASSETS: &str = "getAllAssets";
    pub const QUERY: &str = "query";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetCommand {
    CreateAsset { payload: String },
    UpdateAsset { asset_id: String, decrement_quantity: i64 },
    GetAllAssets,
    Query { asset_id: String },
}

impl AssetCommand {
    pub fn parse(function: &str, args: &[String]) -> Result<Self, LedgerError> {
        match function {
            functions::CREATE_ASSET => {
                let [payload] = expect_args::<1>(function, args)?;
                Ok(Self::CreateAsset {
                    payload: payload.clone(),
                })
            }
            functions::UPDATE_ASSET => {
                let [asset_id, quantity] = expect_args::<2>(function, args)?;
                Ok(Self::UpdateAsset {
                    asset_id: asset_id.clone(),
                    decrement_quantity: parse_quantity(quantity, "decrementQuantity")?,
                })
            }
            functions::GET_ALL_ASSETS => {
                expect_args::<0>(function, args)?;
                Ok(Self::GetAllAssets)
            }
            functions::QUERY => {
                let [asset_id] = expect_args::<1>(function, args)?;
                Ok(Self::Query {
                    asset_id: asset_id.clone(),
                })
            }
            other => Err(LedgerError::UnknownFunction {
                function: other.to_string(),
            }),
        }
    }
}
