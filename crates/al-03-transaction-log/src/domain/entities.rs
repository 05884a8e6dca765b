use serde::{Deserialize, Serialize};
use shared_ledger::{decode_payload, LedgerError};

/// One completed trade between two accounts, stored under `transactionID`.
///
/// Records are written once and never modified by this module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    #[serde(rename = "sellerAccount")]
    pub seller_account: String,
    #[serde(rename = "receiverAccount")]
    pub receiver_account: String,
    pub amount: i64,
    #[serde(rename = "assetID")]
    pub asset_id: String,
    #[serde(rename = "assetTitle")]
    pub asset_title: String,
    /// Seconds since the Unix epoch, as supplied by the caller.
    pub timestamp: i64,
}

impl Transaction {
    pub fn from_payload(payload: &str) -> Result<Self, LedgerError> {
        let transaction: Transaction = decode_payload(payload, "Transaction")?;
        if transaction.transaction_id.is_empty() {
            return Err(LedgerError::malformed(
                "Transaction transactionID must not be empty",
            ));
        }
        Ok(transaction)
    }
}
