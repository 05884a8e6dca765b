//! Inbound API of the transaction log.

use crate::domain::Transaction;
use shared_ledger::{ChaincodeStub, LedgerError};

pub trait TransactionLogApi: Send + Sync {
    /// Record a completed trade under its `transactionID`.
    fn transfer(&self, stub: &mut ChaincodeStub<'_>, payload: &str)
        -> Result<Transaction, LedgerError>;

    fn query(&self, stub: &ChaincodeStub<'_>, transaction_id: &str) -> Result<Vec<u8>, LedgerError>;
}
