//! Transaction Log service: one keyed write per `transfer`, no reads except
//! for the optional existence check.

use crate::dispatch::TradeCommand;
use crate::domain::{Transaction, TransactionLogConfig};
use crate::ports::TransactionLogApi;
use shared_ledger::{Chaincode, ChaincodeStub, InvokeResult, LedgerError};
use tracing::{debug, info};

pub const CHAINCODE_NAME: &str = "trade";

#[derive(Debug, Clone, Default)]
pub struct TransactionLogService {
    config: TransactionLogConfig,
}

impl TransactionLogService {
    pub fn new(config: TransactionLogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransactionLogConfig {
        &self.config
    }
}

impl TransactionLogApi for TransactionLogService {
    fn transfer(
        &self,
        stub: &mut ChaincodeStub<'_>,
        payload: &str,
    ) -> Result<Transaction, LedgerError> {
        let transaction = Transaction::from_payload(payload)?;
        debug!(?transaction, "parsed transaction");

        self.config
            .transfer_policy
            .check(stub, &transaction.transaction_id)?;
        stub.write_record(&transaction.transaction_id, &transaction)?;

        info!(
            transaction_id = %transaction.transaction_id,
            seller = %transaction.seller_account,
            receiver = %transaction.receiver_account,
            amount = transaction.amount,
            "transaction stored"
        );
        Ok(transaction)
    }

    fn query(&self, stub: &ChaincodeStub<'_>, transaction_id: &str) -> Result<Vec<u8>, LedgerError> {
        stub.query_state(transaction_id)
    }
}

impl Chaincode for TransactionLogService {
    fn name(&self) -> &'static str {
        CHAINCODE_NAME
    }

    fn init(&self, _stub: &mut ChaincodeStub<'_>) -> InvokeResult {
        info!("transaction log initialized");
        Ok(Vec::new())
    }

    fn dispatch(&self, stub: &mut ChaincodeStub<'_>, function: &str, args: &[String]) -> InvokeResult {
        match TradeCommand::parse(function, args)? {
            TradeCommand::Transfer { payload } => {
                self.transfer(stub, &payload)?;
                Ok(Vec::new())
            }
            TradeCommand::Query { transaction_id } => self.query(stub, &transaction_id),
        }
    }
}
