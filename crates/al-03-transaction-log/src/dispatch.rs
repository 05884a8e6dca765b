//! Maps invoked function names and arguments to transaction log commands.

use shared_ledger::{expect_args, LedgerError};

pub mod functions {
    pub const TRANSFER: &str = "transfer";
    pub const QUERY: &str = "query";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeCommand {
    Transfer { payload: String },
    Query { transaction_id: String },
}

impl TradeCommand {
    pub fn parse(function: &str, args: &[String]) -> Result<Self, LedgerError> {
        match function {
            functions::TRANSFER => {
                let [payload] = expect_args::<1>(function, args)?;
                Ok(Self::Transfer {
                    payload: payload.clone(),
                })
            }
            functions::QUERY => {
                let [transaction_id] = expect_args::<1>(function, args)?;
                Ok(Self::Query {
                    transaction_id: transaction_id.clone(),
                })
            }
            other => Err(LedgerError::UnknownFunction {
                function: other.to_string(),
            }),
        }
    }
}
