//! Closed command set of the Wallet Ledger, validated at the boundary.

use shared_ledger::{expect_args, parse_quantity, LedgerError};

pub mod functions {
    pub const ISSUE_ASSET: &str = "issueAsset";
    pub const APPROVE_ASSET: &str = "approveAsset";
    pub const UPDATE_BALANCE: &str = "updateBalance";
    pub const QUERY: &str = "query";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCommand {
    IssueAsset {
        payload: String,
    },
    ApproveAsset {
        user_id: String,
    },
    UpdateBalance {
        user_id: String,
        recipient_account_id: String,
        transfer_quantity: i64,
    },
    Query {
        user_id: String,
    },
}

impl WalletCommand {
    /// Resolve a host invocation into a command.
    ///
    /// Unknown names fail with `UnknownFunction`; wrong arity or a
    /// non-numeric quantity fail with `MalformedInput`.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, LedgerError> {
        match function {
            functions::ISSUE_ASSET => {
                let [payload] = expect_args::<1>(function, args)?;
                Ok(Self::IssueAsset {
                    payload: payload.clone(),
                })
            }
            functions::APPROVE_ASSET => {
                let [user_id] = expect_args::<1>(function, args)?;
                Ok(Self::ApproveAsset {
                    user_id: user_id.clone(),
                })
            }
            functions::UPDATE_BALANCE => {
                let [user_id, recipient, quantity] = expect_args::<3>(function, args)?;
                Ok(Self::UpdateBalance {
                    user_id: user_id.clone(),
                    recipient_account_id: recipient.clone(),
                    transfer_quantity: parse_quantity(quantity, "transferQuantity")?,
                })
            }
            functions::QUERY => {
                let [user_id] = expect_args::<1>(function, args)?;
                Ok(Self::Query {
                    user_id: user_id.clone(),
                })
            }
            other => Err(LedgerError::UnknownFunction {
                function: other.to_string(),
            }),
        }
    }
}
