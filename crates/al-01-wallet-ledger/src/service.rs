//! # Wallet Ledger Service
//!
//! Implements [`WalletLedgerApi`] over a [`ChaincodeStub`] and exposes it to
//! the host through the [`Chaincode`] contract.
//!
//! Every handler is one keyed read (optional), one domain step and one
//! keyed write.

use crate::dispatch::WalletCommand;
use crate::domain::{Wallet, WalletLedgerConfig};
use crate::ports::WalletLedgerApi;
use shared_ledger::{Chaincode, ChaincodeStub, InvokeResult, LedgerError};
use tracing::{debug, info, warn};

pub const CHAINCODE_NAME: &str = "wallet";

#[derive(Debug, Clone, Default)]
pub struct WalletLedgerService {
    config: WalletLedgerConfig,
}

impl WalletLedgerService {
    pub fn new(config: WalletLedgerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalletLedgerConfig {
        &self.config
    }
}

impl WalletLedgerApi for WalletLedgerService {
    fn issue_asset(
        &self,
        stub: &mut ChaincodeStub<'_>,
        payload: &str,
    ) -> Result<Wallet, LedgerError> {
        let wallet = Wallet::from_issue_payload(payload)?;
        debug!(?wallet, "parsed wallet");

        self.config.issue_policy.check(stub, &wallet.user_id)?;
        stub.write_record(&wallet.user_id, &wallet)?;

        info!(
            user_id = %wallet.user_id,
            asset_id = %wallet.asset_id,
            quantity = wallet.asset_my_quantity,
            "wallet issued"
        );
        Ok(wallet)
    }

    fn approve_asset(
        &self,
        stub: &mut ChaincodeStub<'_>,
        user_id: &str,
    ) -> Result<Wallet, LedgerError> {
        let wallet: Wallet = stub.read_record(user_id)?;
        let approved = wallet.approved();
        stub.write_record(user_id, &approved)?;

        info!(user_id, previous = %wallet.status, "wallet approved");
        Ok(approved)
    }

    fn update_balance(
        &self,
        stub: &mut ChaincodeStub<'_>,
        user_id: &str,
        recipient_account_id: &str,
        quantity: i64,
    ) -> Result<Wallet, LedgerError> {
        let wallet: Wallet = stub.read_record(user_id)?;
        let updated = wallet
            .after_transfer(recipient_account_id, quantity)
            .inspect_err(|_| {
                warn!(
                    user_id,
                    available = wallet.asset_my_quantity,
                    requested = quantity,
                    "not enough balance to complete the transfer"
                )
            })?;
        stub.write_record(user_id, &updated)?;

        info!(
            user_id,
            recipient = recipient_account_id,
            quantity,
            remaining = updated.asset_my_quantity,
            "wallet balance updated"
        );
        Ok(updated)
    }

    fn query(&self, stub: &ChaincodeStub<'_>, user_id: &str) -> Result<Vec<u8>, LedgerError> {
        stub.query_state(user_id)
    }
}

impl Chaincode for WalletLedgerService {
    fn name(&self) -> &'static str {
        CHAINCODE_NAME
    }

    fn init(&self, _stub: &mut ChaincodeStub<'_>) -> InvokeResult {
        info!("wallet ledger initialized");
        Ok(Vec::new())
    }

    fn dispatch(&self, stub: &mut ChaincodeStub<'_>, function: &str, args: &[String]) -> InvokeResult {
        match WalletCommand::parse(function, args)? {
            WalletCommand::IssueAsset { payload } => {
                self.issue_asset(stub, &payload)?;
                Ok(Vec::new())
            }
            WalletCommand::ApproveAsset { user_id } => {
                self.approve_asset(stub, &user_id)?;
                Ok(Vec::new())
            }
            WalletCommand::UpdateBalance {
                user_id,
                recipient_account_id,
                transfer_quantity,
            } => {
                self.update_balance(stub, &user_id, &recipient_account_id, transfer_quantity)?;
                Ok(Vec::new())
            }
            WalletCommand::Query { user_id } => self.query(stub, &user_id),
        }
    }
}
