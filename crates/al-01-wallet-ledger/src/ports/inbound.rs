//! # Inbound Ports (Driving Ports)
//!
//! Typed API of the Wallet Ledger, used by the dispatcher and by hosts that
//! call the module directly.

use crate::domain::Wallet;
use shared_ledger::{ChaincodeStub, LedgerError};

pub trait WalletLedgerApi: Send + Sync {
    /// Parse a wallet payload, force it to ISSUED and store it under its
    /// `userID`.
    fn issue_asset(&self, stub: &mut ChaincodeStub<'_>, payload: &str)
        -> Result<Wallet, LedgerError>;

    /// Mark the wallet under `user_id` as APPROVED.
    fn approve_asset(&self, stub: &mut ChaincodeStub<'_>, user_id: &str)
        -> Result<Wallet, LedgerError>;

    /// Move `quantity` units from the wallet under `user_id` to
    /// `recipient_account_id`.
    fn update_balance(
        &self,
        stub: &mut ChaincodeStub<'_>,
        user_id: &str,
        recipient_account_id: &str,
        quantity: i64,
    ) -> Result<Wallet, LedgerError>;

    /// Raw stored bytes of the wallet under `user_id`.
    fn query(&self, stub: &ChaincodeStub<'_>, user_id: &str) -> Result<Vec<u8>, LedgerError>;
}
