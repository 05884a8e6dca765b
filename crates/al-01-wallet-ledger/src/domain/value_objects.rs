//! # Value Objects
//!
//! Configuration for the Wallet Ledger.

use shared_ledger::WritePolicy;

/// Wallet Ledger configuration.
#[derive(Debug, Clone, Default)]
pub struct WalletLedgerConfig {
    /// What `issueAsset` does when the `userID` already holds a wallet.
    ///
    /// Defaults to `Overwrite`, which silently replaces the existing
    /// wallet including its shareholders and balance.
    pub issue_policy: WritePolicy,
}

impl WalletLedgerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue_policy(mut self, policy: WritePolicy) -> Self {
        self.issue_policy = policy;
        self
    }
}
