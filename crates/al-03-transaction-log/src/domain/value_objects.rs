//! Transaction log configuration.

use shared_ledger::WritePolicy;

#[derive(Debug, Clone, Default)]
pub struct TransactionLogConfig {
    /// What `transfer` does when the `transactionID` is already recorded.
    /// `Overwrite` by default.
    pub transfer_policy: WritePolicy,
}

impl TransactionLogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transfer_policy(mut self, policy: WritePolicy) -> Self {
        self.transfer_policy = policy;
        self
    }
}
