//! # Core Domain Entities
//!
//! The Wallet record and its lifecycle status.

use serde::{Deserialize, Serialize};
use shared_ledger::{decode_payload, LedgerError};

/// Lifecycle status of a wallet.
///
/// ```text
/// (none) ──issue──→ ISSUED ──approve──→ APPROVED ──trade──→ TRADED ─┐
///                                                             ↑      │
///                                                             └trade─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WalletStatus {
    #[default]
    #[serde(rename = "ISSUED")]
    Issued,
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "TRADED")]
    Traded,
}

impl WalletStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Issued => "ISSUED",
            Self::Approved => "APPROVED",
            Self::Traded => "TRADED",
        }
    }
}

impl std::fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user's stake in one asset, stored under `userID`.
///
/// Field order and names match the stored JSON layout. Missing payload
/// fields take their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "assetID")]
    pub asset_id: String,
    #[serde(rename = "assetTitle")]
    pub asset_title: String,
    /// Total issued, set once at issuance.
    #[serde(rename = "assetIssuedQuantity")]
    pub asset_issued_quantity: i64,
    /// Current holding. Never negative.
    #[serde(rename = "assetMyQuantity")]
    pub asset_my_quantity: i64,
    /// Accounts that received a share, in transfer order. `None` is kept
    /// distinct from an empty list so untouched records re-encode as `null`.
    pub shareholders: Option<Vec<String>>,
    pub issuer: String,
    pub status: WalletStatus,
}

impl Wallet {
    /// Build an issued wallet from a caller payload.
    ///
    /// Any caller-supplied `status` is discarded, whatever its value.
    pub fn from_issue_payload(payload: &str) -> Result<Self, LedgerError> {
        let mut value: serde_json::Value = decode_payload(payload, "Wallet")?;
        if let Some(fields) = value.as_object_mut() {
            fields.remove("status");
        }
        let mut wallet: Wallet = serde_json::from_value(value)
            .map_err(|e| LedgerError::malformed(format!("cannot parse Wallet payload: {}", e)))?;
        wallet.validate_issuance()?;
        wallet.status = WalletStatus::Issued;
        Ok(wallet)
    }

    fn validate_issuance(&self) -> Result<(), LedgerError> {
        if self.user_id.is_empty() {
            return Err(LedgerError::malformed("Wallet userID must not be empty"));
        }
        if self.asset_issued_quantity < 0 || self.asset_my_quantity < 0 {
            return Err(LedgerError::malformed(format!(
                "Wallet quantities must not be negative (issued {}, held {})",
                self.asset_issued_quantity, self.asset_my_quantity
            )));
        }
        Ok(())
    }

    pub fn shareholders(&self) -> &[String] {
        self.shareholders.as_deref().unwrap_or_default()
    }

    /// The approved form of this wallet. Accepted from any prior status.
    pub fn approved(&self) -> Self {
        Self {
            status: WalletStatus::Approved,
            ..self.clone()
        }
    }

    /// The wallet after sending `quantity` units to `recipient`.
    ///
    /// The balance is checked before anything is touched, so a rejected
    /// transfer leaves no trace.
    pub fn after_transfer(&self, recipient: &str, quantity: i64) -> Result<Self, LedgerError> {
        if quantity > self.asset_my_quantity {
            return Err(LedgerError::InsufficientBalance {
                available: self.asset_my_quantity,
                requested: quantity,
            });
        }

        let mut next = self.clone();
        next.shareholders
            .get_or_insert_with(Vec::new)
            .push(recipient.to_string());
        next.asset_my_quantity -= quantity;
        next.status = WalletStatus::Traded;
        Ok(next)
    }
}
