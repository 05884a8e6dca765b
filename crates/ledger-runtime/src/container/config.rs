//! # Runtime Configuration
//!
//! Read from the environment once at startup. Every variable is optional.
//!
//! | Variable | Default | Effect |
//! |----------|---------|--------|
//! | `AL_DATA_FILE` | `./data/ledger.bin` | ledger file |
//! | `AL_LOG_LEVEL` or `RUST_LOG` | `info` | log filter |
//! | `AL_JSON_LOGS` | `false` | JSON log lines on stderr |
//! | `AL_RESET_INDEX` | `false` | asset `init` empties an existing index |
//! | `AL_MUST_NOT_EXIST` | `false` | create-style writes refuse existing keys |

use al_01_wallet_ledger::WalletLedgerConfig;
use al_02_asset_registry::AssetRegistryConfig;
use al_03_transaction_log::TransactionLogConfig;
use shared_ledger::WritePolicy;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    pub json_logs: bool,
    pub reset_index_on_init: bool,
    pub must_not_exist: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/ledger.bin"),
            log_level: "info".to_string(),
            json_logs: false,
            reset_index_on_init: false,
            must_not_exist: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |name: &str| {
            lookup(name)
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false)
        };

        Self {
            data_file: lookup("AL_DATA_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            log_level: lookup("AL_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            json_logs: flag("AL_JSON_LOGS"),
            reset_index_on_init: flag("AL_RESET_INDEX"),
            must_not_exist: flag("AL_MUST_NOT_EXIST"),
        }
    }

    fn write_policy(&self) -> WritePolicy {
        if self.must_not_exist {
            WritePolicy::MustNotExist
        } else {
            WritePolicy::Overwrite
        }
    }

    pub fn wallet_config(&self) -> WalletLedgerConfig {
        WalletLedgerConfig::new().with_issue_policy(self.write_policy())
    }

    pub fn asset_config(&self) -> AssetRegistryConfig {
        AssetRegistryConfig::new()
            .with_create_policy(self.write_policy())
            .with_reset_index_on_init(self.reset_index_on_init)
    }

    pub fn trade_config(&self) -> TransactionLogConfig {
        TransactionLogConfig::new().with_transfer_policy(self.write_policy())
    }
}
