//! # Ledger Host
//!
//! Holds one instance of every lifecycle module and routes an invocation to
//! the module named by the caller. Each invocation gets a fresh transaction
//! identifier and its own [`ChaincodeStub`] over the module's namespace of
//! the shared store.

use al_01_wallet_ledger::WalletLedgerService;
use al_02_asset_registry::AssetRegistryService;
use al_03_transaction_log::TransactionLogService;
use shared_ledger::{Chaincode, ChaincodeResponse, ChaincodeStub, KeyValueStore};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use super::RuntimeConfig;
use crate::adapters::NamespacedStore;

/// Function name that routes to `Chaincode::init` instead of dispatch.
pub const INIT_FUNCTION: &str = "init";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("unknown module '{module}', expected one of: {known}")]
    UnknownModule { module: String, known: String },
}

pub struct LedgerHost {
    modules: Vec<Box<dyn Chaincode>>,
}

impl LedgerHost {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            modules: vec![
                Box::new(WalletLedgerService::new(config.wallet_config())),
                Box::new(AssetRegistryService::new(config.asset_config())),
                Box::new(TransactionLogService::new(config.trade_config())),
            ],
        }
    }

    /// Names modules are routed by, in registration order.
    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    pub fn module(&self, name: &str) -> Result<&dyn Chaincode, HostError> {
        self.modules
            .iter()
            .find(|m| m.name() == name)
            .map(|m| m.as_ref())
            .ok_or_else(|| HostError::UnknownModule {
                module: name.to_string(),
                known: self.module_names().join(", "),
            })
    }

    /// Run `init` or one function of `module` against `store`.
    ///
    /// Module failures come back as an error response; only routing
    /// failures are a `HostError`.
    pub fn execute(
        &self,
        store: &mut dyn KeyValueStore,
        module: &str,
        function: &str,
        args: &[String],
    ) -> Result<ChaincodeResponse, HostError> {
        let chaincode = self.module(module)?;
        let tx_id = Uuid::new_v4().to_string();
        info!(module, function, %tx_id, "executing");

        let mut namespaced = NamespacedStore::new(store, chaincode.name());
        let mut stub = ChaincodeStub::new(&mut namespaced, tx_id);
        let result = if function == INIT_FUNCTION {
            chaincode.init(&mut stub)
        } else {
            chaincode.invoke(&mut stub, function, args)
        };
        Ok(result.into())
    }
}
