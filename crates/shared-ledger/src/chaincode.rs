//! # Chaincode Contract
//!
//! The inbound port every lifecycle module implements: an `init` entry point
//! and a function-name dispatch, both executed against a [`ChaincodeStub`].
//!
//! ```text
//! host ──(function, args)──→ invoke ──→ dispatch ──→ handler ──→ stub get/put
//!   ↑                                                                │
//!   └──────────────── ChaincodeResponse (200 payload / 500 msg) ─────┘
//! ```

use crate::errors::{LedgerError, LedgerErrorPayload};
use crate::stub::ChaincodeStub;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

/// Result of a single invocation: a payload (possibly empty) or an error.
pub type InvokeResult = Result<Vec<u8>, LedgerError>;

/// A lifecycle module hosted by the transaction-processing runtime.
pub trait Chaincode: Send + Sync {
    /// Short module name used in logs and host routing.
    fn name(&self) -> &'static str;

    /// One-time (or repeated) initialization.
    fn init(&self, stub: &mut ChaincodeStub<'_>) -> InvokeResult;

    /// Map a function name onto a handler and run it.
    fn dispatch(&self, stub: &mut ChaincodeStub<'_>, function: &str, args: &[String]) -> InvokeResult;

    /// Dispatch inside a span carrying the module, function and transaction id.
    fn invoke(&self, stub: &mut ChaincodeStub<'_>, function: &str, args: &[String]) -> InvokeResult {
        let span = info_span!(
            "invoke",
            chaincode = self.name(),
            function,
            tx_id = %stub.tx_id()
        );
        let _guard = span.enter();
        tracing::debug!(?args, "dispatching");

        let result = self.dispatch(stub, function, args);
        match &result {
            Ok(payload) => info!(payload_len = payload.len(), "invocation succeeded"),
            Err(err) => warn!(error_type = ?err.error_type(), %err, "invocation failed"),
        }
        result
    }
}

/// Whether a create-style write may replace an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WritePolicy {
    /// Replace silently (the historical behaviour).
    #[default]
    Overwrite,
    /// Fail with `AlreadyExists` if the key is present.
    MustNotExist,
}

impl WritePolicy {
    /// Enforce the policy for `key` against the current ledger.
    pub fn check(self, stub: &ChaincodeStub<'_>, key: &str) -> Result<(), LedgerError> {
        if self == WritePolicy::MustNotExist && stub.state_exists(key)? {
            return Err(LedgerError::AlreadyExists {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

/// Host-facing response object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeResponse {
    pub status: u16,
    pub message: String,
    pub payload: Vec<u8>,
    pub error: Option<LedgerErrorPayload>,
}

impl ChaincodeResponse {
    pub const OK: u16 = 200;
    pub const ERROR: u16 = 500;

    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload,
            error: None,
        }
    }

    pub fn error(err: LedgerError) -> Self {
        Self {
            status: Self::ERROR,
            message: err.to_string(),
            payload: Vec::new(),
            error: Some(err.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::OK
    }
}

impl From<InvokeResult> for ChaincodeResponse {
    fn from(result: InvokeResult) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::error(err),
        }
    }
}
