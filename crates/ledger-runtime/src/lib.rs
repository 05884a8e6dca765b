//! # Ledger Runtime
//!
//! Local transaction-processing host for the asset lifecycle modules.
//!
//! ```text
//! ledger-runtime <module> <function> [args..]
//!        │
//!        ├─ RuntimeConfig::from_env ──→ module configs
//!        ├─ FileBackedKVStore::open (exclusive lock)
//!        └─ LedgerHost::execute ──→ wallet | asset | trade
//!                                     │
//!                stdout ←── payload ──┘──→ stderr (logs, errors)
//! ```
//!
//! One process runs one invocation. Writes reach the ledger file as soon
//! as the module commits them.

pub mod adapters;
pub mod container;

pub use adapters::FileBackedKVStore;
pub use container::{HostError, LedgerHost, RuntimeConfig, INIT_FUNCTION};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. Logs go to stderr so stdout
/// carries only the invocation payload.
pub fn init_logging(config: &RuntimeConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("cannot install log subscriber: {}", e))
}
