//! `ledger-runtime` binary: run `init` or one function of a lifecycle
//! module against the local ledger file.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use ledger_runtime::{init_logging, FileBackedKVStore, LedgerHost, RuntimeConfig};

/// Invoke an asset lifecycle module
#[derive(Parser, Debug)]
#[command(name = "ledger-runtime")]
#[command(about = "Run one asset lifecycle invocation against the local ledger")]
struct Args {
    /// Module to route to: wallet, asset or trade
    module: String,

    /// Function name, or `init`
    function: String,

    /// Positional function arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = RuntimeConfig::from_env();
    init_logging(&config)?;

    let host = LedgerHost::new(&config);
    let mut store = FileBackedKVStore::open(&config.data_file)
        .with_context(|| format!("cannot open ledger file {}", config.data_file.display()))?;

    let response = host.execute(&mut store, &args.module, &args.function, &args.args)?;
    if !response.is_success() {
        error!(status = response.status, "{}", response.message);
        eprintln!("{}", response.message);
        return Ok(ExitCode::FAILURE);
    }

    let mut stdout = std::io::stdout().lock();
    if !response.payload.is_empty() {
        stdout.write_all(&response.payload).context("cannot write payload")?;
        writeln!(stdout).context("cannot write payload")?;
    }
    info!(keys = store.len(), "invocation committed");
    Ok(ExitCode::SUCCESS)
}
