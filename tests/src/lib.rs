//! # Asset Lifecycle Test Suite
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-module flows over one shared ledger
//!     ├── flows.rs      # issuance → approval → trading, in memory
//!     └── runtime.rs    # the same flow through LedgerHost + ledger file
//! tests/benches/
//! └── lifecycle_benchmarks.rs
//! ```
//!
//! ```bash
//! cargo test -p al-tests integration::
//! cargo bench -p al-tests
//! ```

pub mod integration;
