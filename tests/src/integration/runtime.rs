//! The lifecycle driven through `LedgerHost` over a ledger file, reopened
//! between invocations the way separate `ledger-runtime` processes see it.

#[cfg(test)]
mod tests {
    use ledger_runtime::{FileBackedKVStore, LedgerHost, RuntimeConfig};
    use shared_ledger::{ChaincodeResponse, KeyValueStore, LedgerErrorType};
    use std::path::Path;
    use tempfile::tempdir;

    fn run(config: &RuntimeConfig, module: &str, function: &str, args: &[&str]) -> ChaincodeResponse {
        let host = LedgerHost::new(config);
        let mut store = FileBackedKVStore::open(&config.data_file).unwrap();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        host.execute(&mut store, module, function, &args).unwrap()
    }

    fn config_for(path: &Path) -> RuntimeConfig {
        RuntimeConfig {
            data_file: path.to_path_buf(),
            ..RuntimeConfig::default()
        }
    }

    #[test]
    fn test_state_persists_across_processes() {
        let dir = tempdir().unwrap();
        let config = config_for(&dir.path().join("ledger.bin"));

        assert!(run(&config, "asset", "init", &[]).is_success());
        assert!(run(
            &config,
            "asset",
            "createAsset",
            &[r#"{"assetID":"A1","assetTitle":"Bond","assetAvailableQuantity":100}"#]
        )
        .is_success());
        assert!(run(&config, "asset", "updateAsset", &["A1", "40"]).is_success());

        let listed = run(&config, "asset", "getAllAssets", &[]);
        assert_eq!(
            listed.payload,
            br#"[{"assetID":"A1","assetTitle":"Bond","assetAvailableQuantity":60}]"#.to_vec()
        );

        let store = FileBackedKVStore::open(&config.data_file).unwrap();
        assert_eq!(store.get("asset:_asset").unwrap(), Some(br#"["A1"]"#.to_vec()));
    }

    #[test]
    fn test_failed_invocation_does_not_touch_the_file() {
        let dir = tempdir().unwrap();
        let config = config_for(&dir.path().join("ledger.bin"));
        assert!(run(
            &config,
            "wallet",
            "issueAsset",
            &[r#"{"userID":"u1","accountID":"acc-u1","assetMyQuantity":50}"#]
        )
        .is_success());
        let before = std::fs::read(&config.data_file).unwrap();

        let response = run(&config, "wallet", "updateBalance", &["u1", "u2", "51"]);

        assert_eq!(
            response.error.unwrap().error_type,
            LedgerErrorType::InsufficientBalance
        );
        assert_eq!(std::fs::read(&config.data_file).unwrap(), before);
    }

    #[test]
    fn test_reset_index_flag() {
        let dir = tempdir().unwrap();
        let config = config_for(&dir.path().join("ledger.bin"));
        run(
            &config,
            "asset",
            "createAsset",
            &[r#"{"assetID":"A1","assetAvailableQuantity":1}"#],
        );

        let resetting = RuntimeConfig {
            reset_index_on_init: true,
            ..config.clone()
        };
        assert!(run(&resetting, "asset", "init", &[]).is_success());

        assert_eq!(run(&config, "asset", "getAllAssets", &[]).payload, b"[]".to_vec());
        assert!(run(&config, "asset", "query", &["A1"]).is_success());
    }
}
