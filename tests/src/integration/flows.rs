//! # Integration Test Flows
//!
//! Issuance → approval → trading across al-01, al-02 and al-03, each
//! module with its own store and driven only through `Chaincode::invoke`,
//! the way a host drives them.
//!
//! ## Flow Tested
//!
//! 1. **Asset Registry (02)**: asset created and enumerable
//! 2. **Wallet Ledger (01)**: wallet issued, approved, partially transferred
//! 3. **Asset Registry (02)**: available quantity decremented for the share-out
//! 4. **Transaction Log (03)**: completed trade recorded
//!
//! A rejected step must leave every record it touched unchanged, so the
//! caller can stop the flow without compensating writes.

#[cfg(test)]
mod tests {
    use al_01_wallet_ledger::{Wallet, WalletLedgerService, WalletStatus};
    use al_02_asset_registry::{Asset, AssetRegistryService};
    use al_03_transaction_log::{Transaction, TransactionLogService};
    use shared_ledger::{
        Chaincode, ChaincodeResponse, ChaincodeStub, InMemoryKVStore, KeyValueStore,
        LedgerErrorType,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// One module and the state it owns.
    struct Deployed<C: Chaincode> {
        chaincode: C,
        store: InMemoryKVStore,
        next_tx: u32,
    }

    impl<C: Chaincode> Deployed<C> {
        fn new(chaincode: C) -> Self {
            let mut deployed = Self {
                chaincode,
                store: InMemoryKVStore::new(),
                next_tx: 0,
            };
            let response = deployed.call("init", &[]);
            assert!(response.is_success(), "init failed: {}", response.message);
            deployed
        }

        fn call(&mut self, function: &str, args: &[&str]) -> ChaincodeResponse {
            self.next_tx += 1;
            let tx_id = format!("{}-tx-{}", self.chaincode.name(), self.next_tx);
            let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
            let mut stub = ChaincodeStub::new(&mut self.store, tx_id);

            let result = if function == "init" {
                self.chaincode.init(&mut stub)
            } else {
                self.chaincode.invoke(&mut stub, function, &args)
            };
            result.into()
        }

        fn ok(&mut self, function: &str, args: &[&str]) -> Vec<u8> {
            let response = self.call(function, args);
            assert!(
                response.is_success(),
                "{} failed: {}",
                function,
                response.message
            );
            response.payload
        }

        fn raw(&self, key: &str) -> Option<Vec<u8>> {
            self.store.get(key).unwrap()
        }
    }

    struct Lifecycle {
        wallets: Deployed<WalletLedgerService>,
        assets: Deployed<AssetRegistryService>,
        trades: Deployed<TransactionLogService>,
    }

    impl Lifecycle {
        fn new() -> Self {
            Self {
                wallets: Deployed::new(WalletLedgerService::default()),
                assets: Deployed::new(AssetRegistryService::default()),
                trades: Deployed::new(TransactionLogService::default()),
            }
        }

        fn wallet(&mut self, user_id: &str) -> Wallet {
            serde_json::from_slice(&self.wallets.ok("query", &[user_id])).unwrap()
        }

        fn asset(&mut self, asset_id: &str) -> Asset {
            serde_json::from_slice(&self.assets.ok("query", &[asset_id])).unwrap()
        }

        /// The caller-side trade: wallet transfer, asset share-out, then log.
        /// Stops at the first rejection.
        fn trade(
            &mut self,
            transaction_id: &str,
            user_id: &str,
            recipient: &str,
            asset_id: &str,
            quantity: i64,
        ) -> Result<(), ChaincodeResponse> {
            let quantity_arg = quantity.to_string();

            let response = self
                .wallets
                .call("updateBalance", &[user_id, recipient, quantity_arg.as_str()]);
            if !response.is_success() {
                return Err(response);
            }

            let response = self
                .assets
                .call("updateAsset", &[asset_id, quantity_arg.as_str()]);
            if !response.is_success() {
                return Err(response);
            }

            let seller = self.wallet(user_id);
            let record = Transaction {
                transaction_id: transaction_id.to_string(),
                seller_account: seller.account_id,
                receiver_account: recipient.to_string(),
                amount: quantity,
                asset_id: asset_id.to_string(),
                asset_title: seller.asset_title,
                timestamp: 1_700_000_000,
            };
            let payload = serde_json::to_string(&record).unwrap();
            let response = self.trades.call("transfer", &[payload.as_str()]);
            if !response.is_success() {
                return Err(response);
            }
            Ok(())
        }
    }

    fn wallet_payload(user_id: &str, asset_id: &str, quantity: i64) -> String {
        format!(
            r#"{{"userID":"{user_id}","accountID":"acc-{user_id}","assetID":"{asset_id}","assetTitle":"Bond","assetIssuedQuantity":{quantity},"assetMyQuantity":{quantity},"shareholders":[],"issuer":"bank","status":""}}"#
        )
    }

    fn asset_payload(asset_id: &str, quantity: i64) -> String {
        format!(
            r#"{{"assetID":"{asset_id}","assetTitle":"Bond","assetAvailableQuantity":{quantity}}}"#
        )
    }

    // =============================================================================
    // INTEGRATION TESTS: FULL LIFECYCLE
    // =============================================================================

    #[test]
    fn test_issue_approve_trade_flow() {
        let mut lc = Lifecycle::new();

        lc.assets.ok("createAsset", &[asset_payload("A1", 100).as_str()]);
        lc.wallets.ok("issueAsset", &[wallet_payload("u1", "A1", 50).as_str()]);
        assert_eq!(lc.wallet("u1").status, WalletStatus::Issued);

        lc.wallets.ok("approveAsset", &["u1"]);
        assert_eq!(lc.wallet("u1").status, WalletStatus::Approved);

        lc.trade("t1", "u1", "u2", "A1", 20).unwrap();

        let wallet = lc.wallet("u1");
        assert_eq!(wallet.status, WalletStatus::Traded);
        assert_eq!(wallet.asset_my_quantity, 30);
        assert_eq!(wallet.shareholders(), ["u2".to_string()]);
        assert_eq!(lc.asset("A1").asset_available_quantity, 80);

        let logged: Transaction =
            serde_json::from_slice(&lc.trades.ok("query", &["t1"])).unwrap();
        assert_eq!(logged.seller_account, "acc-u1");
        assert_eq!(logged.receiver_account, "u2");
        assert_eq!(logged.amount, 20);
        assert_eq!(logged.asset_title, "Bond");
    }

    #[test]
    fn test_rejected_transfer_leaves_everything_untouched() {
        let mut lc = Lifecycle::new();
        lc.assets.ok("createAsset", &[asset_payload("A1", 100).as_str()]);
        lc.wallets.ok("issueAsset", &[wallet_payload("u1", "A1", 50).as_str()]);
        lc.wallets.ok("approveAsset", &["u1"]);
        lc.trade("t1", "u1", "u2", "A1", 20).unwrap();

        let wallet_before = lc.wallets.raw("u1");
        let asset_before = lc.assets.raw("A1");

        let rejected = lc.trade("t2", "u1", "u3", "A1", 40).unwrap_err();

        assert_eq!(
            rejected.error.unwrap().error_type,
            LedgerErrorType::InsufficientBalance
        );
        assert!(rejected.message.contains("Not enough balance"));
        assert_eq!(lc.wallets.raw("u1"), wallet_before);
        assert_eq!(lc.assets.raw("A1"), asset_before);
        assert!(lc.trades.raw("t2").is_none());
        assert_eq!(lc.wallet("u1").shareholders(), ["u2".to_string()]);
    }

    #[test]
    fn test_asset_share_out_rejection_stops_the_flow() {
        let mut lc = Lifecycle::new();
        lc.assets.ok("createAsset", &[asset_payload("A1", 10).as_str()]);
        lc.wallets.ok("issueAsset", &[wallet_payload("u1", "A1", 50).as_str()]);
        let asset_before = lc.assets.raw("A1");

        let rejected = lc.trade("t1", "u1", "u2", "A1", 25).unwrap_err();

        assert_eq!(
            rejected.error.unwrap().error_type,
            LedgerErrorType::NegativeBalance
        );
        assert_eq!(lc.assets.raw("A1"), asset_before);
        assert!(lc.trades.raw("t1").is_none());
    }

    #[test]
    fn test_enumeration_across_many_assets() {
        let mut lc = Lifecycle::new();
        for (n, id) in ["B7", "A1", "C3", "A1", "D4"].iter().enumerate() {
            lc.assets
                .ok("createAsset", &[asset_payload(id, n as i64 * 10).as_str()]);
        }
        lc.assets.ok("updateAsset", &["C3", "5"]);

        let assets: Vec<Asset> =
            serde_json::from_slice(&lc.assets.ok("getAllAssets", &[])).unwrap();
        let listed: Vec<(&str, i64)> = assets
            .iter()
            .map(|a| (a.asset_id.as_str(), a.asset_available_quantity))
            .collect();

        assert_eq!(
            listed,
            vec![("B7", 0), ("A1", 30), ("C3", 15), ("D4", 40)]
        );
    }

    #[test]
    fn test_repeated_init_keeps_assets_enumerable() {
        let mut lc = Lifecycle::new();
        lc.assets.ok("createAsset", &[asset_payload("A1", 1).as_str()]);

        lc.assets.ok("init", &[]);

        let assets: Vec<Asset> =
            serde_json::from_slice(&lc.assets.ok("getAllAssets", &[])).unwrap();
        assert_eq!(assets.len(), 1);
    }

    #[test]
    fn test_error_responses_carry_kind_and_message() {
        let mut lc = Lifecycle::new();

        let cases = [
            (lc.wallets.call("query", &["ghost"]), LedgerErrorType::NotFound),
            (lc.assets.call("burnAsset", &[]), LedgerErrorType::UnknownFunction),
            (lc.trades.call("transfer", &["{"]), LedgerErrorType::MalformedInput),
            (lc.wallets.call("approveAsset", &[]), LedgerErrorType::MalformedInput),
        ];

        for (response, expected) in cases {
            assert_eq!(response.status, ChaincodeResponse::ERROR);
            assert!(!response.message.is_empty());
            assert_eq!(response.error.unwrap().error_type, expected);
        }
    }
}
