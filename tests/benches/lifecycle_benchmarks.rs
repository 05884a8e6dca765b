//! # Asset Lifecycle Benchmarks
//!
//! | Operation | Cost driver |
//! |-----------|-------------|
//! | `createAsset` | index decode + duplicate scan + re-encode, O(n) in indexed assets |
//! | `getAllAssets` | one read per indexed asset |
//! | `updateBalance` | one read, one write, independent of ledger size |

use al_01_wallet_ledger::WalletLedgerService;
use al_02_asset_registry::AssetRegistryService;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_ledger::{Chaincode, ChaincodeStub, InMemoryKVStore};

fn seeded_registry(service: &AssetRegistryService, assets: usize) -> InMemoryKVStore {
    let mut store = InMemoryKVStore::new();
    for n in 0..assets {
        let payload = format!(
            r#"{{"assetID":"A{n}","assetTitle":"Bond","assetAvailableQuantity":1000}}"#
        );
        let mut stub = ChaincodeStub::new(&mut store, "seed");
        service
            .invoke(&mut stub, "createAsset", &[payload])
            .expect("seed asset");
    }
    store
}

fn bench_create_asset(c: &mut Criterion) {
    let mut group = c.benchmark_group("al-02-create-asset");
    let service = AssetRegistryService::default();

    for size in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base = seeded_registry(&service, size);
            let args = vec![
                r#"{"assetID":"NEW","assetTitle":"Bond","assetAvailableQuantity":1}"#.to_string(),
            ];
            b.iter_batched(
                || base.clone(),
                |mut store| {
                    let mut stub = ChaincodeStub::new(&mut store, "bench");
                    black_box(service.invoke(&mut stub, "createAsset", &args))
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_get_all_assets(c: &mut Criterion) {
    let mut group = c.benchmark_group("al-02-get-all-assets");
    let service = AssetRegistryService::default();

    for size in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut store = seeded_registry(&service, size);
            b.iter(|| {
                let mut stub = ChaincodeStub::new(&mut store, "bench");
                black_box(service.invoke(&mut stub, "getAllAssets", &[]))
            });
        });
    }
    group.finish();
}

fn bench_update_balance(c: &mut Criterion) {
    let service = WalletLedgerService::default();
    let mut base = InMemoryKVStore::new();
    {
        let payload = r#"{"userID":"u1","accountID":"acc-u1","assetMyQuantity":1000000000}"#;
        let mut stub = ChaincodeStub::new(&mut base, "seed");
        service
            .invoke(&mut stub, "issueAsset", &[payload.to_string()])
            .expect("seed wallet");
    }
    let args = vec!["u1".to_string(), "u2".to_string(), "1".to_string()];

    c.bench_function("al-01-update-balance", |b| {
        b.iter_batched(
            || base.clone(),
            |mut store| {
                let mut stub = ChaincodeStub::new(&mut store, "bench");
                black_box(service.invoke(&mut stub, "updateBalance", &args))
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_create_asset,
    bench_get_all_assets,
    bench_update_balance
);
criterion_main!(benches);
