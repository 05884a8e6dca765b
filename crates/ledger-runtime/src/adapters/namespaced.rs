use shared_ledger::{BatchPut, KVStoreError, KeyValueStore};

/// Per-module view of a shared store: every key is stored as
/// `{namespace}:{key}`, so a wallet `userID` can never collide with an
/// `assetID` or `transactionID` of the same spelling.
pub struct NamespacedStore<'a> {
    inner: &'a mut dyn KeyValueStore,
    prefix: String,
}

impl<'a> NamespacedStore<'a> {
    pub fn new(inner: &'a mut dyn KeyValueStore, namespace: &str) -> Self {
        Self {
            inner,
            prefix: format!("{}:", namespace),
        }
    }

    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KeyValueStore for NamespacedStore<'_> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.inner.get(&self.full_key(key))
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), KVStoreError> {
        let key = self.full_key(key);
        self.inner.put(&key, value)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchPut>) -> Result<(), KVStoreError> {
        let operations = operations
            .into_iter()
            .map(|op| BatchPut::new(self.full_key(&op.key), op.value))
            .collect();
        self.inner.atomic_batch_write(operations)
    }

    fn exists(&self, key: &str) -> Result<bool, KVStoreError> {
        self.inner.exists(&self.full_key(key))
    }
}
