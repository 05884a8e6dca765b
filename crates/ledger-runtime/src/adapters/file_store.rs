use fs2::FileExt;
use shared_ledger::{BatchPut, KVStoreError, KeyValueStore};
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File-backed key-value store for the local host.
///
/// The whole ledger lives in one binary file, rewritten through a temp
/// file and rename after every committed write. An exclusive lock on a
/// sibling `.lock` file is held for the lifetime of the store, so two
/// runtime processes never interleave writes to the same ledger. Both
/// sibling files append to the full file name (`ledger.bin.lock`,
/// `ledger.bin.tmp`), so they never coincide with the ledger file itself.
///
/// Layout: `[key_len:u32 LE][key][value_len:u32 LE][value]...`, keys in
/// byte order.
pub struct FileBackedKVStore {
    data: BTreeMap<String, Vec<u8>>,
    path: PathBuf,
    _lock: File,
}

impl FileBackedKVStore {
    /// Open (or create on first write) the ledger file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(sibling(&path, "lock"))
            .map_err(io_error)?;
        lock.lock_exclusive().map_err(io_error)?;

        let data = match File::open(&path) {
            Ok(mut file) => {
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes).map_err(io_error)?;
                let data = decode(&bytes)?;
                info!(path = %path.display(), keys = data.len(), "loaded ledger file");
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no ledger file yet, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(io_error(e)),
        };

        Ok(Self {
            data,
            path,
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn save_to_file(&self) -> Result<(), KVStoreError> {
        let bytes = encode(&self.data)?;

        let temp_path = sibling(&self.path, "tmp");
        let mut file = File::create(&temp_path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "ledger file saved");
        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), KVStoreError> {
        let previous = self.data.insert(key.to_string(), value.to_vec());
        self.save_to_file().inspect_err(|_| {
            restore(&mut self.data, key.to_string(), previous);
        })
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchPut>) -> Result<(), KVStoreError> {
        let mut undo = Vec::with_capacity(operations.len());
        for op in operations {
            let previous = self.data.insert(op.key.clone(), op.value);
            undo.push((op.key, previous));
        }
        self.save_to_file().inspect_err(|_| {
            for (key, previous) in undo.into_iter().rev() {
                restore(&mut self.data, key, previous);
            }
        })
    }

    fn exists(&self, key: &str) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }
}

/// `path` with `.suffix` appended to its file name.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Roll back one in-memory insert after the file write failed.
fn restore(data: &mut BTreeMap<String, Vec<u8>>, key: String, previous: Option<Vec<u8>>) {
    match previous {
        Some(value) => {
            data.insert(key, value);
        }
        None => {
            data.remove(&key);
        }
    }
}

fn io_error(e: std::io::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: e.to_string(),
    }
}

fn corrupt(message: impl Into<String>) -> KVStoreError {
    KVStoreError::IOError {
        message: format!("corrupt ledger file: {}", message.into()),
    }
}

fn encode(data: &BTreeMap<String, Vec<u8>>) -> Result<Vec<u8>, KVStoreError> {
    let mut bytes = Vec::new();
    for (key, value) in data {
        for field in [key.as_bytes(), value.as_slice()] {
            let len = u32::try_from(field.len())
                .map_err(|_| io_error(std::io::Error::other("entry exceeds 4 GiB")))?;
            bytes.extend_from_slice(&len.to_le_bytes());
            bytes.extend_from_slice(field);
        }
    }
    Ok(bytes)
}

fn decode(bytes: &[u8]) -> Result<BTreeMap<String, Vec<u8>>, KVStoreError> {
    let mut data = BTreeMap::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let key = read_field(bytes, &mut cursor)?;
        let key = String::from_utf8(key.to_vec())
            .map_err(|_| corrupt(format!("non UTF-8 key at offset {}", cursor)))?;
        let value = read_field(bytes, &mut cursor)?;
        data.insert(key, value.to_vec());
    }

    Ok(data)
}

fn read_field<'b>(bytes: &'b [u8], cursor: &mut usize) -> Result<&'b [u8], KVStoreError> {
    let len_end = *cursor + 4;
    let len_bytes: [u8; 4] = bytes
        .get(*cursor..len_end)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| corrupt(format!("truncated length at offset {}", cursor)))?;
    let len = u32::from_le_bytes(len_bytes) as usize;

    let field = bytes
        .get(len_end..len_end + len)
        .ok_or_else(|| corrupt(format!("truncated field at offset {}", len_end)))?;
    *cursor = len_end + len;
    Ok(field)
}
