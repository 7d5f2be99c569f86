//! Key-value persistence behind the token store.

use dashmap::DashMap;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal string key-value store, the role browser local storage plays
/// for a web dashboard.
pub trait TokenStorage: Send + Sync {
    fn load(&self, key: &str) -> StorageResult<Option<String>>;
    fn store(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<DashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.inner.get(key).map(|v| v.value().clone()))
    }

    fn store(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key);
        Ok(())
    }
}

/// Storage backed by a single JSON object on disk.
///
/// Every write rewrites the whole file through a sibling `.tmp` file and a
/// rename, so readers see either the old or the new map. A file that does
/// not parse is replaced on the next write. The mutex only serialises
/// writers inside this process.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> StorageResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn write_map(&self, map: &HashMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, map)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, f: F) -> StorageResult<()>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StorageError::Serde(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Session file is corrupt, starting from an empty map"
                );
                HashMap::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut map);
        self.write_map(&map)
    }
}

impl TokenStorage for FileStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn store(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.update(|map| {
            map.remove(key);
        })
    }
}
