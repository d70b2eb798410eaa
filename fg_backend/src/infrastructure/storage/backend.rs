use super::error::Result;
use super::file::FileStorage;
use crate::config::StorageKind;
use fg_core::utils::rw_lock::RwLockExt;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::info;

pub const PROFILE_KEY: &str = "finguru_user_profile";
pub const CONVERSATIONS_KEY: &str = "finguru_conversations";

/// Whole-document key-value store. Every record is a JSON string.
pub trait StorageBackend: Send + Sync + Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;

    /// `false` when writes are dropped, so callers must not cache what they wrote.
    fn is_persistent(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let records = self.records.read_lock("reading memory storage")?;
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut records = self.records.write_lock("writing memory storage")?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut records = self.records.write_lock("removing from memory storage")?;
        records.remove(key);
        Ok(())
    }
}

/// No persistent storage context: reads are empty and writes vanish.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStorage;

impl StorageBackend for DisabledStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

pub fn build_storage(kind: StorageKind, data_dir: &Path) -> Arc<dyn StorageBackend> {
    match kind {
        StorageKind::File => {
            info!("Using file storage in {}", data_dir.display());
            Arc::new(FileStorage::new(data_dir))
        }
        StorageKind::Memory => {
            info!("Using in-memory storage, data is lost on shutdown");
            Arc::new(MemoryStorage::new())
        }
        StorageKind::Disabled => {
            info!("Storage disabled, nothing will be persisted");
            Arc::new(DisabledStorage)
        }
    }
}
