use std::sync::Arc;

use parking_lot::Mutex;

use crate::storage::{StateStorage, StorageError};

/// In-process storage slot. Clones share the slot, so a test can keep a
/// handle and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemorySlot>>,
}

#[derive(Debug, Default)]
struct MemorySlot {
    contents: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot as if an earlier run had written `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.inner.lock().contents = Some(contents.into());
        storage
    }

    pub fn contents(&self) -> Option<String> {
        self.inner.lock().contents.clone()
    }

    /// Number of completed writes.
    pub fn writes(&self) -> usize {
        self.inner.lock().writes
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let mut slot = self.inner.lock();
        slot.contents = Some(contents.to_string());
        slot.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
