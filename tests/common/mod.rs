//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::path::PathBuf;
use tempfile::TempDir;
use vibenotes::clock::ManualClock;
use vibenotes::storage::{MemoryStorage, Persistence, PersistOptions};
use vibenotes::store::NotesStore;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// Store over in-memory storage with a controllable clock.
pub struct Harness {
    pub store: NotesStore,
    pub storage: MemoryStorage,
    pub clock: ManualClock,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    pub fn with_storage(storage: MemoryStorage) -> Self {
        Self::with_options(storage, PersistOptions::default())
    }

    pub fn with_options(storage: MemoryStorage, options: PersistOptions) -> Self {
        let clock = ManualClock::new(t0());
        let store = NotesStore::with_clock(
            Persistence::with_options(storage.clone(), options),
            clock.clone(),
        );
        Self {
            store,
            storage,
            clock,
        }
    }

    pub fn tick(&self, seconds: i64) {
        self.clock.advance(Duration::seconds(seconds));
    }

    /// Parsed snapshot as last written to storage.
    pub fn stored_json(&self) -> serde_json::Value {
        let raw = self.storage.contents().expect("nothing was written");
        serde_json::from_str(&raw).expect("stored snapshot is not JSON")
    }
}

/// Temp dir plus a notes file path inside it.
pub fn temp_data_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("notes").join("vibenotes-storage.json");
    (dir, path)
}
