//! Durable storage for the notes state.
//!
//! A [`StateStorage`] backend moves an opaque string in and out of some
//! durable place; [`Persistence`] owns the snapshot format on top of it:
//!
//! ```json
//! { "state": { "notes": [...], "folders": [...], "activeNoteId": null, ... },
//!   "version": 0 }
//! ```

mod errors;
mod file;
mod memory;

use serde::{Deserialize, Serialize};

use crate::store::NotesState;

pub use errors::StorageError;
pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Namespace the snapshot is stored under.
pub const STORAGE_KEY: &str = "vibenotes-storage";

/// Snapshot format version written by this build.
pub const STORAGE_VERSION: u32 = 0;

/// Raw snapshot backend.
pub trait StateStorage: Send {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored snapshot.
    fn write(&self, contents: &str) -> Result<(), StorageError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Which transient UI fields survive a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistOptions {
    pub search_query: bool,
    pub active_folder: bool,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            search_query: true,
            active_folder: true,
        }
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a NotesState,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    state: NotesState,
    version: u32,
}

/// Snapshot codec over a [`StateStorage`] backend.
pub struct Persistence {
    backend: Box<dyn StateStorage>,
    options: PersistOptions,
}

impl Persistence {
    pub fn new(backend: impl StateStorage + 'static) -> Self {
        Self::with_options(backend, PersistOptions::default())
    }

    pub fn with_options(backend: impl StateStorage + 'static, options: PersistOptions) -> Self {
        Self {
            backend: Box::new(backend),
            options,
        }
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    /// Load the stored state.
    ///
    /// Never fails: a missing, unreadable, malformed or future-versioned
    /// snapshot yields [`NotesState::default`]. Well-formed snapshots that
    /// break the model invariants are repaired.
    pub fn load(&self) -> NotesState {
        let raw = match self.backend.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(location = %self.describe(), "No stored notes, starting empty");
                return NotesState::default();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read stored notes, starting empty");
                return NotesState::default();
            }
        };

        let envelope: Envelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(
                    location = %self.describe(),
                    error = %err,
                    "Stored notes are malformed, starting empty"
                );
                return NotesState::default();
            }
        };

        if envelope.version > STORAGE_VERSION {
            tracing::warn!(
                found = envelope.version,
                supported = STORAGE_VERSION,
                "Stored notes come from a newer version, starting empty"
            );
            return NotesState::default();
        }

        let mut state = envelope.state;
        let fixes = state.repair();
        if fixes > 0 {
            tracing::warn!(fixes, "Repaired inconsistent stored notes");
        }
        tracing::debug!(
            notes = state.notes.len(),
            folders = state.folders.len(),
            "Loaded stored notes"
        );
        state
    }

    /// Serialize and write the full snapshot, replacing the previous one.
    pub fn save(&self, state: &NotesState) -> Result<(), StorageError> {
        let json = self.encode(state)?;
        self.backend.write(&json)
    }

    fn encode(&self, state: &NotesState) -> Result<String, StorageError> {
        let PersistOptions {
            search_query,
            active_folder,
        } = self.options;

        let json = if search_query && active_folder {
            serde_json::to_string(&EnvelopeRef {
                state,
                version: STORAGE_VERSION,
            })?
        } else {
            let mut trimmed = state.clone();
            if !search_query {
                trimmed.search_query.clear();
            }
            if !active_folder {
                trimmed.active_folder_id = None;
            }
            serde_json::to_string(&EnvelopeRef {
                state: &trimmed,
                version: STORAGE_VERSION,
            })?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_omits_disabled_fields() {
        let storage = MemoryStorage::new();
        let persistence = Persistence::with_options(
            storage.clone(),
            PersistOptions {
                search_query: false,
                active_folder: true,
            },
        );
        let state = NotesState {
            search_query: "draft".to_string(),
            ..NotesState::default()
        };

        persistence.save(&state).unwrap();

        let raw = storage.contents().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["state"]["searchQuery"], "");
        assert_eq!(value["version"], 0);
    }

    #[test]
    fn load_rejects_newer_versions() {
        let storage = MemoryStorage::with_contents(r#"{"state":{"darkMode":false},"version":7}"#);
        let state = Persistence::new(storage).load();
        assert_eq!(state, NotesState::default());
    }

    #[test]
    fn load_fills_missing_fields_with_defaults() {
        let storage = MemoryStorage::with_contents(r#"{"state":{"darkMode":false},"version":0}"#);
        let state = Persistence::new(storage).load();
        assert!(!state.dark_mode);
        assert!(state.notes.is_empty());
        assert_eq!(state.view_mode, crate::model::ViewMode::Split);
    }
}
