use chrono::{DateTime, Utc};

use crate::model::{Folder, FolderPatch, Note, NotePatch, ViewMode};
use crate::mvi::Intent;
use crate::store::state::NotesState;

/// One store mutation with every impure input (ids, timestamps, palette
/// picks) already resolved.
#[derive(Debug, Clone)]
pub enum NotesIntent {
    CreateNote { note: Note },
    UpdateNote {
        id: String,
        patch: NotePatch,
        now: DateTime<Utc>,
    },
    DeleteNote { id: String },
    SetActiveNote { id: Option<String> },
    CreateFolder { folder: Folder },
    UpdateFolder { id: String, patch: FolderPatch },
    DeleteFolder { id: String },
    SetActiveFolder { id: Option<String> },
    SetSearchQuery { query: String },
    SetViewMode { mode: ViewMode },
    ToggleDarkMode,
    /// Swap in a state loaded from storage.
    Restore { state: NotesState },
}

impl Intent for NotesIntent {}
