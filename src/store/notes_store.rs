use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::model::{random_folder_color, Folder, FolderPatch, Note, NotePatch, ViewMode};
use crate::mvi::Reducer;
use crate::storage::Persistence;
use crate::store::intent::NotesIntent;
use crate::store::reducer::NotesReducer;
use crate::store::state::NotesState;

/// Handle returned by [`NotesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&NotesState) + Send>;

/// Owns the notes state and is the only way to change it.
///
/// Every mutation runs the reducer, writes the full snapshot through to
/// storage, then calls subscribers with the new state, all before
/// returning. Mutations that target an unknown id change nothing, write
/// nothing and notify nobody.
pub struct NotesStore {
    state: NotesState,
    persistence: Persistence,
    clock: Box<dyn Clock>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    last_persist_error: Option<String>,
}

impl NotesStore {
    /// Load the stored state and use the wall clock.
    pub fn open(persistence: Persistence) -> Self {
        Self::with_clock(persistence, SystemClock)
    }

    pub fn with_clock(persistence: Persistence, clock: impl Clock + 'static) -> Self {
        let state = persistence.load();
        tracing::info!(
            location = %persistence.describe(),
            notes = state.notes.len(),
            folders = state.folders.len(),
            "Notes store opened"
        );
        Self {
            state,
            persistence,
            clock: Box::new(clock),
            listeners: Vec::new(),
            next_subscription: 0,
            last_persist_error: None,
        }
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    /// Message of the most recent failed write, cleared by the next
    /// successful one.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    // -- notes ---------------------------------------------------------------

    /// Create a note in `folder_id`, or in the active folder when `None`,
    /// put it first in the collection and select it. An unknown folder id
    /// leaves the note uncategorized.
    pub fn create_note(&mut self, folder_id: Option<&str>) -> Note {
        let folder_id = folder_id
            .map(str::to_string)
            .or_else(|| self.state.active_folder_id.clone())
            .filter(|id| self.state.has_folder(id));
        let note = Note::new(Uuid::new_v4().to_string(), folder_id, self.clock.now());
        tracing::debug!(id = %note.id, folder = ?note.folder_id, "Creating note");
        self.dispatch(NotesIntent::CreateNote { note: note.clone() });
        note
    }

    /// Apply `patch` to the note and refresh its `updated_at`.
    pub fn update_note(&mut self, id: &str, patch: NotePatch) {
        let now = self.clock.now();
        self.dispatch(NotesIntent::UpdateNote {
            id: id.to_string(),
            patch,
            now,
        });
    }

    pub fn delete_note(&mut self, id: &str) {
        self.dispatch(NotesIntent::DeleteNote { id: id.to_string() });
    }

    pub fn set_active_note(&mut self, id: Option<&str>) {
        self.dispatch(NotesIntent::SetActiveNote {
            id: id.map(str::to_string),
        });
    }

    // -- folders -------------------------------------------------------------

    /// Append a folder. An absent or empty `color` picks one from the palette.
    pub fn create_folder(&mut self, name: &str, color: Option<&str>) -> Folder {
        let color = match color.filter(|color| !color.is_empty()) {
            Some(color) => color,
            None => random_folder_color(),
        };
        let folder = Folder {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: color.to_string(),
            created_at: self.clock.now(),
        };
        tracing::debug!(id = %folder.id, name = %folder.name, "Creating folder");
        self.dispatch(NotesIntent::CreateFolder {
            folder: folder.clone(),
        });
        folder
    }

    pub fn update_folder(&mut self, id: &str, patch: FolderPatch) {
        self.dispatch(NotesIntent::UpdateFolder {
            id: id.to_string(),
            patch,
        });
    }

    /// Remove the folder; its notes become uncategorized.
    pub fn delete_folder(&mut self, id: &str) {
        self.dispatch(NotesIntent::DeleteFolder { id: id.to_string() });
    }

    /// Filter by folder (`None` = all notes). Always clears the note
    /// selection.
    pub fn set_active_folder(&mut self, id: Option<&str>) {
        self.dispatch(NotesIntent::SetActiveFolder {
            id: id.map(str::to_string),
        });
    }

    // -- ui ------------------------------------------------------------------

    pub fn set_search_query(&mut self, query: &str) {
        self.dispatch(NotesIntent::SetSearchQuery {
            query: query.to_string(),
        });
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.dispatch(NotesIntent::SetViewMode { mode });
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dispatch(NotesIntent::ToggleDarkMode);
    }

    /// Re-read storage and replace the in-memory state with it.
    pub fn reload(&mut self) {
        let state = self.persistence.load();
        self.dispatch(NotesIntent::Restore { state });
    }

    // -- queries -------------------------------------------------------------

    pub fn filtered_notes(&self) -> Vec<&Note> {
        self.state.filtered_notes()
    }

    pub fn notes_by_folder(&self, folder_id: Option<&str>) -> Vec<&Note> {
        self.state.notes_by_folder(folder_id)
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.state.active_note()
    }

    // -- observers -----------------------------------------------------------

    /// Register a callback run after every effective mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&NotesState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn dispatch(&mut self, intent: NotesIntent) {
        let previous = self.state.clone();
        self.state = NotesReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state == previous {
            tracing::trace!("Intent left state unchanged");
            return;
        }

        self.persist();
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.state) {
            Ok(()) => self.last_persist_error = None,
            Err(err) => {
                tracing::error!(error = %err, "Failed to persist notes");
                self.last_persist_error = Some(err.to_string());
            }
        }
    }
}
