use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Folder, Note, ViewMode};
use crate::mvi::ViewState;

/// Everything the app knows: notes, folders and the UI selection/filter.
///
/// Field order and camelCase keys double as the persisted layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotesState {
    /// Newest-created first.
    pub notes: Vec<Note>,
    /// Creation order.
    pub folders: Vec<Folder>,
    pub active_note_id: Option<String>,
    pub active_folder_id: Option<String>,
    pub search_query: String,
    pub view_mode: ViewMode,
    pub dark_mode: bool,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            folders: Vec::new(),
            active_note_id: None,
            active_folder_id: None,
            search_query: String::new(),
            view_mode: ViewMode::default(),
            dark_mode: true,
        }
    }
}

impl ViewState for NotesState {}

impl NotesState {
    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    pub fn has_folder(&self, id: &str) -> bool {
        self.folder(id).is_some()
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.active_note_id.as_deref().and_then(|id| self.note(id))
    }

    pub fn active_folder(&self) -> Option<&Folder> {
        self.active_folder_id.as_deref().and_then(|id| self.folder(id))
    }

    /// The note list every list view shows.
    ///
    /// Restricted to the active folder (if any), then to notes whose title or
    /// content contains the search query case-insensitively (if non-empty),
    /// then ordered most recently updated first. Equal timestamps keep their
    /// collection order.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        let query = self.search_query.to_lowercase();
        let mut notes: Vec<&Note> = self
            .notes
            .iter()
            .filter(|note| match &self.active_folder_id {
                Some(folder_id) => note.folder_id.as_deref() == Some(folder_id.as_str()),
                None => true,
            })
            .filter(|note| query.is_empty() || note.matches_query(&query))
            .collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        notes
    }

    /// Notes assigned exactly to `folder_id` (`None` = uncategorized), in
    /// collection order.
    pub fn notes_by_folder(&self, folder_id: Option<&str>) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|note| note.folder_id.as_deref() == folder_id)
            .collect()
    }

    pub fn folder_note_count(&self, folder_id: Option<&str>) -> usize {
        self.notes
            .iter()
            .filter(|note| note.folder_id.as_deref() == folder_id)
            .count()
    }

    /// Restore the model invariants on state that came from outside the
    /// reducer (i.e. from disk). Returns the number of fixes applied.
    pub(crate) fn repair(&mut self) -> usize {
        let mut fixes = 0;

        let mut seen = HashSet::new();
        let before = self.folders.len();
        self.folders.retain(|folder| seen.insert(folder.id.clone()));
        fixes += before - self.folders.len();

        let mut seen = HashSet::new();
        let before = self.notes.len();
        self.notes.retain(|note| seen.insert(note.id.clone()));
        fixes += before - self.notes.len();

        let folder_ids: HashSet<&str> = self.folders.iter().map(|f| f.id.as_str()).collect();
        for note in &mut self.notes {
            if note
                .folder_id
                .as_deref()
                .is_some_and(|id| !folder_ids.contains(id))
            {
                note.folder_id = None;
                fixes += 1;
            }
            if note.updated_at < note.created_at {
                note.updated_at = note.created_at;
                fixes += 1;
            }
        }

        if self
            .active_folder_id
            .as_deref()
            .is_some_and(|id| !folder_ids.contains(id))
        {
            self.active_folder_id = None;
            fixes += 1;
        }

        if self
            .active_note_id
            .as_deref()
            .is_some_and(|id| self.note(id).is_none())
        {
            self.active_note_id = None;
            fixes += 1;
        }

        fixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn note(id: &str, folder: Option<&str>, minutes: i64) -> Note {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut note = Note::new(id.to_string(), folder.map(str::to_string), base);
        note.updated_at = base + Duration::minutes(minutes);
        note
    }

    fn folder(id: &str) -> Folder {
        Folder {
            id: id.to_string(),
            name: id.to_string(),
            color: "#3b82f6".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn repair_drops_duplicates_and_dangling_references() {
        let mut state = NotesState {
            notes: vec![
                note("a", Some("gone"), 1),
                note("a", None, 2),
                note("b", Some("f"), 3),
            ],
            folders: vec![folder("f"), folder("f")],
            active_note_id: Some("missing".to_string()),
            active_folder_id: Some("gone".to_string()),
            ..NotesState::default()
        };

        let fixes = state.repair();

        assert_eq!(fixes, 5);
        assert_eq!(state.folders.len(), 1);
        assert_eq!(state.notes.len(), 2);
        assert_eq!(state.notes[0].folder_id, None);
        assert_eq!(state.notes[1].folder_id.as_deref(), Some("f"));
        assert_eq!(state.active_note_id, None);
        assert_eq!(state.active_folder_id, None);
    }

    #[test]
    fn repair_is_a_noop_on_consistent_state() {
        let mut state = NotesState {
            notes: vec![note("a", Some("f"), 1)],
            folders: vec![folder("f")],
            active_note_id: Some("a".to_string()),
            active_folder_id: Some("f".to_string()),
            ..NotesState::default()
        };
        let before = state.clone();
        assert_eq!(state.repair(), 0);
        assert_eq!(state, before);
    }

    #[test]
    fn filtered_notes_sort_is_stable_on_ties() {
        let state = NotesState {
            notes: vec![note("x", None, 5), note("y", None, 5), note("z", None, 9)],
            ..NotesState::default()
        };
        let ids: Vec<&str> = state.filtered_notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "x", "y"]);
    }
}
