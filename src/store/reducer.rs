use crate::mvi::Reducer;
use crate::store::intent::NotesIntent;
use crate::store::state::NotesState;

pub struct NotesReducer;

impl Reducer for NotesReducer {
    type State = NotesState;
    type Intent = NotesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotesIntent::CreateNote { mut note } => {
                if state.note(&note.id).is_some() {
                    return state;
                }
                if note
                    .folder_id
                    .as_deref()
                    .is_some_and(|id| !state.has_folder(id))
                {
                    note.folder_id = None;
                }
                state.active_note_id = Some(note.id.clone());
                state.notes.insert(0, note);
                state
            }
            NotesIntent::UpdateNote { id, mut patch, now } => {
                // A folder that does not exist cannot be assigned.
                if let Some(Some(folder_id)) = &patch.folder_id {
                    if !state.has_folder(folder_id) {
                        patch.folder_id = None;
                    }
                }
                if let Some(note) = state.notes.iter_mut().find(|note| note.id == id) {
                    patch.apply_to(note);
                    note.touch(now);
                }
                state
            }
            NotesIntent::DeleteNote { id } => {
                let before = state.notes.len();
                state.notes.retain(|note| note.id != id);
                if state.notes.len() != before && state.active_note_id.as_deref() == Some(&id) {
                    state.active_note_id = None;
                }
                state
            }
            NotesIntent::SetActiveNote { id } => {
                match id {
                    Some(id) if state.note(&id).is_none() => {}
                    id => state.active_note_id = id,
                }
                state
            }
            NotesIntent::CreateFolder { folder } => {
                if !state.has_folder(&folder.id) {
                    state.folders.push(folder);
                }
                state
            }
            NotesIntent::UpdateFolder { id, patch } => {
                if let Some(folder) = state.folders.iter_mut().find(|folder| folder.id == id) {
                    patch.apply_to(folder);
                }
                state
            }
            NotesIntent::DeleteFolder { id } => {
                let before = state.folders.len();
                state.folders.retain(|folder| folder.id != id);
                if state.folders.len() == before {
                    return state;
                }
                for note in &mut state.notes {
                    if note.folder_id.as_deref() == Some(&id) {
                        note.folder_id = None;
                    }
                }
                if state.active_folder_id.as_deref() == Some(&id) {
                    state.active_folder_id = None;
                    state.active_note_id = None;
                }
                state
            }
            NotesIntent::SetActiveFolder { id } => {
                match id {
                    Some(id) if !state.has_folder(&id) => {}
                    id => {
                        state.active_folder_id = id;
                        state.active_note_id = None;
                    }
                }
                state
            }
            NotesIntent::SetSearchQuery { query } => {
                state.search_query = query;
                state
            }
            NotesIntent::SetViewMode { mode } => {
                state.view_mode = mode;
                state
            }
            NotesIntent::ToggleDarkMode => {
                state.dark_mode = !state.dark_mode;
                state
            }
            NotesIntent::Restore { state } => state,
        }
    }
}
