use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::autosave::AutoSave;
use crate::export::export_markdown;
use crate::model::{FolderPatch, NotePatch};
use crate::mvi::Reducer;
use crate::store::{NotesState, NotesStore, SubscriptionId};
use crate::ui::dialog::{
    DeleteTarget, DialogIntent, DialogReducer, DialogState, FolderOption, NamePurpose,
};
use crate::ui::editor::TextBuffer;

const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Folders,
    Notes,
    Title,
    Content,
}

/// Cursor movement and edits applied to whichever editor has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Paste(String),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Unsaved editor contents for the active note.
#[derive(Debug, Clone)]
pub struct Draft {
    pub note_id: String,
    pub title: TextBuffer,
    pub content: TextBuffer,
}

#[derive(Debug)]
struct StatusMessage {
    text: String,
    is_error: bool,
    shown_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View-model for the terminal UI: owns the store, the editor drafts and
/// the dialog state, and translates user actions into store mutations.
pub struct App {
    store: NotesStore,
    autosave: AutoSave,
    export_dir: PathBuf,
    focus: Focus,
    folder_cursor: usize,
    note_cursor: usize,
    draft: Option<Draft>,
    dialog: DialogState,
    status: Option<StatusMessage>,
    should_quit: bool,
    /// Bumped by the store subscription on every change.
    revision: Arc<AtomicU64>,
    seen_revision: u64,
    subscription: SubscriptionId,
}

impl App {
    pub fn new(mut store: NotesStore, autosave_debounce: Duration, export_dir: PathBuf) -> Self {
        let revision = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&revision);
        let subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        let mut app = Self {
            store,
            autosave: AutoSave::new(autosave_debounce),
            export_dir,
            focus: Focus::Notes,
            folder_cursor: 0,
            note_cursor: 0,
            draft: None,
            dialog: DialogState::default(),
            status: None,
            should_quit: false,
            revision,
            seen_revision: 0,
            subscription,
        };
        app.folder_cursor = app.active_folder_row();
        app.sync_with_store();
        app
    }

    // -- read access for rendering -------------------------------------------

    pub fn state(&self) -> &NotesState {
        self.store.state()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Row in the folder list: 0 is "All Notes", `n` is `folders[n - 1]`.
    pub fn folder_cursor(&self) -> usize {
        self.folder_cursor
    }

    /// Row in the filtered note list.
    pub fn note_cursor(&self) -> usize {
        self.note_cursor
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Transient footer message and whether it reports an error.
    pub fn status(&self) -> Option<(&str, bool)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.is_error))
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.autosave.is_pending()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // -- lifecycle -----------------------------------------------------------

    /// Save any pending draft and stop.
    pub fn request_quit(&mut self) {
        self.flush_autosave();
        self.store.unsubscribe(self.subscription);
        self.should_quit = true;
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(save) = self.autosave.poll(now) {
            save.apply(&mut self.store);
        }
        if self
            .status
            .as_ref()
            .is_some_and(|status| now.duration_since(status.shown_at) >= STATUS_TTL)
        {
            self.status = None;
        }
        self.sync_with_store();
    }

    /// Push the pending draft to the store right away.
    pub fn flush_autosave(&mut self) {
        if let Some(save) = self.autosave.flush() {
            save.apply(&mut self.store);
        }
        self.sync_with_store();
    }

    // -- navigation ----------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.cycle_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.cycle_focus(false);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus_allowed(focus) {
            self.focus = focus;
        }
    }

    /// Move the cursor of the focused list and apply the selection.
    pub fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Folders => {
                let rows = self.state().folders.len() + 1;
                self.folder_cursor = step(self.folder_cursor, delta, rows);
            }
            Focus::Notes => {
                let rows = self.state().filtered_notes().len();
                if rows > 0 {
                    let row = step(self.note_cursor, delta, rows);
                    self.select_note_row(row);
                }
            }
            Focus::Title | Focus::Content => {}
        }
    }

    /// Enter on a list: apply the folder filter or jump into the editor.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Folders => self.select_folder_row(self.folder_cursor),
            Focus::Notes => {
                if self.draft.is_none() {
                    self.select_note_row(self.note_cursor);
                }
                self.set_focus(Focus::Content);
            }
            Focus::Title => self.set_focus(Focus::Content),
            Focus::Content => {}
        }
    }

    pub fn select_folder_row(&mut self, row: usize) {
        self.flush_autosave();
        let folder_id = match row {
            0 => None,
            n => self.state().folders.get(n - 1).map(|folder| folder.id.clone()),
        };
        if row > 0 && folder_id.is_none() {
            return;
        }
        self.store.set_active_folder(folder_id.as_deref());
        self.folder_cursor = row;
        self.note_cursor = 0;
        self.sync_with_store();
    }

    pub fn select_note_row(&mut self, row: usize) {
        let Some(id) = self
            .state()
            .filtered_notes()
            .get(row)
            .map(|note| note.id.clone())
        else {
            return;
        };
        self.flush_autosave();
        self.store.set_active_note(Some(&id));
        self.note_cursor = row;
        self.sync_with_store();
    }

    // -- note & folder actions -----------------------------------------------

    pub fn new_note(&mut self) {
        self.flush_autosave();
        let note = self.store.create_note(None);
        self.sync_with_store();
        self.focus = Focus::Title;
        self.set_status(format!("Created \"{}\"", note.title), false);
    }

    pub fn cycle_view_mode(&mut self) {
        let mode = self.state().view_mode.next();
        self.store.set_view_mode(mode);
        if !mode.shows_editor() && self.focus == Focus::Content {
            self.focus = Focus::Notes;
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.store.toggle_dark_mode();
    }

    pub fn export_active_note(&mut self) {
        self.flush_autosave();
        let Some(note) = self.store.active_note() else {
            self.set_status("No note selected".to_string(), true);
            return;
        };
        match export_markdown(note, &self.export_dir) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display()), false),
            Err(err) => {
                tracing::error!(error = %err, "Markdown export failed");
                self.set_status(err.to_string(), true);
            }
        }
    }

    pub fn save_now(&mut self) {
        self.flush_autosave();
        match self.store.last_persist_error() {
            Some(err) => {
                let message = format!("Save failed: {}", err);
                self.set_status(message, true);
            }
            None => self.set_status("Saved".to_string(), false),
        }
    }

    // -- dialogs -------------------------------------------------------------

    pub fn ask_delete_note(&mut self) {
        let Some(note) = self.store.active_note() else {
            return;
        };
        let intent = DialogIntent::AskDelete {
            target: DeleteTarget::Note {
                id: note.id.clone(),
            },
            label: note.title.clone(),
        };
        dispatch_mvi!(self, dialog, DialogReducer, intent);
    }

    /// Delete the folder under the folder cursor, or the active folder.
    pub fn ask_delete_folder(&mut self) {
        let Some((id, name)) = self.targeted_folder() else {
            return;
        };
        let intent = DialogIntent::AskDelete {
            target: DeleteTarget::Folder { id },
            label: name,
        };
        dispatch_mvi!(self, dialog, DialogReducer, intent);
    }

    pub fn ask_new_folder(&mut self) {
        let intent = DialogIntent::AskName {
            purpose: NamePurpose::NewFolder,
            initial: String::new(),
        };
        dispatch_mvi!(self, dialog, DialogReducer, intent);
    }

    pub fn ask_rename_folder(&mut self) {
        let Some((id, name)) = self.targeted_folder() else {
            return;
        };
        let intent = DialogIntent::AskName {
            purpose: NamePurpose::RenameFolder { id },
            initial: name,
        };
        dispatch_mvi!(self, dialog, DialogReducer, intent);
    }

    pub fn ask_move_note(&mut self) {
        let Some(note) = self.store.active_note() else {
            return;
        };
        let current = note.folder_id.clone();
        let mut options = vec![FolderOption {
            id: None,
            name: "Uncategorized".to_string(),
        }];
        options.extend(self.state().folders.iter().map(|folder| FolderOption {
            id: Some(folder.id.clone()),
            name: folder.name.clone(),
        }));
        dispatch_mvi!(
            self,
            dialog,
            DialogReducer,
            DialogIntent::PickFolder { options, current }
        );
    }

    pub fn open_search(&mut self) {
        let initial = self.state().search_query.clone();
        dispatch_mvi!(
            self,
            dialog,
            DialogReducer,
            DialogIntent::OpenSearch { initial }
        );
    }

    /// Type into the open dialog. Search input filters live.
    pub fn dialog_input(&mut self, intent: DialogIntent) {
        dispatch_mvi!(self, dialog, DialogReducer, intent);
        if let DialogState::Search { input } = &self.dialog {
            let query = input.clone();
            self.store.set_search_query(&query);
            self.note_cursor = 0;
            self.sync_with_store();
        }
    }

    /// Decline: close the dialog without touching the store.
    pub fn cancel_dialog(&mut self) {
        dispatch_mvi!(self, dialog, DialogReducer, DialogIntent::Close);
    }

    /// Accept the open dialog and perform its action.
    pub fn confirm_dialog(&mut self) {
        match self.dialog.clone() {
            DialogState::Hidden => return,
            DialogState::ConfirmDelete { target, label } => match target {
                DeleteTarget::Note { id } => {
                    self.autosave.discard(&id);
                    self.store.delete_note(&id);
                    self.set_status(format!("Deleted \"{}\"", label), false);
                }
                DeleteTarget::Folder { id } => {
                    self.flush_autosave();
                    self.store.delete_folder(&id);
                    self.folder_cursor = self.active_folder_row();
                    self.set_status(format!("Deleted folder \"{}\"", label), false);
                }
            },
            DialogState::NameInput { purpose, input, .. } => {
                let name = input.trim();
                if name.is_empty() {
                    dispatch_mvi!(self, dialog, DialogReducer, DialogIntent::RejectEmptyName);
                    return;
                }
                match purpose {
                    NamePurpose::NewFolder => {
                        let folder = self.store.create_folder(name, None);
                        self.set_status(format!("Created folder \"{}\"", folder.name), false);
                    }
                    NamePurpose::RenameFolder { id } => {
                        self.store.update_folder(&id, FolderPatch::name(name));
                    }
                }
            }
            DialogState::FolderPicker { options, selected } => {
                if let (Some(option), Some(note_id)) =
                    (options.get(selected), self.state().active_note_id.clone())
                {
                    self.flush_autosave();
                    self.store
                        .update_note(&note_id, NotePatch::folder(option.id.clone()));
                    self.set_status(format!("Moved to {}", option.name), false);
                }
            }
            DialogState::Search { .. } => {}
        }
        dispatch_mvi!(self, dialog, DialogReducer, DialogIntent::Close);
        self.sync_with_store();
    }

    // -- editing -------------------------------------------------------------

    pub fn edit(&mut self, op: EditOp) {
        let focus = self.focus;
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        let buffer = match focus {
            Focus::Title => &mut draft.title,
            Focus::Content => &mut draft.content,
            Focus::Folders | Focus::Notes => return,
        };

        let before = buffer.text();
        match op {
            EditOp::Insert(ch) => buffer.insert_char(ch),
            EditOp::Paste(text) => buffer.insert_str(&text),
            EditOp::Newline => buffer.insert_newline(),
            EditOp::Backspace => buffer.backspace(),
            EditOp::Delete => buffer.delete(),
            EditOp::Left => buffer.move_left(),
            EditOp::Right => buffer.move_right(),
            EditOp::Up => buffer.move_up(),
            EditOp::Down => buffer.move_down(),
            EditOp::Home => buffer.move_home(),
            EditOp::End => buffer.move_end(),
        }
        let after = buffer.text();
        if after == before {
            return;
        }

        let patch = match focus {
            Focus::Title => NotePatch::title(after),
            _ => NotePatch::content(after),
        };
        let note_id = draft.note_id.clone();
        if let Some(displaced) = self.autosave.record(&note_id, patch, Instant::now()) {
            displaced.apply(&mut self.store);
        }
    }

    // -- internals -----------------------------------------------------------

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage {
            text,
            is_error,
            shown_at: Instant::now(),
        });
    }

    fn targeted_folder(&self) -> Option<(String, String)> {
        let state = self.state();
        let folder = match (self.focus, self.folder_cursor) {
            (Focus::Folders, row) if row > 0 => state.folders.get(row - 1),
            _ => state.active_folder(),
        }?;
        Some((folder.id.clone(), folder.name.clone()))
    }

    fn active_folder_row(&self) -> usize {
        let state = self.state();
        state
            .active_folder_id
            .as_deref()
            .and_then(|id| state.folders.iter().position(|folder| folder.id == id))
            .map(|index| index + 1)
            .unwrap_or(0)
    }

    fn focus_allowed(&self, focus: Focus) -> bool {
        match focus {
            Focus::Folders | Focus::Notes => true,
            Focus::Title => self.draft.is_some(),
            Focus::Content => self.draft.is_some() && self.state().view_mode.shows_editor(),
        }
    }

    fn cycle_focus(&self, forward: bool) -> Focus {
        const ORDER: [Focus; 4] = [Focus::Folders, Focus::Notes, Focus::Title, Focus::Content];
        let current = ORDER
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        (1..=ORDER.len())
            .map(|offset| {
                if forward {
                    ORDER[(current + offset) % ORDER.len()]
                } else {
                    ORDER[(current + ORDER.len() - offset) % ORDER.len()]
                }
            })
            .find(|focus| self.focus_allowed(*focus))
            .unwrap_or(Focus::Notes)
    }

    /// Reconcile drafts and cursors with the store after it changed.
    fn sync_with_store(&mut self) {
        self.seen_revision = self.revision.load(Ordering::Relaxed);

        let state = self.store.state();
        let active = state.active_note();
        let draft_matches = match (&self.draft, active) {
            (Some(draft), Some(note)) => draft.note_id == note.id,
            (None, None) => true,
            _ => false,
        };
        if !draft_matches {
            self.draft = active.map(|note| Draft {
                note_id: note.id.clone(),
                title: TextBuffer::single_line(&note.title),
                content: TextBuffer::multi_line(&note.content),
            });
        }

        let filtered = state.filtered_notes();
        self.note_cursor = match active {
            Some(note) => filtered
                .iter()
                .position(|candidate| candidate.id == note.id)
                .unwrap_or(0),
            None => self.note_cursor.min(filtered.len().saturating_sub(1)),
        };
        self.folder_cursor = self.folder_cursor.min(state.folders.len());

        if !self.focus_allowed(self.focus) {
            self.focus = Focus::Notes;
        }
    }

    /// True when the store changed since the last sync (e.g. an auto-save).
    pub fn needs_sync(&self) -> bool {
        self.revision.load(Ordering::Relaxed) != self.seen_revision
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
