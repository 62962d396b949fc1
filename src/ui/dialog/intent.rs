use crate::mvi::Intent;
use crate::ui::dialog::state::{DeleteTarget, FolderOption, NamePurpose};

#[derive(Debug, Clone)]
pub enum DialogIntent {
    AskDelete {
        target: DeleteTarget,
        label: String,
    },
    AskName {
        purpose: NamePurpose,
        initial: String,
    },
    PickFolder {
        options: Vec<FolderOption>,
        /// Folder the note is currently in, preselected if present.
        current: Option<String>,
    },
    OpenSearch {
        initial: String,
    },
    InsertChar(char),
    Backspace,
    /// Clear the whole input line.
    ClearInput,
    MoveUp,
    MoveDown,
    /// Submit of a name prompt whose trimmed input was empty.
    RejectEmptyName,
    Close,
}

impl Intent for DialogIntent {}
