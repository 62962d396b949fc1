use crate::mvi::ViewState;

/// What a delete confirmation would remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Note { id: String },
    Folder { id: String },
}

/// What a name prompt is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePurpose {
    NewFolder,
    RenameFolder { id: String },
}

/// One row of the "move to folder" picker. `id: None` is "Uncategorized".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderOption {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    ConfirmDelete {
        target: DeleteTarget,
        /// Title or name shown in the prompt.
        label: String,
    },
    NameInput {
        purpose: NamePurpose,
        input: String,
        /// Set when the user submitted an empty name.
        error: Option<String>,
    },
    FolderPicker {
        options: Vec<FolderOption>,
        selected: usize,
    },
    Search {
        input: String,
    },
}

impl ViewState for DialogState {}

impl DialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
