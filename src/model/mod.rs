//! Notes, folders and the view preferences persisted alongside them.

mod folder;
mod note;
mod view_mode;

pub use folder::{random_folder_color, Folder, FolderPatch, FOLDER_COLORS};
pub use note::{Note, NotePatch, DEFAULT_NOTE_CONTENT, DEFAULT_NOTE_TITLE};
pub use view_mode::ViewMode;
