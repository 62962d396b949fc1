mod intent;
mod reducer;
mod render;
mod state;

pub use intent::DialogIntent;
pub use reducer::DialogReducer;
pub use render::render_dialog;
pub use state::{DeleteTarget, DialogState, FolderOption, NamePurpose};
