//! The notes store: single source of truth for notes, folders and the UI
//! selection, with write-through persistence and change notification.

mod intent;
mod notes_store;
mod reducer;
mod state;

pub use intent::NotesIntent;
pub use notes_store::{NotesStore, SubscriptionId};
pub use reducer::NotesReducer;
pub use state::NotesState;
