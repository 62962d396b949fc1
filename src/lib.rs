//! VibeNotes: a local-first markdown notes app.
//!
//! [`store::NotesStore`] owns the notes, folders and UI preferences and
//! writes every change through a [`storage::Persistence`] before telling
//! subscribers about it. The terminal UI in [`ui`] and the command line
//! in the binary are both thin layers over the store.

pub mod autosave;
pub mod cli;
pub mod clock;
pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod storage;
pub mod store;
pub mod ui;
