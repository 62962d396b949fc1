use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::PersistOptions;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Where notes live and which UI fields are kept across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot file. Defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Keep the search box contents across restarts (default: true).
    #[serde(default = "default_true")]
    pub persist_search_query: bool,
    /// Keep the folder filter across restarts (default: true).
    #[serde(default = "default_true")]
    pub persist_active_folder: bool,
}

/// Editor timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Quiet period before a draft is saved (default: 500).
    #[serde(default = "default_autosave_debounce_ms")]
    pub autosave_debounce_ms: u64,
    /// UI redraw/poll interval (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Markdown export target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output directory. Defaults to the current directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_autosave_debounce_ms() -> u64 {
    500
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            persist_search_query: true,
            persist_active_folder: true,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_debounce_ms: default_autosave_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl StorageConfig {
    pub fn persist_options(&self) -> PersistOptions {
        PersistOptions {
            search_query: self.persist_search_query,
            active_folder: self.persist_active_folder,
        }
    }
}
