//! TOML configuration: storage location, persistence knobs, editor timing
//! and export target.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EditorConfig, ExportConfig, StorageConfig};
