//! TOML configuration: file location, sections and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EditorConfig, LoggingConfig, StorageConfig};
