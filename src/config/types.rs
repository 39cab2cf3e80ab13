use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::notes::FileNoteStore;
use crate::ui::notes::{FieldLimits, DEFAULT_CONTENT_CHAR_LIMIT, DEFAULT_TITLE_CHAR_LIMIT};

/// Root configuration container. Every section is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where notes are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one `.md` file per note (default: `~/.leaf/notes`).
    #[serde(default)]
    pub notes_dir: Option<PathBuf>,
}

/// Text field limits, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_title_char_limit")]
    pub title_char_limit: usize,
    #[serde(default = "default_content_char_limit")]
    pub content_char_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "leaf=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path (default: `<data dir>/leaf/leaf.log`).
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_title_char_limit() -> usize {
    DEFAULT_TITLE_CHAR_LIMIT
}

fn default_content_char_limit() -> usize {
    DEFAULT_CONTENT_CHAR_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title_char_limit: default_title_char_limit(),
            content_char_limit: default_content_char_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Resolved notes directory. Falls back to `./.leaf/notes` without a home directory.
    pub fn notes_dir(&self) -> PathBuf {
        self.storage
            .notes_dir
            .clone()
            .or_else(FileNoteStore::default_dir)
            .unwrap_or_else(|| PathBuf::from(".leaf").join("notes"))
    }

    /// Resolved log file path.
    pub fn log_file_path(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("leaf")
                .join("leaf.log")
        })
    }

    pub fn field_limits(&self) -> FieldLimits {
        FieldLimits {
            title: self.editor.title_char_limit,
            content: self.editor.content_char_limit,
        }
    }
}
