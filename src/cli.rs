use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Keyboard-driven terminal notebook.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "leaf", version, about)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the notes directory
    #[arg(long, value_name = "DIR")]
    pub notes_dir: Option<PathBuf>,

    /// Override the log filter (e.g. "debug" or "leaf=trace")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the selected config file, then apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.notes_dir {
            config.storage.notes_dir = Some(dir.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
