//! Config management use case

use crate::error::{Result, ShelfError};
use crate::infrastructure::{Config, FileSystemLibrary, LibraryRepository};
use std::path::PathBuf;

pub const CONFIG_KEYS: &str = "copy_command, export_dir, created";

/// Service for managing library configuration
pub struct ConfigService {
    repository: FileSystemLibrary,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemLibrary) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "copy_command" => Ok(config.copy_command),
            "export_dir" => Ok(config.export_dir.display().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ShelfError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "copy_command" => {
                if value.trim().is_empty() {
                    return Err(ShelfError::Config(
                        "copy_command cannot be empty".to_string(),
                    ));
                }
                config.copy_command = value.trim().to_string();
            }
            "export_dir" => {
                config.export_dir = PathBuf::from(value);
            }
            "created" => {
                return Err(ShelfError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ShelfError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: copy_command, export_dir",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
