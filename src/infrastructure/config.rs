//! Configuration management

use crate::error::{Result, ShelfError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LIBRARY_DIR: &str = ".promptshelf";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Command that receives copied text on stdin when the system clipboard is unavailable
    pub copy_command: String,
    /// Where `export` writes dated files, relative to the library root
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    pub created: DateTime<Utc>,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            copy_command: Self::detect_default_copy_command(),
            export_dir: default_export_dir(),
            created: Utc::now(),
        }
    }

    /// Load config from .promptshelf/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(LIBRARY_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShelfError::NotLibraryDirectory(path.to_path_buf())
            } else {
                ShelfError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ShelfError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .promptshelf/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let library_dir = path.join(LIBRARY_DIR);
        let config_path = library_dir.join(CONFIG_FILE);

        if !library_dir.exists() {
            fs::create_dir(&library_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ShelfError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the copy command, checking the environment first
    pub fn get_copy_command(&self) -> String {
        std::env::var("PROMPTSHELF_COPY_COMMAND").unwrap_or_else(|_| self.copy_command.clone())
    }

    /// Resolve the export directory against the library root
    pub fn export_dir_in(&self, root: &Path) -> PathBuf {
        if self.export_dir.is_absolute() {
            self.export_dir.clone()
        } else {
            root.join(&self.export_dir)
        }
    }

    /// Detect the platform's clipboard command
    fn detect_default_copy_command() -> String {
        if cfg!(target_os = "macos") {
            "pbcopy".to_string()
        } else if cfg!(windows) {
            "clip".to_string()
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            "wl-copy".to_string()
        } else {
            "xclip -selection clipboard".to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
