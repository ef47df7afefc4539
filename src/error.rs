//! Error types for promptshelf

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the promptshelf application
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Not a promptshelf directory: {0}")]
    NotLibraryDirectory(PathBuf),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("Import file not found: {0}")]
    ImportFileMissing(PathBuf),

    #[error("Import file could not be read: {0}")]
    ImportUnreadable(String),

    #[error("Import file could not be parsed, check the file format: {0}")]
    ImportParse(String),

    #[error("Import file format is incorrect")]
    ImportFormat,

    #[error("Failed to save library data: {0}")]
    StorageWrite(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ShelfError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShelfError::NotLibraryDirectory(_) => 2,
            ShelfError::CategoryNotFound(_) | ShelfError::PromptNotFound(_) => 3,
            ShelfError::ImportFileMissing(_)
            | ShelfError::ImportUnreadable(_)
            | ShelfError::ImportParse(_)
            | ShelfError::ImportFormat => 4,
            ShelfError::StorageWrite(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ShelfError::NotLibraryDirectory(path) => {
                format!(
                    "Not a promptshelf directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'promptshelf init' in this directory to create a new library\n\
                    • Navigate to an existing library directory\n\
                    • Set PROMPTSHELF_ROOT environment variable to your library path",
                    path.display()
                )
            }
            ShelfError::CategoryNotFound(reference) => {
                format!(
                    "Category not found: '{}'\n\n\
                    Suggestions:\n\
                    • Categories can be referenced by id or by exact name\n\
                    • Use 'promptshelf category list' to see available categories",
                    reference
                )
            }
            ShelfError::PromptNotFound(id) => {
                format!(
                    "Prompt not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'promptshelf prompt list' to see prompt ids",
                    id
                )
            }
            ShelfError::ImportFormat => "Import file format is incorrect\n\n\
                Expected a JSON object with 'categories' and 'prompts' arrays.\n\
                Every category needs non-empty 'id', 'name' and 'icon';\n\
                every prompt needs non-empty 'id', 'content' and 'categoryId'."
                .to_string(),
            ShelfError::StorageWrite(msg) => {
                format!(
                    "Failed to save library data: {}\n\n\
                    Suggestions:\n\
                    • Check free disk space and permissions on the .promptshelf directory",
                    msg
                )
            }
            ShelfError::ConfirmationRequired(msg) => {
                format!("{}\n\nRe-run the command with --yes to continue.", msg)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;
