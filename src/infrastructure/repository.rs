//! File system repository

use crate::domain::{default_document, parse_import, Document};
use crate::error::{Result, ShelfError};
use crate::infrastructure::config::{Config, LIBRARY_DIR};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DOCUMENT_FILE: &str = "library.json";

/// Abstract repository for library operations
pub trait LibraryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .promptshelf/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .promptshelf/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .promptshelf directory exists
    fn is_initialized(&self) -> bool;

    /// Create .promptshelf directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the stored document, falling back to the seed library
    /// when the record is missing or unreadable
    fn load_document(&self) -> Document;

    /// Overwrite the stored document
    fn save_document(&self, document: &Document) -> Result<()>;
}

/// File system implementation of LibraryRepository
#[derive(Debug, Clone)]
pub struct FileSystemLibrary {
    pub root: PathBuf,
}

impl FileSystemLibrary {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemLibrary { root }
    }

    /// Discover library root by walking up from current directory
    /// First checks PROMPTSHELF_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PROMPTSHELF_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_library_dir(&path) {
                return Ok(FileSystemLibrary::new(path));
            } else {
                return Err(ShelfError::Config(format!(
                    "PROMPTSHELF_ROOT is set to '{}' but no .promptshelf directory found. \
                    Run 'promptshelf init' in that directory or unset PROMPTSHELF_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover library root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_library_dir(&current) {
                return Ok(FileSystemLibrary::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ShelfError::NotLibraryDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_library_dir(path: &Path) -> bool {
        path.join(LIBRARY_DIR).is_dir()
    }

    /// Path of the persisted document record
    pub fn document_path(&self) -> PathBuf {
        self.root.join(LIBRARY_DIR).join(DOCUMENT_FILE)
    }

    /// Write the document, pretty-printed, to `destination`.
    ///
    /// A directory destination receives a dated file name. Nothing is left
    /// at the destination when the write fails.
    pub fn export_document(
        &self,
        document: &Document,
        destination: &Path,
        date: NaiveDate,
    ) -> Result<PathBuf> {
        let path = if destination.is_dir() {
            destination.join(export_file_name(date))
        } else {
            destination.to_path_buf()
        };

        let contents = serde_json::to_string_pretty(document)
            .map_err(|e| ShelfError::Export(e.to_string()))?;
        write_atomic(&path, &contents)
            .map_err(|e| ShelfError::Export(format!("{}: {}", path.display(), e)))?;

        info!(
            path = %path.display(),
            categories = document.categories.len(),
            prompts = document.prompts.len(),
            "library exported"
        );
        Ok(path)
    }

    /// Read and validate an import file
    pub fn read_import(&self, path: &Path) -> Result<Document> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShelfError::ImportFileMissing(path.to_path_buf())
            } else {
                ShelfError::ImportUnreadable(format!("{}: {}", path.display(), e))
            }
        })?;

        parse_import(&text)
    }
}

impl LibraryRepository for FileSystemLibrary {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_library_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let library_dir = self.root.join(LIBRARY_DIR);

        if library_dir.exists() {
            return Err(ShelfError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&library_dir)?;
        Ok(())
    }

    fn load_document(&self) -> Document {
        let path = self.document_path();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no stored library, using defaults");
                return default_document();
            }
        };

        match serde_json::from_str::<Document>(&text) {
            Ok(document) => {
                debug!(
                    categories = document.categories.len(),
                    prompts = document.prompts.len(),
                    "library loaded"
                );
                document
            }
            Err(e) => {
                info!(path = %path.display(), error = %e, "stored library is corrupt, using defaults");
                default_document()
            }
        }
    }

    fn save_document(&self, document: &Document) -> Result<()> {
        let contents = serde_json::to_string(document)
            .map_err(|e| ShelfError::StorageWrite(e.to_string()))?;
        write_atomic(&self.document_path(), &contents)
            .map_err(|e| ShelfError::StorageWrite(e.to_string()))?;

        info!(
            categories = document.categories.len(),
            prompts = document.prompts.len(),
            "library saved"
        );
        Ok(())
    }
}

/// Dated export file name, e.g. `promptshelf-2025-01-17.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("promptshelf-{}.json", date.format("%Y-%m-%d"))
}

/// Best-effort atomic replace: write a temp file in the same directory,
/// then rename into place. The temp file is removed on failure.
///
/// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.promptshelf-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("library.json"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, content).and_then(|_| {
        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }
        fs::rename(&tmp_path, path)
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
