//! Initialize library use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemLibrary, LibraryRepository};
use std::fs;
use std::path::Path;

/// Initialize a new library at the specified path.
///
/// Only the configuration is written; the document record is created by the
/// first change, until then the bundled starter library is shown.
pub fn init(path: &Path) -> Result<FileSystemLibrary> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemLibrary::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_nested_directory_and_config() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("library");

        let repo = init(&target).unwrap();

        assert!(target.join(".promptshelf/config.toml").exists());
        assert!(!repo.document_path().exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
