//! Export and import use cases

use crate::application::store::PromptStore;
use crate::domain::{merge_documents, Document, IdGenerator, MergePolicy, MergeReport};
use crate::error::{Result, ShelfError};
use crate::infrastructure::{FileSystemLibrary, LibraryRepository};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Keep local data and add the foreign document to it
    Merge(MergePolicy),
    /// Overwrite local data; `confirmed` must be set
    Replace { confirmed: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSummary {
    Merged(MergeReport),
    Replaced { categories: usize, prompts: usize },
}

/// Export the document. Without a destination the configured export
/// directory receives a dated file.
pub fn export_library(
    repository: &FileSystemLibrary,
    document: &Document,
    destination: Option<&Path>,
    today: NaiveDate,
) -> Result<PathBuf> {
    let destination = match destination {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = repository.load_config()?.export_dir_in(repository.root());
            fs::create_dir_all(&dir)
                .map_err(|e| ShelfError::Export(format!("{}: {}", dir.display(), e)))?;
            dir
        }
    };
    repository.export_document(document, &destination, today)
}

/// Apply an already validated foreign document to the store.
pub fn import_document(
    store: &mut PromptStore,
    ids: &mut dyn IdGenerator,
    foreign: Document,
    mode: ImportMode,
) -> Result<ImportSummary> {
    match mode {
        ImportMode::Merge(policy) => {
            let outcome = merge_documents(store.document(), foreign, ids, policy);
            let report = outcome.report;
            store.replace(outcome.document)?;
            info!(
                added_categories = report.added_categories,
                added_prompts = report.added_prompts,
                orphaned = report.orphaned_prompts,
                "import merged"
            );
            Ok(ImportSummary::Merged(report))
        }
        ImportMode::Replace { confirmed } => {
            if !confirmed {
                let current = store.document();
                return Err(ShelfError::ConfirmationRequired(format!(
                    "Replace import overwrites all {} categories and {} prompts.",
                    current.categories.len(),
                    current.prompts.len()
                )));
            }
            let categories = foreign.categories.len();
            let prompts = foreign.prompts.len();
            store.replace(foreign)?;
            info!(categories, prompts, "import replaced library");
            Ok(ImportSummary::Replaced {
                categories,
                prompts,
            })
        }
    }
}

/// Read, validate and apply an import file. Any read or format error
/// leaves the store untouched.
pub fn import_file(
    repository: &FileSystemLibrary,
    store: &mut PromptStore,
    ids: &mut dyn IdGenerator,
    path: &Path,
    mode: ImportMode,
) -> Result<ImportSummary> {
    let foreign = repository.read_import(path)?;
    import_document(store, ids, foreign, mode)
}
