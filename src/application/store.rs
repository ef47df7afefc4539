//! In-memory document store with persistence after every mutation

use crate::domain::Document;
use crate::error::Result;
use crate::infrastructure::LibraryRepository;

/// Callback invoked with the new document after each successful transform
pub type Persist<'a> = Box<dyn FnMut(&Document) -> Result<()> + 'a>;

/// Holds the library document and writes it back after every change.
///
/// A transform that fails leaves the document untouched and nothing is
/// persisted. A persistence failure does not roll the change back: the new
/// document stays in memory and the error is returned to the caller.
pub struct PromptStore<'a> {
    document: Document,
    persist: Persist<'a>,
}

impl<'a> PromptStore<'a> {
    pub fn new(document: Document, persist: Persist<'a>) -> Self {
        PromptStore { document, persist }
    }

    /// Load the stored document from a repository and persist back into it
    pub fn open<R: LibraryRepository>(repository: &'a R) -> Self {
        let document = repository.load_document();
        Self::new(
            document,
            Box::new(move |doc: &Document| repository.save_document(doc)),
        )
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Apply `transform` to a working copy, adopt it, then persist.
    pub fn mutate<T, F>(&mut self, transform: F) -> Result<T>
    where
        F: FnOnce(&mut Document) -> Result<T>,
    {
        let mut working = self.document.clone();
        let value = transform(&mut working)?;
        self.document = working;
        (self.persist)(&self.document)?;
        Ok(value)
    }

    /// Swap in a whole new document
    pub fn replace(&mut self, document: Document) -> Result<()> {
        self.mutate(|doc| {
            *doc = document;
            Ok(())
        })
    }
}
