//! Library overview

use crate::domain::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryStatus {
    pub categories: usize,
    pub prompts: usize,
    pub orphaned: usize,
}

pub fn library_status(document: &Document) -> LibraryStatus {
    LibraryStatus {
        categories: document.categories.len(),
        prompts: document.prompts.len(),
        orphaned: document.orphaned_prompts().len(),
    }
}
