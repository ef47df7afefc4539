//! Prompt library document: categories, prompts and their relations

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, icon-labeled grouping of prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// A stored text template belonging to exactly one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub content: String,
    pub category_id: String,
}

impl Prompt {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Prompt {
            id: id.into(),
            content: content.into(),
            category_id: category_id.into(),
        }
    }
}

/// The complete library state, persisted as a unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub categories: Vec<Category>,
    pub prompts: Vec<Prompt>,
}

impl Document {
    pub fn new(categories: Vec<Category>, prompts: Vec<Prompt>) -> Self {
        Document {
            categories,
            prompts,
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Resolve a category by exact id first, then by exact name.
    pub fn find_category(&self, reference: &str) -> Option<&Category> {
        self.category(reference)
            .or_else(|| self.categories.iter().find(|c| c.name == reference))
    }

    pub fn prompt(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn prompt_mut(&mut self, id: &str) -> Option<&mut Prompt> {
        self.prompts.iter_mut().find(|p| p.id == id)
    }

    /// Prompts visible in the view of one category, in document order
    pub fn prompts_in<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Prompt> {
        self.prompts
            .iter()
            .filter(move |p| p.category_id == category_id)
    }

    pub fn prompt_count(&self, category_id: &str) -> usize {
        self.prompts_in(category_id).count()
    }

    /// Prompts whose category no longer exists
    pub fn orphaned_prompts(&self) -> Vec<&Prompt> {
        let known: HashSet<&str> = self.categories.iter().map(|c| c.id.as_str()).collect();
        self.prompts
            .iter()
            .filter(|p| !known.contains(p.category_id.as_str()))
            .collect()
    }

    /// Every id in use, categories and prompts alike
    pub fn ids(&self) -> HashSet<String> {
        self.categories
            .iter()
            .map(|c| c.id.clone())
            .chain(self.prompts.iter().map(|p| p.id.clone()))
            .collect()
    }

    /// Remove a category and every prompt filed under it.
    ///
    /// Returns the removed category and the number of prompts removed with it.
    pub fn remove_category(&mut self, id: &str) -> Option<(Category, usize)> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        let category = self.categories.remove(index);

        let before = self.prompts.len();
        self.prompts.retain(|p| p.category_id != id);
        let removed = before - self.prompts.len();

        Some((category, removed))
    }

    pub fn remove_prompt(&mut self, id: &str) -> Option<Prompt> {
        let index = self.prompts.iter().position(|p| p.id == id)?;
        Some(self.prompts.remove(index))
    }
}
