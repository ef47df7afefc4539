//! Category management use cases

use crate::application::store::PromptStore;
use crate::domain::ids::mint_unique;
use crate::domain::{Category, Document, IdGenerator, DEFAULT_ICON};
use crate::error::{Result, ShelfError};

/// A category together with the number of prompts filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub prompt_count: usize,
}

pub fn list_categories(document: &Document) -> Vec<CategorySummary> {
    document
        .categories
        .iter()
        .map(|c| CategorySummary {
            category: c.clone(),
            prompt_count: document.prompt_count(&c.id),
        })
        .collect()
}

pub fn resolve_category<'d>(document: &'d Document, reference: &str) -> Result<&'d Category> {
    document
        .find_category(reference)
        .ok_or_else(|| ShelfError::CategoryNotFound(reference.to_string()))
}

pub fn add_category(
    store: &mut PromptStore,
    ids: &mut dyn IdGenerator,
    name: &str,
    icon: Option<&str>,
) -> Result<Category> {
    let name = normalize_name(name)?;
    let icon = normalize_icon(icon.unwrap_or(DEFAULT_ICON))?;

    store.mutate(|doc| {
        let mut taken = doc.ids();
        let category = Category::new(mint_unique(ids, "", &mut taken), name, icon);
        doc.categories.push(category.clone());
        Ok(category)
    })
}

pub fn edit_category(
    store: &mut PromptStore,
    reference: &str,
    name: Option<&str>,
    icon: Option<&str>,
) -> Result<Category> {
    if name.is_none() && icon.is_none() {
        return Err(ShelfError::InvalidInput(
            "Nothing to change: pass --name and/or --icon".to_string(),
        ));
    }
    let name = name.map(normalize_name).transpose()?;
    let icon = icon.map(normalize_icon).transpose()?;

    store.mutate(|doc| {
        let id = resolve_category(doc, reference)?.id.clone();
        let category = doc
            .category_mut(&id)
            .ok_or_else(|| ShelfError::CategoryNotFound(reference.to_string()))?;
        if let Some(name) = name {
            category.name = name;
        }
        if let Some(icon) = icon {
            category.icon = icon;
        }
        Ok(category.clone())
    })
}

/// Delete a category and its prompts.
///
/// A category that still holds prompts is only removed when `confirmed`.
pub fn delete_category(
    store: &mut PromptStore,
    reference: &str,
    confirmed: bool,
) -> Result<(Category, usize)> {
    let category = resolve_category(store.document(), reference)?;
    let prompt_count = store.document().prompt_count(&category.id);
    if prompt_count > 0 && !confirmed {
        return Err(ShelfError::ConfirmationRequired(format!(
            "Category '{}' holds {} prompt(s) that will be deleted with it.",
            category.name, prompt_count
        )));
    }
    let id = category.id.clone();

    store.mutate(|doc| {
        doc.remove_category(&id)
            .ok_or_else(|| ShelfError::CategoryNotFound(reference.to_string()))
    })
}

fn normalize_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ShelfError::InvalidInput(
            "Category name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn normalize_icon(icon: &str) -> Result<String> {
    let icon = icon.trim();
    if icon.is_empty() || icon.chars().any(char::is_whitespace) {
        return Err(ShelfError::InvalidInput(format!(
            "Invalid icon: '{}'. Use a single emoji or symbol",
            icon
        )));
    }
    Ok(icon.to_string())
}
