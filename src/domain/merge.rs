//! Merge reconciliation of an imported library into the local one
//!
//! Categories are deduplicated by name. Kept foreign categories and every
//! foreign prompt get freshly minted `imported_` ids. A foreign prompt whose
//! category was skipped because a same-named local category exists keeps its
//! foreign `categoryId` under [`MergePolicy::Preserve`], leaving it orphaned.

use super::document::{Document, Prompt};
use super::ids::{mint_unique, IdGenerator};
use std::collections::{HashMap, HashSet};

pub const IMPORTED_ID_PREFIX: &str = "imported_";

/// How prompts of skipped (name-duplicate) categories are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Leave their foreign `categoryId` untouched; they become orphaned
    #[default]
    Preserve,
    /// Point them at the local category with the same name
    AttachToExisting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub foreign_categories: usize,
    pub foreign_prompts: usize,
    pub added_categories: usize,
    pub skipped_categories: Vec<String>,
    pub added_prompts: usize,
    pub orphaned_prompts: usize,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub document: Document,
    pub report: MergeReport,
}

pub fn merge_documents(
    current: &Document,
    foreign: Document,
    ids: &mut dyn IdGenerator,
    policy: MergePolicy,
) -> MergeOutcome {
    let existing_names: HashMap<&str, &str> = current
        .categories
        .iter()
        .rev()
        .map(|c| (c.name.as_str(), c.id.as_str()))
        .collect();

    // Minted ids must not capture prompts that reference a dangling category
    let mut taken = current.ids();
    taken.extend(foreign.prompts.iter().map(|p| p.category_id.clone()));
    let mut id_map: HashMap<String, String> = HashMap::new();
    let mut kept = Vec::new();
    let mut skipped_categories = Vec::new();

    let foreign_categories = foreign.categories.len();
    let foreign_prompts = foreign.prompts.len();

    for mut category in foreign.categories {
        if let Some(local_id) = existing_names.get(category.name.as_str()) {
            if policy == MergePolicy::AttachToExisting {
                id_map
                    .entry(category.id.clone())
                    .or_insert_with(|| local_id.to_string());
            }
            skipped_categories.push(category.name);
            continue;
        }

        let new_id = mint_unique(ids, IMPORTED_ID_PREFIX, &mut taken);
        id_map.insert(category.id.clone(), new_id.clone());
        category.id = new_id;
        kept.push(category);
    }

    let rewritten: Vec<Prompt> = foreign
        .prompts
        .into_iter()
        .map(|prompt| {
            let category_id = id_map
                .get(&prompt.category_id)
                .cloned()
                .unwrap_or(prompt.category_id);
            Prompt {
                id: mint_unique(ids, IMPORTED_ID_PREFIX, &mut taken),
                content: prompt.content,
                category_id,
            }
        })
        .collect();

    let added_categories = kept.len();
    let added_prompts = rewritten.len();

    let mut categories = current.categories.clone();
    categories.extend(kept);
    let mut prompts = current.prompts.clone();
    prompts.extend(rewritten);
    let document = Document::new(categories, prompts);

    let known: HashSet<&str> = document.categories.iter().map(|c| c.id.as_str()).collect();
    let orphaned_prompts = document.prompts[current.prompts.len()..]
        .iter()
        .filter(|p| !known.contains(p.category_id.as_str()))
        .count();

    MergeOutcome {
        report: MergeReport {
            foreign_categories,
            foreign_prompts,
            added_categories,
            skipped_categories,
            added_prompts,
            orphaned_prompts,
        },
        document,
    }
}
