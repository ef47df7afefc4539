//! Prompt management use cases

use crate::application::categories::resolve_category;
use crate::application::store::PromptStore;
use crate::domain::ids::mint_unique;
use crate::domain::{Category, Document, IdGenerator, Prompt};
use crate::error::{Result, ShelfError};
use crate::infrastructure::{copy_to_clipboard, ClipboardSink};

/// Which prompts a listing shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptScope {
    /// Every category in order, each with its prompts
    All,
    /// One category, referenced by id or name
    Category(String),
    /// Prompts whose category no longer exists
    Orphaned,
}

/// Prompts grouped under the category they are shown in.
/// `category` is `None` for the orphan group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptGroup {
    pub category: Option<Category>,
    pub prompts: Vec<Prompt>,
}

pub fn list_prompts(document: &Document, scope: &PromptScope) -> Result<Vec<PromptGroup>> {
    let group = |category: &Category| PromptGroup {
        category: Some(category.clone()),
        prompts: document.prompts_in(&category.id).cloned().collect(),
    };

    match scope {
        PromptScope::All => Ok(document.categories.iter().map(group).collect()),
        PromptScope::Category(reference) => {
            Ok(vec![group(resolve_category(document, reference)?)])
        }
        PromptScope::Orphaned => Ok(vec![PromptGroup {
            category: None,
            prompts: document.orphaned_prompts().into_iter().cloned().collect(),
        }]),
    }
}

pub fn find_prompt<'d>(document: &'d Document, id: &str) -> Result<&'d Prompt> {
    document
        .prompt(id)
        .ok_or_else(|| ShelfError::PromptNotFound(id.to_string()))
}

pub fn add_prompt(
    store: &mut PromptStore,
    ids: &mut dyn IdGenerator,
    category: &str,
    content: &str,
) -> Result<Prompt> {
    let content = normalize_content(content)?;

    store.mutate(|doc| {
        let category_id = resolve_category(doc, category)?.id.clone();
        let mut taken = doc.ids();
        let prompt = Prompt::new(mint_unique(ids, "", &mut taken), content, category_id);
        doc.prompts.push(prompt.clone());
        Ok(prompt)
    })
}

pub fn edit_prompt(
    store: &mut PromptStore,
    id: &str,
    content: Option<&str>,
    category: Option<&str>,
) -> Result<Prompt> {
    if content.is_none() && category.is_none() {
        return Err(ShelfError::InvalidInput(
            "Nothing to change: pass --content and/or --category".to_string(),
        ));
    }
    let content = content.map(normalize_content).transpose()?;

    store.mutate(|doc| {
        let category_id = category
            .map(|reference| resolve_category(doc, reference).map(|c| c.id.clone()))
            .transpose()?;
        let prompt = doc
            .prompt_mut(id)
            .ok_or_else(|| ShelfError::PromptNotFound(id.to_string()))?;
        if let Some(content) = content {
            prompt.content = content;
        }
        if let Some(category_id) = category_id {
            prompt.category_id = category_id;
        }
        Ok(prompt.clone())
    })
}

pub fn delete_prompt(store: &mut PromptStore, id: &str) -> Result<Prompt> {
    store.mutate(|doc| {
        doc.remove_prompt(id)
            .ok_or_else(|| ShelfError::PromptNotFound(id.to_string()))
    })
}

/// Copy a prompt's content. `Ok(false)` means both clipboard paths failed.
pub fn copy_prompt(
    document: &Document,
    id: &str,
    system: &mut dyn ClipboardSink,
    command: &mut dyn ClipboardSink,
) -> Result<bool> {
    let prompt = find_prompt(document, id)?;
    Ok(copy_to_clipboard(system, command, &prompt.content))
}

fn normalize_content(content: &str) -> Result<String> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ShelfError::InvalidInput(
            "Prompt content cannot be empty".to_string(),
        ));
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SequentialGenerator;

    fn document() -> Document {
        Document::new(
            vec![
                Category::new("1", "Work", "💼"),
                Category::new("2", "Home", "🏠"),
            ],
            vec![
                Prompt::new("p1", "Draft [topic]", "1"),
                Prompt::new("p2", "Plan dinner", "2"),
                Prompt::new("p3", "Old", "gone"),
            ],
        )
    }

    fn store() -> PromptStore<'static> {
        PromptStore::new(document(), Box::new(|_: &Document| -> Result<()> { Ok(()) }))
    }

    struct Sink {
        fail: bool,
        text: Option<String>,
    }

    impl ClipboardSink for Sink {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(ShelfError::Config("no clipboard".to_string()));
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_list_all_hides_orphans() {
        let groups = list_prompts(&document(), &PromptScope::All).unwrap();
        assert_eq!(groups.len(), 2);
        let shown: usize = groups.iter().map(|g| g.prompts.len()).sum();
        assert_eq!(shown, 2);
    }

    #[test]
    fn test_list_single_category_by_name() {
        let groups = list_prompts(&document(), &PromptScope::Category("Home".into())).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].prompts[0].id, "p2");
    }

    #[test]
    fn test_list_unknown_category_fails() {
        assert!(matches!(
            list_prompts(&document(), &PromptScope::Category("Garden".into())),
            Err(ShelfError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_list_orphaned() {
        let groups = list_prompts(&document(), &PromptScope::Orphaned).unwrap();
        assert!(groups[0].category.is_none());
        assert_eq!(groups[0].prompts[0].id, "p3");
    }

    #[test]
    fn test_add_prompt_trims_and_files_under_category() {
        let mut store = store();
        let mut ids = SequentialGenerator::new("n");

        let prompt = add_prompt(&mut store, &mut ids, "Home", "  Water plants \n").unwrap();
        assert_eq!(prompt, Prompt::new("n1", "Water plants", "2"));
        assert_eq!(store.document().prompt_count("2"), 2);
    }

    #[test]
    fn test_add_prompt_rejects_empty_content_and_unknown_category() {
        let mut store = store();
        let mut ids = SequentialGenerator::new("n");

        assert!(add_prompt(&mut store, &mut ids, "1", "   ").is_err());
        assert!(add_prompt(&mut store, &mut ids, "Garden", "X").is_err());
        assert_eq!(store.document().prompts.len(), 3);
    }

    #[test]
    fn test_edit_prompt_moves_and_rewrites() {
        let mut store = store();
        let edited = edit_prompt(&mut store, "p1", Some("Draft [topic] briefly"), Some("Home")).unwrap();

        assert_eq!(edited, Prompt::new("p1", "Draft [topic] briefly", "2"));
        assert_eq!(store.document().prompt("p1"), Some(&edited));
    }

    #[test]
    fn test_edit_prompt_errors() {
        let mut store = store();
        assert!(matches!(
            edit_prompt(&mut store, "p1", None, None),
            Err(ShelfError::InvalidInput(_))
        ));
        assert!(matches!(
            edit_prompt(&mut store, "nope", Some("X"), None),
            Err(ShelfError::PromptNotFound(_))
        ));
        assert!(matches!(
            edit_prompt(&mut store, "p1", None, Some("Garden")),
            Err(ShelfError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_delete_prompt() {
        let mut store = store();
        assert_eq!(delete_prompt(&mut store, "p2").unwrap().content, "Plan dinner");
        assert!(matches!(
            delete_prompt(&mut store, "p2"),
            Err(ShelfError::PromptNotFound(_))
        ));
    }

    #[test]
    fn test_copy_prompt_reports_outcome() {
        let doc = document();
        let mut system = Sink { fail: false, text: None };
        let mut command = Sink { fail: false, text: None };

        assert!(copy_prompt(&doc, "p1", &mut system, &mut command).unwrap());
        let copied = system.text.as_deref().or(command.text.as_deref());
        assert_eq!(copied, Some("Draft [topic]"));

        let mut broken = Sink { fail: true, text: None };
        let mut also_broken = Sink { fail: true, text: None };
        assert!(!copy_prompt(&doc, "p1", &mut broken, &mut also_broken).unwrap());

        assert!(copy_prompt(&doc, "nope", &mut system, &mut command).is_err());
    }
}
