//! Output formatting utilities

use crate::application::{CategorySummary, ImportSummary, LibraryStatus, PromptGroup};
use crate::domain::{placeholders, Category, Prompt};

const PREVIEW_CHARS: usize = 60;

/// Format category summaries for display
pub fn format_category_list(categories: &[CategorySummary]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for summary in categories {
        output.push_str(&format!(
            "{} {}  [{}]  {} prompt(s)\n",
            summary.category.icon,
            summary.category.name,
            summary.category.id,
            summary.prompt_count
        ));
    }
    output
}

/// Format grouped prompts, one preview line per prompt
pub fn format_prompt_groups(groups: &[PromptGroup]) -> String {
    if groups.iter().all(|g| g.prompts.is_empty()) {
        return "No prompts found".to_string();
    }

    let mut output = String::new();
    for group in groups {
        match &group.category {
            Some(category) => output.push_str(&format!(
                "{} {} ({})\n",
                category.icon,
                category.name,
                group.prompts.len()
            )),
            None => output.push_str(&format!("Orphaned ({})\n", group.prompts.len())),
        }
        for prompt in &group.prompts {
            output.push_str(&format!("  {}  {}\n", prompt.id, preview(&prompt.content)));
        }
    }
    output
}

/// Full prompt view with its category and placeholders
pub fn format_prompt_detail(prompt: &Prompt, category: Option<&Category>) -> String {
    let mut output = format!("id: {}\n", prompt.id);
    match category {
        Some(c) => output.push_str(&format!("category: {} {} [{}]\n", c.icon, c.name, c.id)),
        None => output.push_str(&format!("category: {} (missing)\n", prompt.category_id)),
    }

    let names = placeholders(&prompt.content);
    if !names.is_empty() {
        output.push_str(&format!("placeholders: {}\n", names.join(", ")));
    }

    output.push('\n');
    output.push_str(&prompt.content);
    output.push('\n');
    output
}

pub fn format_status(root: &str, status: &LibraryStatus) -> String {
    let mut output = format!(
        "Library: {}\n{} categories, {} prompts\n",
        root, status.categories, status.prompts
    );
    if status.orphaned > 0 {
        output.push_str(&format!(
            "{} orphaned prompt(s) (see 'promptshelf prompt list --orphaned')\n",
            status.orphaned
        ));
    }
    output
}

pub fn format_import_summary(summary: &ImportSummary) -> String {
    match summary {
        ImportSummary::Replaced {
            categories,
            prompts,
        } => format!(
            "Replaced library with {} categories and {} prompts.\n",
            categories, prompts
        ),
        ImportSummary::Merged(report) => {
            let mut output = format!(
                "Imported {} categories and {} prompts.\n",
                report.foreign_categories, report.foreign_prompts
            );
            output.push_str(&format!(
                "Added {} new categories and {} prompts.\n",
                report.added_categories, report.added_prompts
            ));
            if !report.skipped_categories.is_empty() {
                output.push_str(&format!(
                    "Skipped existing categories: {}\n",
                    report.skipped_categories.join(", ")
                ));
            }
            if report.orphaned_prompts > 0 {
                output.push_str(&format!(
                    "Warning: {} imported prompt(s) have no matching category \
                     (see 'promptshelf prompt list --orphaned').\n",
                    report.orphaned_prompts
                ));
            }
            output
        }
    }
}

/// First line of the content, shortened for list views
fn preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let mut shortened: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if first_line.chars().count() > PREVIEW_CHARS || content.lines().nth(1).is_some() {
        shortened.push('…');
    }
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MergeReport;

    #[test]
    fn test_format_empty_category_list() {
        assert_eq!(format_category_list(&[]), "No categories found");
    }

    #[test]
    fn test_format_category_list() {
        let summaries = vec![CategorySummary {
            category: Category::new("1", "Work", "💼"),
            prompt_count: 3,
        }];
        assert_eq!(format_category_list(&summaries), "💼 Work  [1]  3 prompt(s)\n");
    }

    #[test]
    fn test_format_prompt_groups() {
        let groups = vec![
            PromptGroup {
                category: Some(Category::new("1", "Work", "💼")),
                prompts: vec![Prompt::new("p1", "Review this:\n[code]", "1")],
            },
            PromptGroup {
                category: None,
                prompts: vec![Prompt::new("q1", "Lost", "9")],
            },
        ];

        let output = format_prompt_groups(&groups);
        assert!(output.contains("💼 Work (1)\n  p1  Review this:…\n"));
        assert!(output.contains("Orphaned (1)\n  q1  Lost\n"));
    }

    #[test]
    fn test_format_empty_groups() {
        let groups = vec![PromptGroup {
            category: Some(Category::new("1", "Work", "💼")),
            prompts: vec![],
        }];
        assert_eq!(format_prompt_groups(&groups), "No prompts found");
    }

    #[test]
    fn test_preview_truncates_long_lines() {
        let long = "x".repeat(80);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn test_format_prompt_detail_lists_placeholders() {
        let prompt = Prompt::new("p1", "Email [recipient] about [subject]", "9");
        let output = format_prompt_detail(&prompt, None);
        assert!(output.contains("category: 9 (missing)"));
        assert!(output.contains("placeholders: recipient, subject"));
        assert!(output.ends_with("Email [recipient] about [subject]\n"));
    }

    #[test]
    fn test_format_status_mentions_orphans() {
        let status = LibraryStatus {
            categories: 2,
            prompts: 5,
            orphaned: 1,
        };
        let output = format_status("/lib", &status);
        assert!(output.contains("2 categories, 5 prompts"));
        assert!(output.contains("1 orphaned prompt(s)"));
    }

    #[test]
    fn test_format_merge_summary_warns_about_orphans() {
        let summary = ImportSummary::Merged(MergeReport {
            foreign_categories: 1,
            foreign_prompts: 1,
            added_categories: 0,
            skipped_categories: vec!["Work".to_string()],
            added_prompts: 1,
            orphaned_prompts: 1,
        });
        let output = format_import_summary(&summary);
        assert!(output.contains("Imported 1 categories and 1 prompts."));
        assert!(output.contains("Skipped existing categories: Work"));
        assert!(output.contains("Warning: 1 imported prompt(s)"));
    }
}
