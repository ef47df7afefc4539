//! Bundled starter library used when no saved data exists

use super::document::{Category, Document, Prompt};

/// Icons offered when creating a category
pub const COMMON_ICONS: [&str; 16] = [
    "📁", "📝", "💻", "🎨", "💼", "📚", "🔧", "💡", "🚀", "⭐", "🎯", "📊", "🌟", "🔥", "💎", "🏆",
];

pub const DEFAULT_ICON: &str = "📁";

pub fn default_document() -> Document {
    Document::new(
        vec![
            Category::new("1", "Writing", "✍️"),
            Category::new("2", "Programming", "💻"),
            Category::new("3", "Creative Design", "🎨"),
            Category::new("4", "Business & Office", "💼"),
            Category::new("5", "Learning", "📚"),
        ],
        vec![
            Prompt::new(
                "1",
                "Write an article about [topic]. Keep the structure clear and the language fluent, \
                 at roughly [word count] words.",
                "1",
            ),
            Prompt::new(
                "2",
                "Write an email about [subject] to [recipient]. The tone should be [formal/friendly].",
                "1",
            ),
            Prompt::new(
                "3",
                "Review the following code, point out potential problems and suggest improvements:\n\
                 [code]",
                "2",
            ),
            Prompt::new(
                "4",
                "Implement [feature description] in [programming language]. Requirements: \
                 [requirements].",
                "2",
            ),
            Prompt::new(
                "5",
                "Design the UI of a [page/component] for a [project type]. Style: [design style]. \
                 Target users: [audience].",
                "3",
            ),
            Prompt::new(
                "6",
                "Turn the following notes into proper meeting minutes:\n\
                 Time: [time]\nAttendees: [attendees]\nDiscussion: [content]",
                "4",
            ),
            Prompt::new(
                "7",
                "Explain [concept] in detail, covering definition, how it works, where it is used \
                 and concrete examples, in plain language.",
                "5",
            ),
        ],
    )
}
