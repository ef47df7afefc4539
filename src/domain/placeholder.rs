//! `[placeholder]` markers inside prompt content

use regex::Regex;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[([^\[\]\n]+)\]").unwrap())
}

/// Distinct placeholder names in order of first appearance
pub fn placeholders(content: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for captures in placeholder_regex().captures_iter(content) {
        let name = captures[1].trim();
        if name.is_empty() || found.iter().any(|f| f == name) {
            continue;
        }
        found.push(name.to_string());
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order_and_deduplicates() {
        let content = "Write about [topic] for [audience], then revisit [topic].";
        assert_eq!(placeholders(content), vec!["topic", "audience"]);
    }

    #[test]
    fn ignores_empty_and_multiline_brackets() {
        assert!(placeholders("nothing [] here [ ]").is_empty());
        assert!(placeholders("open [bracket\nclosed]").is_empty());
    }

    #[test]
    fn keeps_slashes_and_spaces() {
        assert_eq!(
            placeholders("Tone: [formal/friendly], length: [word count]"),
            vec!["formal/friendly", "word count"]
        );
    }
}
