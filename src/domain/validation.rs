//! Shape check for imported library files

use super::document::Document;
use crate::error::{Result, ShelfError};
use serde_json::Value;

const CATEGORY_FIELDS: [&str; 3] = ["id", "name", "icon"];
const PROMPT_FIELDS: [&str; 3] = ["id", "content", "categoryId"];

/// Accept only an object whose `categories` and `prompts` are arrays of
/// objects carrying the required non-empty string fields.
pub fn is_valid_import(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };

    let (Some(categories), Some(prompts)) = (
        object.get("categories").and_then(Value::as_array),
        object.get("prompts").and_then(Value::as_array),
    ) else {
        return false;
    };

    categories
        .iter()
        .all(|c| has_non_empty_fields(c, &CATEGORY_FIELDS))
        && prompts
            .iter()
            .all(|p| has_non_empty_fields(p, &PROMPT_FIELDS))
}

fn has_non_empty_fields(item: &Value, fields: &[&str]) -> bool {
    fields.iter().all(|field| {
        item.get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    })
}

/// Parse import text into a document, rejecting anything the validator refuses.
pub fn parse_import(text: &str) -> Result<Document> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ShelfError::ImportParse(e.to_string()))?;

    if !is_valid_import(&value) {
        return Err(ShelfError::ImportFormat);
    }

    serde_json::from_value(value).map_err(|_| ShelfError::ImportFormat)
}
