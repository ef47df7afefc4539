//! Domain layer - Library model and reconciliation rules

pub mod document;
pub mod ids;
pub mod merge;
pub mod placeholder;
pub mod seed;
pub mod validation;

pub use document::{Category, Document, Prompt};
pub use ids::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use merge::{merge_documents, MergeOutcome, MergePolicy, MergeReport};
pub use placeholder::placeholders;
pub use seed::{default_document, COMMON_ICONS, DEFAULT_ICON};
pub use validation::{is_valid_import, parse_import};
