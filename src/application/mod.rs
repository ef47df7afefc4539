//! Application layer - Use cases and orchestration

pub mod categories;
pub mod init;
pub mod manage_config;
pub mod prompts;
pub mod status;
pub mod store;
pub mod transfer;

pub use categories::{add_category, delete_category, edit_category, list_categories, CategorySummary};
pub use manage_config::ConfigService;
pub use prompts::{
    add_prompt, copy_prompt, delete_prompt, edit_prompt, find_prompt, list_prompts, PromptGroup,
    PromptScope,
};
pub use status::{library_status, LibraryStatus};
pub use store::PromptStore;
pub use transfer::{export_library, import_document, import_file, ImportMode, ImportSummary};
