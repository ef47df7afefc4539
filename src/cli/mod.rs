//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{CategoryCommand, Cli, Commands, PromptCommand};
pub use output::{
    format_category_list, format_import_summary, format_prompt_detail, format_prompt_groups,
    format_status,
};
