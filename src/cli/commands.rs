//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptshelf")]
#[command(about = "Personal prompt library", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new library
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show library location and counts
    Status,

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage prompts
    #[command(subcommand)]
    Prompt(PromptCommand),

    /// Export the whole library as pretty-printed JSON
    Export {
        /// Target file or directory (default: configured export_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a library file (merges by default)
    Import {
        /// JSON file produced by export
        file: PathBuf,

        /// Replace all local data instead of merging
        #[arg(long)]
        replace: bool,

        /// Confirm replacing local data
        #[arg(short, long)]
        yes: bool,

        /// File prompts of same-named categories under the local category
        #[arg(long, conflicts_with = "replace")]
        attach_to_existing: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// List categories with prompt counts
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,

        /// Icon (single emoji or symbol)
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Rename a category or change its icon
    Edit {
        /// Category id or name
        category: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Delete a category together with its prompts
    Delete {
        /// Category id or name
        category: String,

        /// Confirm deleting the prompts it holds
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the common icon choices
    Icons,
}

#[derive(Subcommand, Debug)]
pub enum PromptCommand {
    /// List prompts, grouped by category
    List {
        /// Only this category (id or name)
        #[arg(short, long, conflicts_with = "orphaned")]
        category: Option<String>,

        /// Only prompts whose category no longer exists
        #[arg(long)]
        orphaned: bool,
    },

    /// Add a prompt to a category
    Add {
        /// Category id or name
        category: String,

        /// Prompt text; [name] marks a placeholder
        content: String,
    },

    /// Change a prompt's text or category
    Edit {
        /// Prompt id
        id: String,

        #[arg(long)]
        content: Option<String>,

        /// New category id or name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a prompt
    Delete {
        /// Prompt id
        id: String,
    },

    /// Show a prompt with its placeholders
    Show {
        /// Prompt id
        id: String,
    },

    /// Copy a prompt's text to the clipboard
    Copy {
        /// Prompt id
        id: String,
    },
}
