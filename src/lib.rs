//! promptshelf - Personal prompt library
//!
//! A command-line manager for reusable prompt snippets organized into
//! categories, stored as a single JSON document with export, replace-import
//! and merge-import.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::ShelfError;
