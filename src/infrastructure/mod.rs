//! Infrastructure layer - External I/O and persistence

pub mod clipboard;
pub mod config;
pub mod repository;

pub use clipboard::{
    copy_to_clipboard, copy_with_fallback, ClipboardSink, CommandClipboard, SystemClipboard,
};
pub use config::Config;
pub use repository::{export_file_name, FileSystemLibrary, LibraryRepository};
