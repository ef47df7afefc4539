//! Clipboard integration for copying prompt content

use crate::error::{Result, ShelfError};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Something that can receive plain text
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, reached through `arboard`
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ShelfError::Config(format!("Clipboard unavailable: {}", e)))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ShelfError::Config(format!("Clipboard write failed: {}", e)))
    }
}

/// An external program that reads the text on stdin (pbcopy, xclip, ...)
pub struct CommandClipboard {
    command: String,
}

impl CommandClipboard {
    pub fn new(command: String) -> Self {
        CommandClipboard { command }
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> Option<(String, Vec<String>)> {
        let parts: Vec<&str> = self.command.split_whitespace().collect();
        let (program, args) = parts.split_first()?;
        Some((
            program.to_string(),
            args.iter().map(|s| s.to_string()).collect(),
        ))
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let (program, args) = self
            .parse_command()
            .ok_or_else(|| ShelfError::Config("Copy command is empty".to_string()))?;

        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ShelfError::Config(format!("Failed to launch copy command '{}': {}", program, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ShelfError::Config(format!(
                "Copy command '{}' exited with {}",
                program, status
            )))
        }
    }
}

/// Copy `text` to the clipboard, trying the platform's preferred sink first.
///
/// On Linux the selection set through `arboard` belongs to this process and
/// is dropped when it exits, so the copy command (xclip, wl-copy) goes first.
pub fn copy_to_clipboard(
    system: &mut dyn ClipboardSink,
    command: &mut dyn ClipboardSink,
    text: &str,
) -> bool {
    if command_first() {
        copy_with_fallback(command, system, text)
    } else {
        copy_with_fallback(system, command, text)
    }
}

fn command_first() -> bool {
    cfg!(target_os = "linux")
}

/// Try the primary sink, then the fallback. Reports success only.
pub fn copy_with_fallback(
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
    text: &str,
) -> bool {
    match primary.write_text(text) {
        Ok(()) => true,
        Err(primary_err) => {
            debug!(error = %primary_err, "clipboard write failed, trying fallback");
            match fallback.write_text(text) {
                Ok(()) => true,
                Err(fallback_err) => {
                    info!(error = %fallback_err, "fallback clipboard write failed");
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recording {
        fail: bool,
        written: Vec<String>,
    }

    impl Recording {
        fn new(fail: bool) -> Self {
            Recording {
                fail,
                written: Vec::new(),
            }
        }
    }

    impl ClipboardSink for Recording {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(ShelfError::Config("unavailable".to_string()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let mut primary = Recording::new(false);
        let mut fallback = Recording::new(false);

        assert!(copy_with_fallback(&mut primary, &mut fallback, "hello"));
        assert_eq!(primary.written, vec!["hello"]);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn test_fallback_used_when_primary_fails() {
        let mut primary = Recording::new(true);
        let mut fallback = Recording::new(false);

        assert!(copy_with_fallback(&mut primary, &mut fallback, "hello"));
        assert_eq!(fallback.written, vec!["hello"]);
    }

    #[test]
    fn test_both_failing_reports_false() {
        let mut primary = Recording::new(true);
        let mut fallback = Recording::new(true);

        assert!(!copy_with_fallback(&mut primary, &mut fallback, "hello"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_prefers_copy_command() {
        let mut system = Recording::new(false);
        let mut command = Recording::new(false);

        assert!(copy_to_clipboard(&mut system, &mut command, "hello"));
        assert_eq!(command.written, vec!["hello"]);
        assert!(system.written.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_falls_back_to_system_clipboard() {
        let mut system = Recording::new(false);
        let mut command = Recording::new(true);

        assert!(copy_to_clipboard(&mut system, &mut command, "hello"));
        assert_eq!(system.written, vec!["hello"]);
    }

    #[cfg(not(target_os = "linux"))]
    #[test]
    fn test_system_clipboard_goes_first() {
        let mut system = Recording::new(false);
        let mut command = Recording::new(false);

        assert!(copy_to_clipboard(&mut system, &mut command, "hello"));
        assert_eq!(system.written, vec!["hello"]);
        assert!(command.written.is_empty());
    }

    #[test]
    fn test_parse_command_with_args() {
        let clipboard = CommandClipboard::new("  xclip  -selection clipboard ".to_string());
        let (program, args) = clipboard.parse_command().unwrap();

        assert_eq!(program, "xclip");
        assert_eq!(args, vec!["-selection", "clipboard"]);
    }

    #[test]
    fn test_empty_command_fails() {
        let mut clipboard = CommandClipboard::new("   ".to_string());
        assert!(clipboard.parse_command().is_none());
        assert!(clipboard.write_text("x").is_err());
    }

    #[test]
    fn test_missing_program_fails() {
        let mut clipboard = CommandClipboard::new("promptshelf-no-such-copy-tool".to_string());
        assert!(clipboard.write_text("x").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_receives_text_on_stdin() {
        let temp = tempfile::TempDir::new().unwrap();
        let out = temp.path().join("copied.txt");
        let mut clipboard = CommandClipboard::new(format!("tee {}", out.display()));

        clipboard.write_text("Draft [topic]").unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "Draft [topic]");
    }
}
