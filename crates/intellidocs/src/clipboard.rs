use crate::prelude::{println, *};
use colored::Colorize;

/// Copy `content` to the system clipboard.
///
/// Clipboard access is best-effort: initialization can fail on headless
/// machines, and callers treat that as non-fatal.
pub fn copy_to_clipboard(content: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(content.to_owned())
}

/// Copy and confirm on success. Failure is logged, never surfaced.
pub fn copy_confirmed(content: &str) {
    match copy_to_clipboard(content) {
        Ok(()) => println!("{}", "Copied to clipboard.".green()),
        Err(err) => log::warn!("clipboard copy failed: {err}"),
    }
}
