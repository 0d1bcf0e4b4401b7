//! Adapter: exposes an existing string printer through the banner interface.
//!
//! [`PrintString`] is the adaptee with its own vocabulary
//! (`show_with_paren`, `show_with_aster`). [`Banner`] adapts it to
//! [`PrintBanner`], which is what callers program against.

use std::io::{self, Write};

use thiserror::Error;
use tracing::trace;

/// Errors raised while printing a banner.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Output stream rejected the write.
    #[error("failed to print banner: {0}")]
    Io(#[from] io::Error),
}

/// Wrap `text` in parentheses.
pub fn weak_format(text: &str) -> String {
    format!("({text})")
}

/// Wrap `text` in asterisks.
pub fn strong_format(text: &str) -> String {
    format!("*{text}*")
}

/// The adaptee: prints one stored string in two decorations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintString {
    text: String,
}

impl PrintString {
    /// Store `text` for later printing.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Print `(text)` on its own line.
    pub fn show_with_paren(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", weak_format(&self.text))
    }

    /// Print `*text*` on its own line.
    pub fn show_with_aster(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", strong_format(&self.text))
    }
}

/// The target interface consumed by callers.
pub trait PrintBanner {
    /// Print `text` with weak emphasis.
    fn print_weak(&self, text: &str, out: &mut dyn Write) -> Result<(), AdapterError>;

    /// Print `text` with strong emphasis.
    fn print_strong(&self, text: &str, out: &mut dyn Write) -> Result<(), AdapterError>;
}

/// Adapter delegating each call to a fresh [`PrintString`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Banner;

impl Banner {
    /// Create the adapter.
    pub fn new() -> Self {
        Self
    }
}

impl PrintBanner for Banner {
    fn print_weak(&self, text: &str, out: &mut dyn Write) -> Result<(), AdapterError> {
        trace!(text, "weak banner");
        PrintString::new(text).show_with_paren(out)?;
        Ok(())
    }

    fn print_strong(&self, text: &str, out: &mut dyn Write) -> Result<(), AdapterError> {
        trace!(text, "strong banner");
        PrintString::new(text).show_with_aster(out)?;
        Ok(())
    }
}
