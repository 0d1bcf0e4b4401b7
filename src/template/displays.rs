//! Reference display variants.

use std::io::{self, Write};

use super::DisplaySteps;

/// Single-symbol variant: `<<` then the symbol five times then `>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharDisplay {
    ch: char,
}

impl CharDisplay {
    /// Create a display repeating `ch`.
    pub fn new(ch: char) -> Self {
        Self { ch }
    }

    /// The repeated symbol.
    pub fn symbol(&self) -> char {
        self.ch
    }
}

impl DisplaySteps for CharDisplay {
    fn after_open(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"<<")
    }

    fn emit(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.ch)
    }

    fn before_close(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b">>\n")
    }
}

/// Framed-text variant: the text in vertical bars between two rules.
///
/// The rule is `+`, one `-` per character of text, then `+`, so it is two
/// characters longer than the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringDisplay {
    text: String,
    width: usize,
}

impl StringDisplay {
    /// Create a display framing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        Self { text, width }
    }

    /// The framed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn print_line(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "+{}+", "-".repeat(self.width))
    }
}

impl DisplaySteps for StringDisplay {
    fn after_open(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }

    fn emit(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "|{}|", self.text)
    }

    fn before_close(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }
}
