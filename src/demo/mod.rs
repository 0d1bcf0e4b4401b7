//! Runners wiring each pattern to an output stream.

mod config;

pub use config::{DemoConfig, DEFAULT_TITLES};

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

use crate::adapter::{AdapterError, Banner, PrintBanner};
use crate::iterator::{Aggregate, BookShelf, Cursor, IterationError};
use crate::template::{CharDisplay, Display, DisplayError, DisplaySteps, StringDisplay};

/// Any failure surfaced by a demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Shelf traversal violated its contract.
    #[error(transparent)]
    Iteration(#[from] IterationError),
    /// A display step failed.
    #[error(transparent)]
    Display(#[from] DisplayError),
    /// The banner could not be printed.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    /// Writing demo output failed.
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),
}

/// Shelve the configured titles and print one per line in traversal order.
pub fn run_iterator<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    info!(books = config.titles.len(), "running iterator demo");
    let shelf = BookShelf::from_titles(config.titles.iter().map(String::as_str));

    let mut cursor = shelf.iterator();
    while cursor.has_next() {
        let book = cursor.next()?;
        writeln!(out, "{book}")?;
    }
    Ok(())
}

/// Run the char display, then the string display.
pub fn run_template<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    info!(symbol = %config.symbol, text = %config.text, "running template demo");
    let displays: [Box<dyn DisplaySteps>; 2] = [
        Box::new(CharDisplay::new(config.symbol)),
        Box::new(StringDisplay::new(config.text.as_str())),
    ];
    for steps in displays {
        Display::new(steps).run(out)?;
    }
    Ok(())
}

/// Print the strong banner, then the weak one.
pub fn run_adapter<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    info!("running adapter demo");
    let banner = Banner::new();
    banner.print_strong(&config.banner_strong, out)?;
    banner.print_weak(&config.banner_weak, out)?;
    Ok(())
}

/// Run the iterator, template and adapter demos in that order.
pub fn run_all<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    run_iterator(config, out)?;
    run_template(config, out)?;
    run_adapter(config, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(run: impl FnOnce(&mut Vec<u8>) -> Result<(), DemoError>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_iterator_demo_prints_titles() {
        let config = DemoConfig::default().with_titles(["A", "B", "C"]);
        let output = capture(|out| run_iterator(&config, out));
        assert_eq!(output, "A\nB\nC\n");
    }

    #[test]
    fn test_iterator_demo_with_no_titles() {
        let config = DemoConfig::default().with_titles(Vec::<String>::new());
        assert_eq!(capture(|out| run_iterator(&config, out)), "");
    }

    #[test]
    fn test_adapter_demo_defaults() {
        let config = DemoConfig::default();
        let output = capture(|out| run_adapter(&config, out));
        assert_eq!(output, "*HELLO!*\n(bye...)\n");
    }

    #[test]
    fn test_template_demo_runs_both_displays() {
        let config = DemoConfig::default().with_symbol('X').with_text("ab");
        let output = capture(|out| run_template(&config, out));
        assert_eq!(output.matches("Opening Display...").count(), 2);
        assert_eq!(output.matches("Goodbye!").count(), 2);
        assert!(output.contains("<<XXXXX>>\n"));
        assert!(output.contains("+--+\n|ab|\n"));
    }
}
