//! # Pattern Primer
//!
//! Three classic object-oriented patterns expressed with traits and small
//! concrete types instead of inheritance hierarchies.
//!
//! ## Components
//!
//! 1. **Iterator** ([`iterator`]): an append-only [`BookShelf`] hands out
//!    independent cursors driven through `has_next`/`next`. Cursors read the
//!    shelf's live backing store, so later appends are visible mid-traversal.
//! 2. **Template Method** ([`template`]): [`Display::run`] fixes a five-part
//!    skeleton (open, `after_open`, five `emit`s, `before_close`, close) and
//!    variants only supply the three hooks.
//! 3. **Adapter** ([`adapter`]): [`Banner`] presents [`PrintString`] through
//!    the [`PrintBanner`] interface.
//!
//! ## Usage Example
//!
//! ```
//! use pattern_primer::{Aggregate, BookShelf, CharDisplay, Cursor, Display};
//!
//! let mut shelf = BookShelf::new();
//! shelf.append("A");
//! shelf.append("B");
//!
//! let mut cursor = shelf.iterator();
//! while cursor.has_next() {
//!     println!("{}", cursor.next()?);
//! }
//!
//! let text = Display::new(CharDisplay::new('X')).render()?;
//! assert!(text.contains("<<XXXXX>>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod adapter;   // Banner adapter over a string printer
pub mod demo;      // Runners used by the binary
pub mod iterator;  // Shelf aggregate and cursors
pub mod template;  // Display skeleton and variants

// Re-exports for convenience
pub use adapter::{strong_format, weak_format, AdapterError, Banner, PrintBanner, PrintString};
pub use demo::{DemoConfig, DemoError};
pub use iterator::{Aggregate, Book, BookShelf, BookShelfIterator, Cursor, IterationError};
pub use template::{
    CharDisplay, Display, DisplayError, DisplaySteps, Step, StringDisplay, EMIT_REPETITIONS,
};
