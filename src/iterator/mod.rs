//! Ordered, stateful traversal over a growable shelf of books.
//!
//! A [`BookShelf`] plays the aggregation role: it owns the books and hands
//! out cursors through [`Aggregate::iterator`]. Each [`BookShelfIterator`]
//! keeps its own position but reads the shelf's live backing store, so
//! books appended mid-traversal are still visited.

mod book;
mod cursor;
mod shelf;

pub use book::Book;
pub use cursor::{BookShelfIterator, Cursor, Items};
pub use shelf::{Aggregate, BookShelf};

use thiserror::Error;

/// Contract violations raised by shelves and their cursors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IterationError {
    /// Index lookup outside `[0, len)`.
    #[error("index {index} out of range for shelf of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Shelf length at the time of the lookup.
        len: usize,
    },

    /// `next()` called on a cursor with no remaining books.
    #[error("iterator exhausted at position {position}")]
    Exhausted {
        /// Cursor position when the call was made.
        position: usize,
    },
}
