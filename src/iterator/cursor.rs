//! Cursor protocol and the shelf cursor.

use tracing::trace;

use super::shelf::SharedBooks;
use super::{Book, IterationError};

/// Explicit `has_next`/`next` traversal protocol.
pub trait Cursor {
    /// Element type yielded by [`Cursor::next`].
    type Item;

    /// Whether another element is available, re-evaluated on every call.
    fn has_next(&self) -> bool;

    /// Return the current element and move forward by one.
    ///
    /// Fails with [`IterationError::Exhausted`] when `has_next()` is false;
    /// the position is left untouched in that case.
    fn next(&mut self) -> Result<Self::Item, IterationError>;

    /// Bridge into a standard [`Iterator`] that stops once `has_next()` is false.
    fn into_items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items { cursor: self }
    }
}

/// Standard iterator over the remaining elements of a [`Cursor`].
#[derive(Debug)]
pub struct Items<C> {
    cursor: C,
}

impl<C> Items<C> {
    /// Recover the underlying cursor, keeping its position.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Items<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_next() {
            return None;
        }
        match self.cursor.next() {
            Ok(item) => Some(item),
            Err(err) => {
                if cfg!(debug_assertions) {
                    panic!("cursor failed after has_next: {err}");
                }
                None
            }
        }
    }
}

/// Forward-only cursor over a [`BookShelf`](super::BookShelf).
///
/// Invariant: `0 <= position <= shelf.len()`.
#[derive(Debug)]
pub struct BookShelfIterator {
    books: SharedBooks,
    position: usize,
}

impl BookShelfIterator {
    pub(crate) fn new(books: SharedBooks) -> Self {
        Self { books, position: 0 }
    }

    /// Number of books already yielded.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Cursor for BookShelfIterator {
    type Item = Book;

    fn has_next(&self) -> bool {
        self.position < self.books.len()
    }

    fn next(&mut self) -> Result<Book, IterationError> {
        if !self.has_next() {
            return Err(IterationError::Exhausted {
                position: self.position,
            });
        }
        let book = self.books.get(self.position)?;
        trace!(position = self.position, title = book.name(), "cursor advanced");
        self.position += 1;
        Ok(book)
    }
}
