//! Append-only book storage.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::{Book, BookShelfIterator, Cursor, IterationError};

/// Capability of producing a cursor over owned elements.
pub trait Aggregate {
    /// Element type yielded by the cursor.
    type Item;
    /// Cursor type bound to this aggregate.
    type Cursor: Cursor<Item = Self::Item>;

    /// Create a fresh cursor positioned at the first element.
    ///
    /// Has no effect on the aggregate; every call yields an independent cursor.
    fn iterator(&self) -> Self::Cursor;
}

/// Backing store shared between a shelf and all of its cursors.
///
/// Cursors hold a clone of the `Rc`, never a copy of the books, so the
/// length they observe is always the shelf's current length.
#[derive(Debug, Default, Clone)]
pub(crate) struct SharedBooks(Rc<RefCell<Vec<Book>>>);

impl SharedBooks {
    fn push(&self, book: Book) -> usize {
        let mut books = self.0.borrow_mut();
        books.push(book);
        books.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub(crate) fn get(&self, index: usize) -> Result<Book, IterationError> {
        let books = self.0.borrow();
        books
            .get(index)
            .cloned()
            .ok_or(IterationError::IndexOutOfRange {
                index,
                len: books.len(),
            })
    }
}

/// Ordered, append-only collection of books.
#[derive(Debug, Default)]
pub struct BookShelf {
    books: SharedBooks,
}

impl BookShelf {
    /// Create an empty shelf.
    pub fn new() -> Self {
        Self {
            books: SharedBooks::default(),
        }
    }

    /// Build a shelf by appending each title in order.
    pub fn from_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Book>,
    {
        let mut shelf = Self::new();
        shelf.extend(titles);
        shelf
    }

    /// Append a book at the end of the shelf.
    pub fn append(&mut self, book: impl Into<Book>) {
        let book = book.into();
        let len = self.books.push(book.clone());
        debug!(title = book.name(), len, "appended book to shelf");
    }

    /// Number of books appended so far.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Book at `index`, failing fast when `index >= len()`.
    pub fn book_at(&self, index: usize) -> Result<Book, IterationError> {
        self.books.get(index)
    }
}

impl Aggregate for BookShelf {
    type Item = Book;
    type Cursor = BookShelfIterator;

    fn iterator(&self) -> BookShelfIterator {
        debug!(len = self.len(), "created shelf iterator");
        BookShelfIterator::new(self.books.clone())
    }
}

impl<T: Into<Book>> Extend<T> for BookShelf {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for book in iter {
            self.append(book);
        }
    }
}

impl<T: Into<Book>> FromIterator<T> for BookShelf {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_titles(iter)
    }
}
