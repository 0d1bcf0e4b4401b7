use std::fmt;
use std::sync::Arc;

/// A single titled record stored on a shelf.
///
/// Immutable once created; cloning shares the title buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    name: Arc<str>,
}

impl Book {
    /// Create a book with the given title.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// Title of the book.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Book {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Book {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_title() {
        let book = Book::new("Clean Code");
        assert_eq!(book.name(), "Clean Code");
        assert_eq!(book.to_string(), "Clean Code");
    }

    #[test]
    fn test_conversions_agree() {
        assert_eq!(Book::from("월든"), Book::from(String::from("월든")));
    }
}
