//! Repository layer for catalog storage

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding the catalog stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository holding `books`
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(books),
        }
    }
}
