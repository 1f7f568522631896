//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Every book, in catalog order
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    pub fn count_books(&self) -> usize {
        self.repository.books.count()
    }

    /// Get book by ID
    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    /// Append a book. Duplicate ids are accepted; the earlier entry keeps
    /// answering lookups.
    pub fn create_book(&self, book: Book) -> Book {
        tracing::info!("Catalog create: id={} title={:?}", book.id, book.title);
        self.repository.books.create(book)
    }

    /// Replace every field of an existing book, id included
    pub fn update_book(&self, id: &str, book: Book) -> AppResult<Book> {
        let updated = self.repository.books.update(id, book)?;
        tracing::info!("Catalog update: id={} -> id={}", id, updated.id);
        Ok(updated)
    }

    /// Delete a book
    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        let removed = self.repository.books.delete(id)?;
        tracing::info!("Catalog delete: id={} title={:?}", removed.id, removed.title);
        Ok(())
    }

    /// Books with copies on the shelf. An empty list is not an error.
    pub fn available_books(&self) -> Vec<Book> {
        self.repository.books.available()
    }

    /// Search title and author. Unlike `available_books`, an empty result is
    /// reported as `NoSearchResults`.
    pub fn search_books(&self, query: &str) -> AppResult<Vec<Book>> {
        let results = self.repository.books.search(query);
        if results.is_empty() {
            return Err(AppError::NoSearchResults);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::seed_books;

    fn service() -> CatalogService {
        CatalogService::new(Repository::new(seed_books()))
    }

    #[test]
    fn test_create_then_get() {
        let catalog = service();
        let dune = Book::new("4", "Dune", "Frank Herbert", 3);
        assert_eq!(catalog.create_book(dune.clone()), dune);
        assert_eq!(catalog.list_books().len(), 4);
        assert_eq!(catalog.get_book("4").unwrap(), dune);
    }

    #[test]
    fn test_delete_then_get() {
        let catalog = service();
        catalog.delete_book("2").unwrap();
        assert_eq!(catalog.list_books().len(), 2);
        assert_eq!(catalog.get_book("2"), Err(AppError::NotFound));
        assert_eq!(catalog.delete_book("2"), Err(AppError::NotFound));
    }

    #[test]
    fn test_search_empty_is_error() {
        let catalog = service();
        assert_eq!(catalog.search_books("tolstoy").unwrap()[0].id, "3");
        assert_eq!(catalog.search_books("zzz"), Err(AppError::NoSearchResults));
    }

    #[test]
    fn test_available_empty_is_ok() {
        let catalog = CatalogService::new(Repository::default());
        assert!(catalog.available_books().is_empty());
    }
}
