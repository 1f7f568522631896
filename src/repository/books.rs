//! In-memory book storage.
//!
//! The catalog is a single ordered `Vec<Book>` behind a `RwLock`. Each
//! operation takes the guard once, so a read-modify-write such as checkout is
//! atomic with respect to other requests. Records are handed out as clones.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    // No guard is ever held across a panic site, so a poisoned lock still
    // protects a consistent list.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// All books in insertion order.
    pub fn list(&self) -> Vec<Book> {
        self.read().clone()
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// First book whose id equals `id`.
    pub fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.read()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    /// Books with at least one copy on the shelf.
    pub fn available(&self) -> Vec<Book> {
        self.read()
            .iter()
            .filter(|b| b.is_available())
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on title or author.
    pub fn search(&self, query: &str) -> Vec<Book> {
        let needle = query.to_lowercase();
        self.read()
            .iter()
            .filter(|b| b.matches(&needle))
            .cloned()
            .collect()
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    pub fn create(&self, book: Book) -> Book {
        self.write().push(book.clone());
        book
    }

    /// Replace the first book with `id`, keeping its position. The
    /// replacement may carry a different id.
    pub fn update(&self, id: &str, book: Book) -> AppResult<Book> {
        let mut books = self.write();
        let slot = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound)?;
        *slot = book.clone();
        Ok(book)
    }

    /// Remove the first book with `id`; the others keep their order.
    pub fn delete(&self, id: &str) -> AppResult<Book> {
        let mut books = self.write();
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(AppError::NotFound)?;
        Ok(books.remove(index))
    }

    /// Take one copy off the shelf. Fails without touching the record when
    /// none are left.
    pub fn checkout(&self, id: &str) -> AppResult<Book> {
        let mut books = self.write();
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound)?;
        if !book.is_available() {
            return Err(AppError::Unavailable);
        }
        book.quantity -= 1;
        Ok(book.clone())
    }

    /// Put one copy back. Only the integer range bounds the count.
    pub fn return_book(&self, id: &str) -> AppResult<Book> {
        let mut books = self.write();
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound)?;
        book.quantity = book
            .quantity
            .checked_add(1)
            .ok_or(AppError::QuantityOverflow)?;
        Ok(book.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::seed_books;

    fn seeded() -> BooksRepository {
        BooksRepository::new(seed_books())
    }

    #[test]
    fn test_get_first_match_wins() {
        let repo = seeded();
        repo.create(Book::new("1", "Shadow", "Nobody", 9));
        assert_eq!(repo.get_by_id("1").unwrap().title, "In Search of Lost Time");
        assert_eq!(repo.count(), 4);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let repo = seeded();
        let other = Book::new("9", "t", "a", 1);
        assert_eq!(repo.get_by_id("9"), Err(AppError::NotFound));
        assert_eq!(repo.checkout("9"), Err(AppError::NotFound));
        assert_eq!(repo.return_book("9"), Err(AppError::NotFound));
        assert_eq!(repo.delete("9"), Err(AppError::NotFound));
        assert_eq!(repo.update("9", other), Err(AppError::NotFound));
        assert_eq!(repo.list(), seed_books());
    }

    #[test]
    fn test_checkout_until_empty() {
        let repo = seeded();
        assert_eq!(repo.checkout("1").unwrap().quantity, 1);
        assert_eq!(repo.checkout("1").unwrap().quantity, 0);
        assert_eq!(repo.checkout("1"), Err(AppError::Unavailable));
        assert_eq!(repo.get_by_id("1").unwrap().quantity, 0);
    }

    #[test]
    fn test_checkout_negative_quantity_is_unavailable() {
        let repo = BooksRepository::new(vec![Book::new("n", "t", "a", -1)]);
        assert_eq!(repo.checkout("n"), Err(AppError::Unavailable));
        assert_eq!(repo.get_by_id("n").unwrap().quantity, -1);
    }

    #[test]
    fn test_return_increments() {
        let repo = seeded();
        assert_eq!(repo.return_book("2").unwrap().quantity, 6);
        assert_eq!(repo.return_book("2").unwrap().quantity, 7);
    }

    #[test]
    fn test_return_at_max_quantity_is_rejected() {
        let repo = BooksRepository::new(vec![Book::new("m", "t", "a", i64::MAX)]);
        assert_eq!(repo.return_book("m"), Err(AppError::QuantityOverflow));
        assert_eq!(repo.get_by_id("m").unwrap().quantity, i64::MAX);
        // Lock is still usable afterwards.
        assert_eq!(repo.checkout("m").unwrap().quantity, i64::MAX - 1);
    }

    #[test]
    fn test_delete_preserves_order() {
        let repo = seeded();
        let removed = repo.delete("2").unwrap();
        assert_eq!(removed.id, "2");
        let ids: Vec<String> = repo.list().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(repo.get_by_id("2"), Err(AppError::NotFound));
    }

    #[test]
    fn test_update_can_change_id() {
        let repo = seeded();
        let replacement = Book::new("20", "Tender Is the Night", "F. Scott Fitzgerald", 1);
        repo.update("2", replacement.clone()).unwrap();
        assert_eq!(repo.list()[1], replacement);
        assert_eq!(repo.get_by_id("2"), Err(AppError::NotFound));
    }

    #[test]
    fn test_available_filters_and_keeps_order() {
        let repo = seeded();
        repo.checkout("1").unwrap();
        repo.checkout("1").unwrap();
        let ids: Vec<String> = repo.available().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["2", "3"]);

        let empty = BooksRepository::new(vec![Book::new("z", "t", "a", 0)]);
        assert!(empty.available().is_empty());
    }

    #[test]
    fn test_search_case_insensitive() {
        let repo = seeded();
        let hits = repo.search("TOLSTOY");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
        assert_eq!(repo.search("the").len(), 1);
        assert!(repo.search("zzz").is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let repo = seeded();
        let handle = repo.clone();
        handle.checkout("3").unwrap();
        assert_eq!(repo.get_by_id("3").unwrap().quantity, 5);
    }

    #[test]
    fn test_concurrent_checkouts_never_oversell() {
        let repo = BooksRepository::new(vec![Book::new("c", "t", "a", 50)]);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                std::thread::spawn(move || (0..20).filter(|_| repo.checkout("c").is_ok()).count())
            })
            .collect();
        let served: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(served, 50);
        assert_eq!(repo.get_by_id("c").unwrap().quantity, 0);
    }
}
