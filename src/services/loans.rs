//! Checkout and return of copies

use crate::{error::AppResult, models::book::Book, repository::Repository};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Take one copy of a book off the shelf
    pub fn checkout(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.checkout(id)?;
        tracing::info!("Checkout: id={} remaining={}", book.id, book.quantity);
        Ok(book)
    }

    /// Put one copy of a book back
    pub fn return_book(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.return_book(id)?;
        tracing::info!("Return: id={} remaining={}", book.id, book.quantity);
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::book::seed_books};

    #[test]
    fn test_checkout_scenario() {
        let repository = Repository::new(seed_books());
        let loans = LoansService::new(repository.clone());

        assert_eq!(loans.checkout("1").unwrap().quantity, 1);
        assert_eq!(loans.checkout("1").unwrap().quantity, 0);
        assert_eq!(loans.checkout("1"), Err(AppError::Unavailable));
        assert_eq!(repository.books.get_by_id("1").unwrap().quantity, 0);

        assert_eq!(loans.return_book("1").unwrap().quantity, 1);
    }
}
