//! Data models for Bookshelf

pub mod book;

pub use book::{seed_books, Book, LoanParams, SearchParams};
