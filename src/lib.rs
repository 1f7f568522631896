//! Bookshelf
//!
//! A small REST JSON API over an in-memory catalog of books: CRUD, search,
//! availability listing, and checkout/return of copies.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state, seeding the catalog when the configuration asks for it
    pub fn new(config: AppConfig) -> Self {
        let books = if config.catalog.seed {
            models::seed_books()
        } else {
            Vec::new()
        };
        let repository = repository::Repository::new(books);

        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
