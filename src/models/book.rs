//! Book model and the query parameters that address books.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A catalog entry.
///
/// `id` is supplied by the caller and is not checked for uniqueness; lookups
/// resolve to the first entry carrying a given id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-supplied identifier
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "War and Peace")]
    pub title: String,
    #[schema(example = "Leo Tolstoy")]
    pub author: String,
    /// Copies on the shelf
    #[schema(example = 6)]
    pub quantity: i64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// Books present when the server starts.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "In Search of Lost Time", "Marcel Proust", 2),
        Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
        Book::new("3", "War and Peace", "Leo Tolstoy", 6),
    ]
}

/// Query string for checkout and return. A repeated parameter resolves to
/// its first value.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoanParams {
    /// Book ID
    pub id: Option<String>,
}

/// Query string for search
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive text matched against title and author
    pub query: Option<String>,
}
