//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    models::book::{LoanParams, SearchParams},
    AppState,
};

/// Create the application router with all routes.
///
/// `/books/available` and `/books/search` are static segments and always win
/// over `/books/:id`, whatever the registration order.
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books (catalog)
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/available", get(books::available_books))
        .route("/books/search", get(books::search_books))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Loans
        .route("/checkout", patch(loans::checkout_book))
        .route("/return", patch(loans::return_book))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// First value of `key` in the query string. Later repeats are ignored.
fn first_query_value(uri: &Uri, key: &str) -> Result<Option<String>, AppError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)?;
    Ok(pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v))
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for LoanParams {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(LoanParams {
            id: first_query_value(&parts.uri, "id")?,
        })
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SearchParams {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SearchParams {
            query: first_query_value(&parts.uri, "query")?,
        })
    }
}
