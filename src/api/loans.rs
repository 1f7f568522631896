//! Checkout and return endpoints

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::book::{Book, LoanParams},
    AppState,
};

const MISSING_ID: &str = "Missing id query parameter.";

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "loans",
    params(LoanParams),
    responses(
        (status = 200, description = "Book with its decremented quantity", body = Book),
        (status = 400, description = "Missing id or no copy available", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<AppState>,
    params: LoanParams,
) -> AppResult<Json<Book>> {
    let id = params.id.ok_or(AppError::MissingParameter(MISSING_ID))?;

    let book = state.services.loans.checkout(&id)?;
    Ok(Json(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "loans",
    params(LoanParams),
    responses(
        (status = 200, description = "Book with its incremented quantity", body = Book),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    params: LoanParams,
) -> AppResult<Json<Book>> {
    let id = params.id.ok_or(AppError::MissingParameter(MISSING_ID))?;

    let book = state.services.loans.return_book(&id)?;
    Ok(Json(book))
}
