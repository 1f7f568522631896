//! Error types for the Bookshelf server

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Book not found.")]
    NotFound,

    #[error("{0}")]
    MissingParameter(&'static str),

    #[error("Book not available.")]
    Unavailable,

    #[error("Invalid book payload: {0}")]
    MalformedInput(String),

    #[error("No books found.")]
    NoSearchResults,

    #[error("Book quantity limit reached.")]
    QuantityOverflow,

    #[error("{0}")]
    InvalidRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::NoSearchResults => StatusCode::NOT_FOUND,
            AppError::MissingParameter(_)
            | AppError::Unavailable
            | AppError::MalformedInput(_)
            | AppError::QuantityOverflow
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::MalformedInput(detail) => tracing::debug!("Rejected request body: {}", detail),
            AppError::InvalidRequest(detail) => tracing::debug!("Rejected request: {}", detail),
            _ => {}
        }

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NoSearchResults.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Unavailable.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::QuantityOverflow.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidRequest("Invalid URL".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingParameter("Missing search query.").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::NotFound.to_string(), "Book not found.");
        assert_eq!(AppError::Unavailable.to_string(), "Book not available.");
        assert_eq!(AppError::NoSearchResults.to_string(), "No books found.");
        assert_eq!(
            AppError::MissingParameter("Missing id query parameter.").to_string(),
            "Missing id query parameter."
        );
    }
}
