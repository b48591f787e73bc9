//! Error types for the rental platform.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for rental platform operations.
pub type Result<T> = std::result::Result<T, RentalError>;

/// Errors that can occur during rental platform operations.
#[derive(Error, Debug)]
pub enum RentalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Item not found.")]
    ItemNotFound(u64),

    #[error("{0}")]
    Conflict(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for RentalError {
    fn into_response(self) -> Response {
        let status = match self {
            RentalError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RentalError::Validation(_) | RentalError::Conflict(_) => StatusCode::BAD_REQUEST,
            RentalError::ItemNotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
