//! Error handling for the HTTP API

use crate::calc::CalcError;
use crate::server::models::ApiResponse;
use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Server-specific errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Empty expression")]
    EmptyExpression,

    #[error("{0}")]
    Calc(#[from] CalcError),

    #[error("Invalid request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Every failure a client can trigger is a bad request; the remaining
        // variants only occur before the server accepts connections.
        let status = match self {
            ServerError::EmptyExpression | ServerError::Calc(_) | ServerError::Body(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::InvalidOrigin(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
