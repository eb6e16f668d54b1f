use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

/// Tagged result of the explicit required-field validation step, distinct
/// from any store error so tests can tell the two apart.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field missing from the request body, or present but empty
    #[error("field `{0}` is required")]
    Required(&'static str),
}

#[derive(ThisError, Debug)]
pub enum Error {
    /// Request body failed required-field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Requested resource not found
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::NotFound { resource } => format!("{resource} not found"),
            Error::Database(DbError::NotFound) => "Resource not found".to_string(),
            // Validation and store failures share one client-facing message
            Error::Validation(_) | Error::Internal { .. } | Error::Database(_) | Error::Other(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Validation(_) => {
                tracing::warn!("Validation error: {}", self);
            }
            Error::NotFound { .. } | Error::Database(DbError::NotFound) => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = json!({ "error": self.user_message() });

        (status, axum::response::Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
