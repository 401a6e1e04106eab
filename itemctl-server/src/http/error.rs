//! API error types with IntoResponse
//!
//! Every error body is `{"error": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing (400)
    Validation(ValidationError),

    /// Storage failure (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Database(DbError::Write { op, .. }) => format!("failed to {}", op),
            Self::Database(DbError::Sqlx(_)) => "internal error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            // Log the actual error, return generic message
            tracing::error!("Database error: {}", e);
        }

        let status = self.status();
        let body = json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
