//! Error types for the companies API
//!
//! Two layers: `StoreError` for anything the persistence layer reports, and
//! `ApiError` for what a handler returns. The HTTP status is decided once,
//! in `ApiError::into_response`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failures surfaced by a `CompanyStore`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Anything sqlx reports: connectivity, constraint violations, syntax
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Primary key collision
    #[error("duplicate key value violates unique constraint \"companies_pkey\"")]
    UniqueViolation,

    /// A required column was bound to NULL
    #[error("null value in column \"{0}\" of relation \"companies\" violates not-null constraint")]
    NotNullViolation(&'static str),
}

// == API Error Enum ==
/// Error type returned by every request handler.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The statement matched no row for this code
    #[error("No such company: {0}")]
    NotFound(String),

    /// The request was turned away before reaching the store
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Persistence failure the handlers do not inspect
    #[error(transparent)]
    Unclassified(#[from] StoreError),
}

impl ApiError {
    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::Unclassified(cause) = &self {
            error!(error = %cause, "Unhandled persistence failure");
        }

        let body = Json(ErrorResponse::new(self.to_string(), status));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_embeds_code() {
        let err = ApiError::NotFound("ibm".to_string());
        assert_eq!(err.to_string(), "No such company: ibm");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_errors_are_internal() {
        let err: ApiError = StoreError::UniqueViolation.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("companies_pkey"));
    }

    #[test]
    fn test_not_null_message_names_column() {
        let err = StoreError::NotNullViolation("name");
        assert!(err.to_string().contains("\"name\""));
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::NotFound("acme".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["message"], "No such company: acme");
        assert_eq!(json["error"]["status"], 404);
    }
}
