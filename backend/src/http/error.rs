//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ApiResponse;
use crate::db::repository::RepositoryError;

pub const INVALID_ID: &str = "Invalid movie ID";
pub const INVALID_BODY: &str = "Invalid request body";
pub const NOT_FOUND: &str = "Movie not found";
pub const ID_CONFLICT: &str = "Movie with updated ID already exists";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (bad path parameter)
    BadRequest(String),
    /// Request body could not be decoded or failed validation
    InvalidBody(String),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiResponse<()>) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiResponse::failure(msg, None)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(msg, None))
            }
            AppError::InvalidBody(details) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure(INVALID_BODY, Some(details)),
            ),
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, ApiResponse::failure(NOT_FOUND, None))
                }
                RepositoryError::ValidationError { ref message, .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::failure(INVALID_BODY, Some(message.clone())),
                ),
                RepositoryError::Conflict { ref message, .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::failure(ID_CONFLICT, Some(message.clone())),
                ),
                RepositoryError::ConfigurationError { .. }
                | RepositoryError::InternalError { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure("Internal server error", Some(e.to_string())),
                ),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!(status = %status, error = ?body.error, "request failed");
        } else {
            tracing::debug!(status = %status, message = %body.message, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::ErrorContext;

    #[test]
    fn test_repository_errors_map_by_kind() {
        let cases = [
            (RepositoryError::not_found("x"), StatusCode::NOT_FOUND, NOT_FOUND),
            (RepositoryError::validation("x"), StatusCode::BAD_REQUEST, INVALID_BODY),
            (RepositoryError::conflict("x"), StatusCode::BAD_REQUEST, ID_CONFLICT),
            (
                RepositoryError::internal("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ),
        ];

        for (err, status, message) in cases {
            let (got_status, body) = AppError::from(err).status_and_body();
            assert_eq!(got_status, status);
            assert_eq!(body.message, message);
            assert!(!body.success);
        }
    }

    #[test]
    fn test_not_found_message_text_is_irrelevant() {
        // Mapping must not depend on the wording of the message.
        let err = RepositoryError::validation_with_context(
            "title not found in payload",
            ErrorContext::default().with_details("title"),
        );
        let (status, _) = AppError::from(err).status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_has_no_detail() {
        let (status, body) = AppError::BadRequest(INVALID_ID.to_string()).status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, INVALID_ID);
        assert!(body.error.is_none());
    }
}
