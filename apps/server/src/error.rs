use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contactbox_core::errors::{Error as CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Body returned for every storage-side failure.
pub const DATABASE_ERROR_MESSAGE: &str = "Database error.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Body could not be read at all, e.g. it exceeds the size limit.
    #[error("{0}")]
    Rejected(#[from] JsonRejection),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Core(err.into())
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Core(CoreError::Validation(e)) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Core(e) => {
                tracing::error!(error = %e, "Request failed in storage");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DATABASE_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use contactbox_core::errors::DatabaseError;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn validation_is_bad_request_with_fixed_message() {
        let (status, body) =
            render(ValidationError::MissingFields(vec!["email".to_string()]).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "All fields are required." }));
    }

    #[tokio::test]
    async fn storage_errors_hide_details() {
        let err = CoreError::Database(DatabaseError::QueryFailed("no such table: contacts".into()));
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Database error." }));
    }

    #[tokio::test]
    async fn unexpected_core_errors_are_server_errors() {
        let (status, _) = render(CoreError::Unexpected("boom".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
