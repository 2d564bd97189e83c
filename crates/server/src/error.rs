use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_model::FilmId;
use serde_json::json;
use sources::FetchError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the form `{"error": ..., "code": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The upstream catalog could not be fetched.
    #[error(transparent)]
    Upstream(#[from] FetchError),

    /// No film with this id.
    #[error("Film with id {0} not found")]
    FilmNotFound(FilmId),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream catalog error");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The film catalog is currently unavailable".to_string(),
                )
            }
            AppError::FilmNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
