use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure that crosses the HTTP boundary is one of these named
/// outcomes — no raw backend errors or stack traces leak to clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Legitimate empty-result outcome — the analysis ran but found nothing
    /// relevant. Distinct from `AnalysisFailed` so the UI can say "no matches"
    /// rather than "something went wrong".
    #[error("No strong matches found")]
    NoStrongMatch,

    /// The inference backend failed (timeout, refusal, or malformed output).
    /// The underlying cause is logged where it occurs, never returned here.
    #[error("Analysis failed")]
    AnalysisFailed,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NoStrongMatch => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_STRONG_MATCH",
                "The analysis could not find strong matches for this job description. Try another one."
                    .to_string(),
            ),
            AppError::AnalysisFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ANALYSIS_FAILED",
                "Failed to analyze the job description due to a server error. Please try again later."
                    .to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
