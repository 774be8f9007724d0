use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failures raised while scoring a single submission. None of them are retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("malformed interview record: {0}")]
    MalformedInput(String),
    #[error("question {question_id}: {field} {reason}")]
    Validation {
        question_id: i64,
        field: &'static str,
        reason: String,
    },
    #[error("no question attempts to score; submit at least one attempt")]
    EmptyInput,
}

impl ScoringError {
    pub(crate) fn validation(question_id: i64, field: &'static str, reason: String) -> Self {
        Self::Validation {
            question_id,
            field,
            reason,
        }
    }
}

impl IntoResponse for ScoringError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
