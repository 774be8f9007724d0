use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};

use super::domain::InterviewSubmission;
use super::error::ScoringError;
use super::sample::example_submission;
use super::views::InterviewResult;
use super::ScoringEngine;

/// Router builder exposing the scoring contract.
pub fn scoring_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/process", post(process_handler))
        .route("/api/example", get(example_handler))
        .with_state(engine)
}

pub(crate) async fn process_handler(
    State(engine): State<Arc<ScoringEngine>>,
    payload: Result<Json<InterviewSubmission>, JsonRejection>,
) -> Result<Json<InterviewResult>, ScoringError> {
    let Json(submission) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected malformed interview record");
        ScoringError::MalformedInput(rejection.body_text())
    })?;

    match engine.process(&submission) {
        Ok(result) => {
            info!(
                candidate_id = %result.candidate_id,
                final_score = result.final_score,
                status = result.status.label(),
                "interview scored"
            );
            Ok(Json(result))
        }
        Err(err) => {
            warn!(candidate_id = %submission.candidate_id, error = %err, "interview rejected");
            Err(err)
        }
    }
}

pub(crate) async fn example_handler() -> Json<InterviewSubmission> {
    Json(example_submission())
}
