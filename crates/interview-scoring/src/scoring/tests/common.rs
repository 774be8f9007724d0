use axum::response::Response;
use serde_json::Value;

use crate::scoring::{AttemptSubmission, InterviewSubmission, ScoringEngine};

pub(super) fn attempt(
    question_id: i64,
    difficulty: &str,
    time_taken: f64,
    max_time: f64,
    answer_quality: f64,
) -> AttemptSubmission {
    AttemptSubmission {
        question_id,
        difficulty: difficulty.to_string(),
        time_taken,
        max_time,
        answer_quality,
        interruptions: None,
    }
}

pub(super) fn submission(questions: Vec<AttemptSubmission>) -> InterviewSubmission {
    InterviewSubmission {
        candidate_id: "CAND-7".to_string(),
        role: "Platform Engineer".to_string(),
        questions,
    }
}

pub(super) fn strong_performer() -> InterviewSubmission {
    submission(vec![
        attempt(1, "medium", 45.0, 60.0, 0.95),
        attempt(2, "hard", 80.0, 120.0, 0.9),
        attempt(3, "hard", 90.0, 120.0, 1.0),
        attempt(4, "hard", 50.0, 120.0, 0.9),
    ])
}

pub(super) fn borderline() -> InterviewSubmission {
    submission(vec![
        attempt(1, "easy", 50.0, 60.0, 0.6),
        attempt(2, "medium", 70.0, 60.0, 0.5),
        attempt(3, "medium", 55.0, 60.0, 0.7),
    ])
}

pub(super) fn early_termination() -> InterviewSubmission {
    submission(vec![
        attempt(1, "easy", 30.0, 60.0, 0.2),
        attempt(2, "easy", 30.0, 60.0, 0.1),
        attempt(3, "easy", 30.0, 60.0, 0.1),
        attempt(4, "easy", 30.0, 60.0, 0.5),
    ])
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
