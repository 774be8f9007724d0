use super::domain::{AttemptSubmission, InterviewSubmission};

/// Canned request served by `GET /api/example` to pre-fill clients.
pub fn example_submission() -> InterviewSubmission {
    let attempt = |question_id, difficulty: &str, time_taken, max_time, answer_quality| {
        AttemptSubmission {
            question_id,
            difficulty: difficulty.to_string(),
            time_taken,
            max_time,
            answer_quality,
            interruptions: None,
        }
    };

    InterviewSubmission {
        candidate_id: "CAND-1042".to_string(),
        role: "Backend Engineer".to_string(),
        questions: vec![
            attempt(1, "medium", 45.0, 60.0, 0.95),
            attempt(2, "hard", 80.0, 120.0, 0.9),
            attempt(3, "hard", 90.0, 120.0, 1.0),
            attempt(4, "hard", 50.0, 120.0, 0.9),
        ],
    }
}
