use super::error::ScoringError;
use serde::{Deserialize, Serialize};

/// Difficulty tier of a submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Case-insensitive parse of the wire value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Request body for `POST /api/process`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSubmission {
    pub candidate_id: String,
    pub role: String,
    pub questions: Vec<AttemptSubmission>,
}

/// One question attempt exactly as submitted. Fields are checked by
/// [`AttemptInput::from_submission`] before anything is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptSubmission {
    pub question_id: i64,
    pub difficulty: String,
    pub time_taken: f64,
    pub max_time: f64,
    pub answer_quality: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interruptions: Option<i64>,
}

/// Tolerance for float noise around the `[0, 1]` quality bounds.
const QUALITY_TOLERANCE: f64 = 1e-9;

/// A validated attempt ready for evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptInput {
    pub question_id: i64,
    pub difficulty: Difficulty,
    pub time_taken: f64,
    pub max_time: f64,
    pub answer_quality: f64,
    pub interruptions: u32,
}

impl AttemptInput {
    pub fn from_submission(submission: &AttemptSubmission) -> Result<Self, ScoringError> {
        let question_id = submission.question_id;

        let difficulty = Difficulty::parse(&submission.difficulty).ok_or_else(|| {
            ScoringError::validation(
                question_id,
                "difficulty",
                format!(
                    "'{}' is not one of easy, medium, hard",
                    submission.difficulty
                ),
            )
        })?;

        if !submission.time_taken.is_finite() || submission.time_taken < 0.0 {
            return Err(ScoringError::validation(
                question_id,
                "time_taken",
                format!("{} must be a non-negative number", submission.time_taken),
            ));
        }

        if !submission.max_time.is_finite() || submission.max_time <= 0.0 {
            return Err(ScoringError::validation(
                question_id,
                "max_time",
                format!("{} must be greater than zero", submission.max_time),
            ));
        }

        if !(submission.time_taken / submission.max_time * 100.0).is_finite() {
            return Err(ScoringError::validation(
                question_id,
                "time_taken",
                format!(
                    "{} is out of range for a max_time of {}",
                    submission.time_taken, submission.max_time
                ),
            ));
        }

        let quality = submission.answer_quality;
        if !quality.is_finite()
            || quality < -QUALITY_TOLERANCE
            || quality > 1.0 + QUALITY_TOLERANCE
        {
            return Err(ScoringError::validation(
                question_id,
                "answer_quality",
                format!("{quality} is outside [0, 1]"),
            ));
        }

        let interruptions = match submission.interruptions {
            None => 0,
            Some(count) => u32::try_from(count).map_err(|_| {
                ScoringError::validation(
                    question_id,
                    "interruptions",
                    format!("{count} must be a non-negative count"),
                )
            })?,
        };

        Ok(Self {
            question_id,
            difficulty,
            time_taken: submission.time_taken,
            max_time: submission.max_time,
            answer_quality: quality.clamp(0.0, 1.0),
            interruptions,
        })
    }
}
