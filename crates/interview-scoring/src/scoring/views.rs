use super::domain::Difficulty;
use super::state_log::StateLogEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "strong hire")]
    StrongHire,
    #[serde(rename = "hire")]
    Hire,
    #[serde(rename = "borderline")]
    Borderline,
    #[serde(rename = "no hire")]
    NoHire,
}

impl Recommendation {
    pub fn from_score(final_score: u8) -> Self {
        match final_score {
            85..=u8::MAX => Self::StrongHire,
            70..=84 => Self::Hire,
            50..=69 => Self::Borderline,
            _ => Self::NoHire,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongHire => "strong hire",
            Self::Hire => "hire",
            Self::Borderline => "borderline",
            Self::NoHire => "no hire",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Completed,
    Terminated,
}

impl SessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Terminated => "Terminated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub accuracy: u8,
    pub time_efficiency: u8,
    pub consistency: u8,
}

/// Echo of a processed attempt, decorated for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOutcomeView {
    pub question_id: i64,
    pub difficulty: Difficulty,
    pub time_taken: f64,
    pub max_time: f64,
    pub answer_quality: f64,
    pub interruptions: u32,
    pub score_percentage: f64,
    pub status: QuestionStatus,
    pub time_limit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdownEntry {
    pub q_id: i64,
    pub raw_score: f64,
    pub time_penalty: f64,
    pub interruption_penalty: f64,
    pub adaptive_weight: f64,
    pub weighted_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub attempted_questions: usize,
    pub total_questions: usize,
    pub average_time_percentage: f64,
    pub interruption_count: u32,
    pub early_termination: bool,
    pub termination_reason: Option<String>,
}

/// Complete engine output for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewResult {
    pub final_score: u8,
    pub recommendation: Recommendation,
    pub status: SessionStatus,
    pub termination_reason: Option<String>,
    pub interview_id: String,
    pub candidate_id: String,
    pub role: String,
    pub metrics: Metrics,
    pub questions: Vec<QuestionOutcomeView>,
    pub score_breakdown: Vec<ScoreBreakdownEntry>,
    pub state_log: Vec<StateLogEntry>,
    pub performance_summary: PerformanceSummary,
}
