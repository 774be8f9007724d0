use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Recommended difficulty movement for the next question. Advisory only: it
/// never changes the submitted sequence or the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyAdvice {
    Promote,
    Maintain,
    Demote,
}

pub fn advise(raw_score: f64, config: &ScoringConfig) -> DifficultyAdvice {
    if raw_score >= config.promote_threshold {
        DifficultyAdvice::Promote
    } else if raw_score < config.demote_threshold {
        DifficultyAdvice::Demote
    } else {
        DifficultyAdvice::Maintain
    }
}
