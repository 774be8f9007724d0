use super::weights::DifficultyWeights;
use serde::{Deserialize, Serialize};

/// Constants driving penalties, advice, termination and weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Raw scores strictly below this count toward the termination streak.
    pub low_score_threshold: f64,
    pub termination_streak: u8,
    pub promote_threshold: f64,
    pub demote_threshold: f64,
    pub max_time_penalty: f64,
    pub interruption_penalty: f64,
    /// Net score a question needs to be echoed as `Passed`.
    pub pass_threshold: f64,
    pub weights: DifficultyWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            low_score_threshold: 30.0,
            termination_streak: 3,
            promote_threshold: 85.0,
            demote_threshold: 50.0,
            max_time_penalty: 20.0,
            interruption_penalty: 5.0,
            pass_threshold: 40.0,
            weights: DifficultyWeights::default(),
        }
    }
}
