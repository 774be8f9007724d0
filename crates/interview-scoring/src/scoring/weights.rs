use super::domain::Difficulty;
use serde::{Deserialize, Serialize};

/// Multipliers applied to each difficulty tier during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyWeights {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl DifficultyWeights {
    pub fn weight_for(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            easy: 0.8,
            medium: 1.0,
            hard: 1.3,
        }
    }
}
