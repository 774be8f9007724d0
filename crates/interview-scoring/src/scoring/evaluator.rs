use super::config::ScoringConfig;
use super::domain::AttemptInput;

/// Raw score and penalties for a single attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionEvaluation {
    pub raw_score: f64,
    pub time_penalty: f64,
    pub interruption_penalty: f64,
}

impl QuestionEvaluation {
    /// Raw score after penalties, floored at zero.
    pub fn net_score(&self) -> f64 {
        (self.raw_score - self.time_penalty - self.interruption_penalty).max(0.0)
    }
}

pub fn evaluate(attempt: &AttemptInput, config: &ScoringConfig) -> QuestionEvaluation {
    let raw_score = attempt.answer_quality * 100.0;

    // Overage is proportional to the budget and capped so a runaway clock alone
    // cannot zero the question.
    let time_penalty = if attempt.time_taken <= attempt.max_time {
        0.0
    } else {
        let overage = (attempt.time_taken - attempt.max_time) / attempt.max_time;
        (overage * config.max_time_penalty).min(config.max_time_penalty)
    };

    let interruption_penalty = f64::from(attempt.interruptions) * config.interruption_penalty;

    QuestionEvaluation {
        raw_score,
        time_penalty,
        interruption_penalty,
    }
}
