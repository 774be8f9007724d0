use super::domain::AttemptInput;
use super::error::ScoringError;
use super::evaluator::QuestionEvaluation;
use super::views::{Metrics, Recommendation};

/// An attempt that made it through the pass before any halt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessedAttempt {
    pub attempt: AttemptInput,
    pub evaluation: QuestionEvaluation,
    pub adaptive_weight: f64,
}

impl ProcessedAttempt {
    pub fn weighted_score(&self) -> f64 {
        self.evaluation.net_score() * self.adaptive_weight
    }

    pub fn time_percentage(&self) -> f64 {
        self.attempt.time_taken / self.attempt.max_time * 100.0
    }

    /// Share of the time budget respected, capped at 1 so underuse earns nothing extra.
    fn time_efficiency(&self) -> f64 {
        if self.attempt.time_taken <= 0.0 {
            1.0
        } else {
            (self.attempt.max_time / self.attempt.time_taken).min(1.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub final_score: u8,
    pub recommendation: Recommendation,
    pub metrics: Metrics,
    pub average_time_percentage: f64,
    pub interruption_count: u32,
}

pub fn aggregate(processed: &[ProcessedAttempt]) -> Result<Aggregate, ScoringError> {
    if processed.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let count = processed.len() as f64;

    let weighted_total: f64 = processed.iter().map(ProcessedAttempt::weighted_score).sum();
    let attainable_total: f64 = processed
        .iter()
        .map(|entry| 100.0 * entry.adaptive_weight)
        .sum();
    let final_score = if attainable_total > 0.0 {
        to_percent(100.0 * weighted_total / attainable_total)
    } else {
        0
    };

    let raw_scores: Vec<f64> = processed
        .iter()
        .map(|entry| entry.evaluation.raw_score)
        .collect();
    let mean_raw = raw_scores.iter().sum::<f64>() / count;
    let variance = raw_scores
        .iter()
        .map(|score| (score - mean_raw).powi(2))
        .sum::<f64>()
        / count;

    let time_efficiency =
        100.0 * processed.iter().map(ProcessedAttempt::time_efficiency).sum::<f64>() / count;

    let metrics = Metrics {
        accuracy: to_percent(mean_raw),
        time_efficiency: to_percent(time_efficiency),
        consistency: to_percent(100.0 - variance.sqrt()),
    };

    let average_time_percentage = round_to(
        processed
            .iter()
            .map(|entry| entry.time_percentage() / count)
            .sum::<f64>(),
        1,
    );
    let interruption_count = processed
        .iter()
        .map(|entry| entry.attempt.interruptions)
        .fold(0u32, u32::saturating_add);

    Ok(Aggregate {
        final_score,
        recommendation: Recommendation::from_score(final_score),
        metrics,
        average_time_percentage,
        interruption_count,
    })
}

fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}
