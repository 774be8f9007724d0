//! Adaptive scoring and termination engine.
//!
//! One pass over the submitted attempts runs evaluator, advisor, termination
//! monitor and weight lookup per attempt, recording the timeline as it goes. The
//! aggregator then reduces whatever was processed into the final result.

mod advisor;
mod aggregate;
mod config;
mod domain;
mod error;
mod evaluator;
pub mod router;
mod sample;
mod state_log;
mod termination;
mod views;
mod weights;

#[cfg(test)]
mod tests;

pub use advisor::{advise, DifficultyAdvice};
pub use aggregate::{aggregate, Aggregate, ProcessedAttempt};
pub use config::ScoringConfig;
pub use domain::{AttemptInput, AttemptSubmission, Difficulty, InterviewSubmission};
pub use error::ScoringError;
pub use evaluator::{evaluate, QuestionEvaluation};
pub use router::scoring_router;
pub use sample::example_submission;
pub use state_log::{StateLogEntry, StateLogRecorder, TimelineState};
pub use termination::{termination_reason, MonitorState, TerminationMonitor};
pub use views::{
    InterviewResult, Metrics, PerformanceSummary, QuestionOutcomeView, QuestionStatus,
    Recommendation, ScoreBreakdownEntry, SessionStatus,
};
pub use weights::DifficultyWeights;

use aggregate::round_to;
use tracing::{debug, info};

/// Stateless engine applying a [`ScoringConfig`] to one submission at a time.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Parse a raw JSON request body and score it.
    pub fn process_json(&self, body: &str) -> Result<InterviewResult, ScoringError> {
        let submission: InterviewSubmission = serde_json::from_str(body)
            .map_err(|err| ScoringError::MalformedInput(err.to_string()))?;
        self.process(&submission)
    }

    pub fn process(
        &self,
        submission: &InterviewSubmission,
    ) -> Result<InterviewResult, ScoringError> {
        let attempts = submission
            .questions
            .iter()
            .map(AttemptInput::from_submission)
            .collect::<Result<Vec<_>, _>>()?;

        let mut monitor = TerminationMonitor::new(&self.config);
        let mut timeline = StateLogRecorder::default();
        let mut processed = Vec::with_capacity(attempts.len());

        for attempt in attempts {
            let evaluation = evaluate(&attempt, &self.config);
            let advice = advise(evaluation.raw_score, &self.config);
            let state = monitor.observe(evaluation.raw_score);
            let adaptive_weight = self.config.weights.weight_for(attempt.difficulty);

            debug!(
                question_id = attempt.question_id,
                raw_score = evaluation.raw_score,
                ?advice,
                ?state,
                "attempt evaluated"
            );

            timeline.record_advice(attempt.question_id, advice, adaptive_weight);
            processed.push(ProcessedAttempt {
                attempt,
                evaluation,
                adaptive_weight,
            });

            if state.is_terminated() {
                timeline.record_termination(attempt.question_id, adaptive_weight);
                break;
            }
        }

        let summary = aggregate(&processed)?;
        let terminated = monitor.state().is_terminated();
        let termination_reason = terminated.then(|| termination_reason(&self.config));

        if terminated {
            info!(
                candidate_id = %submission.candidate_id,
                attempted = processed.len(),
                total = submission.questions.len(),
                "assessment halted early"
            );
        }

        Ok(InterviewResult {
            final_score: summary.final_score,
            recommendation: summary.recommendation,
            status: if terminated {
                SessionStatus::Terminated
            } else {
                SessionStatus::Completed
            },
            termination_reason: termination_reason.clone(),
            interview_id: submission.candidate_id.clone(),
            candidate_id: submission.candidate_id.clone(),
            role: submission.role.clone(),
            metrics: summary.metrics,
            questions: processed
                .iter()
                .map(|entry| self.question_view(entry))
                .collect(),
            score_breakdown: processed.iter().map(breakdown_entry).collect(),
            state_log: timeline.into_entries(),
            performance_summary: PerformanceSummary {
                attempted_questions: processed.len(),
                total_questions: submission.questions.len(),
                average_time_percentage: summary.average_time_percentage,
                interruption_count: summary.interruption_count,
                early_termination: terminated,
                termination_reason,
            },
        })
    }

    fn question_view(&self, entry: &ProcessedAttempt) -> QuestionOutcomeView {
        let score_percentage = round_to(entry.evaluation.net_score(), 1);
        let status = if score_percentage >= self.config.pass_threshold {
            QuestionStatus::Passed
        } else {
            QuestionStatus::Failed
        };

        QuestionOutcomeView {
            question_id: entry.attempt.question_id,
            difficulty: entry.attempt.difficulty,
            time_taken: entry.attempt.time_taken,
            max_time: entry.attempt.max_time,
            answer_quality: entry.attempt.answer_quality,
            interruptions: entry.attempt.interruptions,
            score_percentage,
            status,
            time_limit: entry.attempt.max_time,
        }
    }
}

fn breakdown_entry(entry: &ProcessedAttempt) -> ScoreBreakdownEntry {
    ScoreBreakdownEntry {
        q_id: entry.attempt.question_id,
        raw_score: round_to(entry.evaluation.raw_score, 2),
        time_penalty: round_to(entry.evaluation.time_penalty, 2),
        interruption_penalty: round_to(entry.evaluation.interruption_penalty, 2),
        adaptive_weight: entry.adaptive_weight,
        weighted_score: round_to(entry.weighted_score(), 2),
    }
}
