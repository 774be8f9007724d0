use super::advisor::DifficultyAdvice;
use serde::{Deserialize, Serialize};

/// State recorded on the timeline: the advisor's verdict, or the halt marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineState {
    Promote,
    Maintain,
    Demote,
    Terminated,
}

impl From<DifficultyAdvice> for TimelineState {
    fn from(advice: DifficultyAdvice) -> Self {
        match advice {
            DifficultyAdvice::Promote => Self::Promote,
            DifficultyAdvice::Maintain => Self::Maintain,
            DifficultyAdvice::Demote => Self::Demote,
        }
    }
}

impl TimelineState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Promote => "promote",
            Self::Maintain => "maintain",
            Self::Demote => "demote",
            Self::Terminated => "terminated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateLogEntry {
    pub state: TimelineState,
    pub question: i64,
    pub weight: f64,
}

/// Append-only recorder; entries keep attempt order.
#[derive(Debug, Default)]
pub struct StateLogRecorder {
    entries: Vec<StateLogEntry>,
}

impl StateLogRecorder {
    pub fn record_advice(&mut self, question: i64, advice: DifficultyAdvice, weight: f64) {
        self.entries.push(StateLogEntry {
            state: advice.into(),
            question,
            weight,
        });
    }

    pub fn record_termination(&mut self, question: i64, weight: f64) {
        self.entries.push(StateLogEntry {
            state: TimelineState::Terminated,
            question,
            weight,
        });
    }

    pub fn into_entries(self) -> Vec<StateLogEntry> {
        self.entries
    }
}
