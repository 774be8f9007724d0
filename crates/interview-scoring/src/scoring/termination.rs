use super::config::ScoringConfig;

/// Lifecycle of the consecutive-failure monitor. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Active { consecutive_low: u8 },
    Terminated,
}

impl MonitorState {
    pub fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// Tracks runs of low raw scores and halts the session once the run reaches
/// the configured streak.
#[derive(Debug, Clone)]
pub struct TerminationMonitor {
    state: MonitorState,
    low_score_threshold: f64,
    streak: u8,
}

impl TerminationMonitor {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            state: MonitorState::Active { consecutive_low: 0 },
            low_score_threshold: config.low_score_threshold,
            streak: config.termination_streak.max(1),
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Feed the raw score of the attempt just evaluated and return the new state.
    pub fn observe(&mut self, raw_score: f64) -> MonitorState {
        if let MonitorState::Active { consecutive_low } = self.state {
            let consecutive_low = if raw_score < self.low_score_threshold {
                consecutive_low.saturating_add(1)
            } else {
                0
            };

            self.state = if consecutive_low >= self.streak {
                MonitorState::Terminated
            } else {
                MonitorState::Active { consecutive_low }
            };
        }

        self.state
    }
}

/// Human-readable halt reason for the configured streak and threshold.
pub fn termination_reason(config: &ScoringConfig) -> String {
    format!(
        "{} consecutive low-quality answers (<{}%) detected — assessment halted.",
        count_word(config.termination_streak.max(1)),
        config.low_score_threshold
    )
}

fn count_word(count: u8) -> String {
    const WORDS: [&str; 10] = [
        "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    ];
    WORDS
        .get(usize::from(count).wrapping_sub(1))
        .map(|word| word.to_string())
        .unwrap_or_else(|| count.to_string())
}
