//! Derived score observation.
//!
//! The score is the sum of all tile values. Merging conserves that sum and
//! insertion raises it, so a committed move should never lower it. The
//! tracker watches consecutive observations and logs a warning when one
//! goes down; it never fails the move.

use log::warn;

/// Watches a sequence of score observations for regressions.
#[derive(Clone, Debug, Default)]
pub struct ScoreTracker {
    last: Option<u64>,
    regressions: u32,
}

impl ScoreTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking from `score` without comparing to earlier values.
    pub fn rebaseline(&mut self, score: u64) {
        self.last = Some(score);
    }

    /// Record a new score. Returns true if it is lower than the previous one.
    pub fn observe(&mut self, score: u64) -> bool {
        let regressed = matches!(self.last, Some(prev) if score < prev);
        if regressed {
            self.regressions += 1;
            warn!(
                "score regressed {} -> {score}; the merge engine lost tile value",
                self.last.unwrap_or_default()
            );
        }
        self.last = Some(score);
        regressed
    }

    /// Last observed score.
    #[must_use]
    pub fn last(&self) -> Option<u64> {
        self.last
    }

    /// Number of regressions seen so far.
    #[must_use]
    pub fn regressions(&self) -> u32 {
        self.regressions
    }
}
