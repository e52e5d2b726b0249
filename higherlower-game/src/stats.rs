//! End-of-game score statistics.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::numbers::{round_to_hundredths, u64_to_f64, usize_to_u32};

/// Best, worst and mean guesses-per-round over completed rounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub rounds: u32,
    pub best: u32,
    pub worst: u32,
    /// Mean rounded to two decimal places.
    pub average: f64,
}

impl Statistics {
    /// Aggregate a list of per-round guess counts.
    ///
    /// Returns `None` when no round was completed.
    #[must_use]
    pub fn from_scores(scores: &[u32]) -> Option<Self> {
        let mut sorted = scores.to_vec();
        sorted.sort_unstable();
        let best = *sorted.first()?;
        let worst = *sorted.last()?;
        let total: u64 = sorted.iter().copied().map(u64::from).sum();
        let count = u64::try_from(sorted.len()).ok()?;
        Some(Self {
            rounds: usize_to_u32(sorted.len()),
            best,
            worst,
            average: round_to_hundredths(u64_to_f64(total) / u64_to_f64(count)),
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Best:{} | Worst:{} | Average:{:.2}",
            self.best, self.worst, self.average
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_scores() {
        let stats = Statistics::from_scores(&[2, 5, 3]).unwrap();
        assert_eq!(stats.best, 2);
        assert_eq!(stats.worst, 5);
        assert_eq!(stats.rounds, 3);
        assert_eq!(format!("{:.2}", stats.average), "3.33");
        assert_eq!(stats.to_string(), "Best:2 | Worst:5 | Average:3.33");
    }

    #[test]
    fn single_score() {
        let stats = Statistics::from_scores(&[4]).unwrap();
        assert_eq!((stats.best, stats.worst), (4, 4));
        assert_eq!(stats.to_string(), "Best:4 | Worst:4 | Average:4.00");
    }

    #[test]
    fn empty_scores_have_no_statistics() {
        assert!(Statistics::from_scores(&[]).is_none());
    }
}
