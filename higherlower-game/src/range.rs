//! Validated number ranges and configuration errors.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{DEFAULT_HIGH, DEFAULT_LOW};

/// Errors raised when game configuration invariants are violated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("high number {high} must be greater than low number {low}")]
    InvertedRange { low: i64, high: i64 },
    #[error("a fixed session needs at least one round")]
    NoRounds,
}

/// Inclusive range of candidate secrets, always holding `high > low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct NumberRange {
    low: i64,
    high: i64,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    low: i64,
    high: i64,
}

impl NumberRange {
    /// # Errors
    ///
    /// Returns `ConfigError::InvertedRange` when `high <= low`.
    pub const fn new(low: i64, high: i64) -> Result<Self, ConfigError> {
        if high <= low {
            return Err(ConfigError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub const fn low(&self) -> i64 {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> i64 {
        self.high
    }

    /// Number of candidate values, `high - low + 1`.
    #[must_use]
    pub fn size(&self) -> u128 {
        let span = i128::from(self.high) - i128::from(self.low) + 1;
        span.unsigned_abs()
    }

    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.low, self.high)
    }
}

impl TryFrom<RawRange> for NumberRange {
    type Error = ConfigError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.low, raw.high)
    }
}

impl From<NumberRange> for RawRange {
    fn from(range: NumberRange) -> Self {
        Self {
            low: range.low,
            high: range.high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_empty_ranges() {
        assert_eq!(
            NumberRange::new(5, 5),
            Err(ConfigError::InvertedRange { low: 5, high: 5 })
        );
        assert!(NumberRange::new(9, 1).is_err());
        assert!(NumberRange::new(1, 2).is_ok());
    }

    #[test]
    fn size_spans_full_i64_domain() {
        let full = NumberRange::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(full.size(), 1u128 << 64);
        assert_eq!(NumberRange::default().size(), 11);
    }

    #[test]
    fn contains_is_inclusive() {
        let range = NumberRange::new(-3, 3).unwrap();
        assert!(range.contains(-3));
        assert!(range.contains(3));
        assert!(!range.contains(4));
    }

    #[test]
    fn deserialize_validates_bounds() {
        let ok: NumberRange = serde_json::from_str(r#"{"low":1,"high":4}"#).unwrap();
        assert_eq!(ok.high(), 4);
        let bad = serde_json::from_str::<NumberRange>(r#"{"low":4,"high":1}"#);
        assert!(bad.is_err());
    }
}
