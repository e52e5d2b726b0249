//! Guess budget derived from the size of the secret's range.
//!
//! The budget is the number of binary-search steps needed to isolate one
//! value among `high - low + 1` candidates, plus [`BUDGET_SLACK`] spare
//! attempts. Integer arithmetic keeps the result exact for every `i64` range.

use crate::constants::BUDGET_SLACK;
use crate::range::{ConfigError, NumberRange};

/// `ceil(log2(n))` for `n >= 1`; zero for `n <= 1`.
#[must_use]
pub const fn ceil_log2(n: u128) -> u32 {
    if n <= 1 {
        0
    } else {
        u128::BITS - (n - 1).leading_zeros()
    }
}

/// Maximum guesses allowed for a validated range.
#[must_use]
pub fn guess_budget(range: &NumberRange) -> u32 {
    ceil_log2(range.size()) + BUDGET_SLACK
}

/// Maximum guesses allowed for `[low, high]`.
///
/// # Errors
///
/// Returns `ConfigError::InvertedRange` when `high <= low`.
pub fn calculate(low: i64, high: i64) -> Result<u32, ConfigError> {
    NumberRange::new(low, high).map(|range| guess_budget(&range))
}
