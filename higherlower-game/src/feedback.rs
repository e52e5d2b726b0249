//! Classified round feedback and its plain-text rendering.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a round can tell the player, in the order it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    /// Debug-only disclosure of the secret at round start.
    Spoiler { secret: i64 },
    /// Guess was below the secret and guesses remain.
    TooLow { used: u32, budget: u32 },
    /// Guess was above the secret and guesses remain.
    TooHigh { used: u32, budget: u32 },
    /// Guess repeats an earlier one; nothing was counted.
    Duplicate { guess: i64, used: u32, budget: u32 },
    /// Exactly one guess remains.
    OneGuessLeft,
    /// Secret found on the first guess.
    Lucky,
    /// Secret found with the final allowed guess.
    JustMadeIt { used: u32 },
    /// Secret found with guesses to spare.
    Won { used: u32 },
    /// Budget exhausted without finding the secret.
    OutOfGuesses,
    /// Player abandoned the round.
    Quit,
}

impl Feedback {
    /// Whether this feedback closes the round.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Lucky
                | Self::JustMadeIt { .. }
                | Self::Won { .. }
                | Self::OutOfGuesses
                | Self::Quit
        )
    }

    /// Whether this feedback reports a found secret.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Lucky | Self::JustMadeIt { .. } | Self::Won { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spoiler { secret } => write!(f, "Spoiler alert: the secret is {secret}"),
            Self::TooLow { used, budget } => write!(
                f,
                "Too low, please try a higher number. You've used {used} / {budget} guesses"
            ),
            Self::TooHigh { used, budget } => write!(
                f,
                "Too high, please try a lower number. You've used {used} / {budget} guesses"
            ),
            Self::Duplicate {
                guess,
                used,
                budget,
            } => write!(
                f,
                "You've already guessed {guess}. You've *still* used {used} / {budget} guesses"
            ),
            Self::OneGuessLeft => f.write_str("Careful - you have one guess left!"),
            Self::Lucky => f.write_str("Lucky! You got it on the first guess."),
            Self::JustMadeIt { used } => write!(f, "Phew! You got it in {used} guesses."),
            Self::Won { used } => write!(
                f,
                "Well done! You guessed the secret number in {used} guesses."
            ),
            Self::OutOfGuesses => {
                f.write_str("Sorry - you have no more guesses. You lose this round!")
            }
            Self::Quit => f.write_str("Round abandoned."),
        }
    }
}
