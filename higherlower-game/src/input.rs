//! Seams between the round engine and whatever talks to the player.
use crate::feedback::Feedback;
use crate::range::NumberRange;
use crate::session::RoundHeading;

/// A validated guess, or the player's request to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Value(i64),
    Quit,
}

/// Supplies guesses for a round.
/// Implementations validate raw input themselves; the engine only ever sees
/// values inside `range` or [`GuessInput::Quit`].
pub trait GuessSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Block until the player produces a guess or quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input channel fails.
    fn next_guess(&mut self, range: &NumberRange) -> Result<GuessInput, Self::Error>;
}

/// Receives everything the game wants to tell the player.
pub trait Announcer {
    fn feedback(&mut self, feedback: &Feedback);

    fn round_started(&mut self, _heading: &RoundHeading) {}
}

/// Announcer that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Announcer for Silent {
    fn feedback(&mut self, _feedback: &Feedback) {}
}
