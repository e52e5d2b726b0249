//! Higher/Lower Game Engine
//!
//! Platform-agnostic core logic for the Higher/Lower guessing game: the guess
//! budget, the per-round state machine and multi-round sessions with scoring.
//! Reading and validating player input is left to the front end, which plugs
//! in through [`GuessSource`] and [`Announcer`].

pub mod budget;
pub mod constants;
pub mod feedback;
pub mod input;
pub mod numbers;
pub mod range;
pub mod round;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use budget::{calculate, guess_budget};
pub use constants::{EXIT_TOKEN, INFINITE_MODE_DISPLAY_ROUNDS};
pub use feedback::Feedback;
pub use input::{Announcer, GuessInput, GuessSource, Silent};
pub use range::{ConfigError, NumberRange};
pub use round::{GuessRecord, RoundEngine, RoundOutcome, RoundResult, RoundState};
pub use session::{
    GameSession, RoundHeading, RoundLimit, RoundSummary, SessionConfig, SessionReport,
};
pub use stats::Statistics;
