//! Single-round state machine.
//!
//! A round starts `Active`, picks a secret inside its range and consumes
//! guesses until it lands in one of the terminal states `Won`, `Lost` or
//! `Quit`. Repeated guesses are rejected without cost, and the budget is
//! fixed when the round is created.
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::feedback::Feedback;
use crate::input::{Announcer, GuessInput, GuessSource};
use crate::range::NumberRange;

/// Distinct guesses made this round, in the order they were made.
pub type GuessRecord = SmallVec<[i64; 8]>;

/// Feedback emitted by a single step; never more than two entries.
pub type StepFeedback = SmallVec<[Feedback; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoundState {
    #[default]
    Active,
    Won,
    Lost,
    Quit,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }

    /// Terminal result, if the round has ended.
    #[must_use]
    pub const fn result(self) -> Option<RoundResult> {
        match self {
            Self::Active => None,
            Self::Won => Some(RoundResult::Won),
            Self::Lost => Some(RoundResult::Lost),
            Self::Quit => Some(RoundResult::Quit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Won,
    Lost,
    Quit,
}

impl RoundResult {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a finished round went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub guesses_used: u32,
    pub result: RoundResult,
    pub feedback_message: String,
}

#[derive(Debug, Clone)]
pub struct RoundEngine {
    range: NumberRange,
    budget: u32,
    secret: i64,
    record: GuessRecord,
    guesses_used: u32,
    state: RoundState,
    closing: Option<Feedback>,
}

impl RoundEngine {
    /// Start a round with a secret drawn uniformly from `range`.
    pub fn new<R: Rng + ?Sized>(range: NumberRange, budget: u32, rng: &mut R) -> Self {
        let secret = rng.gen_range(range.low()..=range.high());
        log::debug!("round secret drawn from {range}");
        Self::with_secret(range, budget, secret)
    }

    /// Start a round with a known secret.
    #[must_use]
    pub fn with_secret(range: NumberRange, budget: u32, secret: i64) -> Self {
        Self {
            range,
            budget,
            secret,
            record: GuessRecord::new(),
            guesses_used: 0,
            state: RoundState::Active,
            closing: None,
        }
    }

    /// Apply one input, returning the feedback it produced.
    ///
    /// Terminal rounds ignore further input.
    pub fn step(&mut self, input: GuessInput) -> StepFeedback {
        let mut out = StepFeedback::new();
        if self.state.is_terminal() {
            return out;
        }

        let guess = match input {
            GuessInput::Quit => {
                self.finish(RoundState::Quit, Feedback::Quit, &mut out);
                return out;
            }
            GuessInput::Value(guess) => guess,
        };

        if self.record.contains(&guess) {
            out.push(Feedback::Duplicate {
                guess,
                used: self.guesses_used,
                budget: self.budget,
            });
            return out;
        }

        if !self.range.contains(guess) {
            log::warn!("guess {guess} outside {} reached the round engine", self.range);
        }

        self.record.push(guess);
        self.guesses_used += 1;
        let used = self.guesses_used;
        let budget = self.budget;

        if guess == self.secret {
            let feedback = if used == 1 {
                Feedback::Lucky
            } else if used == budget {
                Feedback::JustMadeIt { used }
            } else {
                Feedback::Won { used }
            };
            self.finish(RoundState::Won, feedback, &mut out);
        } else if used < budget {
            out.push(if guess < self.secret {
                Feedback::TooLow { used, budget }
            } else {
                Feedback::TooHigh { used, budget }
            });
        } else {
            self.finish(RoundState::Lost, Feedback::OutOfGuesses, &mut out);
        }

        if !self.state.is_terminal() && used == budget.saturating_sub(1) {
            out.push(Feedback::OneGuessLeft);
        }
        out
    }

    fn finish(&mut self, state: RoundState, feedback: Feedback, out: &mut StepFeedback) {
        log::debug!(
            "round finished {state:?} after {}/{} guesses",
            self.guesses_used,
            self.budget
        );
        self.state = state;
        self.closing = Some(feedback);
        out.push(feedback);
    }

    /// Pull guesses from `source` until the round ends.
    ///
    /// # Errors
    ///
    /// Returns the source's error if it fails to produce a guess.
    pub fn run<S, A>(&mut self, source: &mut S, announcer: &mut A) -> Result<RoundOutcome, S::Error>
    where
        S: GuessSource + ?Sized,
        A: Announcer + ?Sized,
    {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            let input = source.next_guess(&self.range)?;
            for feedback in self.step(input) {
                announcer.feedback(&feedback);
            }
        }
    }

    /// Summary of the round once it has reached a terminal state.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        let result = self.state.result()?;
        Some(RoundOutcome {
            guesses_used: self.guesses_used,
            result,
            feedback_message: self
                .closing
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        })
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn guesses_used(&self) -> u32 {
        self.guesses_used
    }

    #[must_use]
    pub const fn budget(&self) -> u32 {
        self.budget
    }

    #[must_use]
    pub const fn range(&self) -> &NumberRange {
        &self.range
    }

    #[must_use]
    pub const fn secret(&self) -> i64 {
        self.secret
    }

    #[must_use]
    pub fn record(&self) -> &[i64] {
        &self.record
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.budget.saturating_sub(self.guesses_used)
    }
}
