use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::budget::guess_budget;
use crate::constants::INFINITE_MODE_DISPLAY_ROUNDS;
use crate::feedback::Feedback;
use crate::input::{Announcer, GuessSource};
use crate::range::{ConfigError, NumberRange};
use crate::round::{RoundEngine, RoundOutcome, RoundResult};
use crate::stats::Statistics;

/// How many rounds a session plays before ending on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "mode", content = "rounds", rename_all = "lowercase")]
pub enum RoundLimit {
    Fixed(u32),
    /// Keep going until the player quits.
    #[default]
    Infinite,
}

impl RoundLimit {
    /// # Errors
    ///
    /// Returns `ConfigError::NoRounds` for zero.
    pub const fn fixed(rounds: u32) -> Result<Self, ConfigError> {
        if rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(Self::Fixed(rounds))
    }

    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Round count used for up-front sizing; infinite mode uses a nominal value.
    #[must_use]
    pub const fn planned_rounds(self) -> u32 {
        match self {
            Self::Fixed(rounds) => rounds,
            Self::Infinite => INFINITE_MODE_DISPLAY_ROUNDS,
        }
    }

    const fn is_reached(self, played: u32) -> bool {
        match self {
            Self::Fixed(rounds) => played >= rounds,
            Self::Infinite => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    pub range: NumberRange,
    pub rounds: RoundLimit,
    /// Announce each round's secret before guessing starts.
    pub show_secret: bool,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(range: NumberRange, rounds: RoundLimit) -> Self {
        Self {
            range,
            rounds,
            show_secret: false,
        }
    }

    #[must_use]
    pub const fn with_show_secret(mut self, show_secret: bool) -> Self {
        self.show_secret = show_secret;
        self
    }

    #[must_use]
    pub fn guess_budget(&self) -> u32 {
        guess_budget(&self.range)
    }

    /// Guesses available across the planned rounds.
    #[must_use]
    pub fn planned_allowance(&self) -> u64 {
        u64::from(self.guess_budget()) * u64::from(self.rounds.planned_rounds())
    }
}

/// Title shown when a round begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundHeading {
    pub number: u32,
    pub limit: RoundLimit,
}

impl fmt::Display for RoundHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit {
            RoundLimit::Fixed(total) => write!(f, "Round {} of {total}", self.number),
            RoundLimit::Infinite => write!(f, "Round {} (Infinite Mode)", self.number),
        }
    }
}

/// History entry for a completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub guesses_used: u32,
    pub result: RoundResult,
    pub message: String,
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Round {}: {}", self.round, self.message)
    }
}

/// Serializable snapshot of a session for end-of-game reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub seed: u64,
    pub config: SessionConfig,
    pub guess_budget: u32,
    pub rounds_played: u32,
    pub quit: bool,
    pub history: Vec<RoundSummary>,
    pub statistics: Option<Statistics>,
}

/// Multi-round game: owns the RNG, the scores and the history.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    seed: u64,
    budget: u32,
    rng: ChaCha20Rng,
    rounds_played: u32,
    scores: Vec<u32>,
    history: Vec<RoundSummary>,
    quit: bool,
}

impl GameSession {
    #[must_use]
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        Self {
            budget: config.guess_budget(),
            config,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            rounds_played: 0,
            scores: Vec::new(),
            history: Vec::new(),
            quit: false,
        }
    }

    /// Session seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy(config: SessionConfig) -> Self {
        Self::new(config, rand::random())
    }

    /// Whether no further rounds will be played.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.quit || self.config.rounds.is_reached(self.rounds_played)
    }

    /// Build the next round with a fresh secret.
    pub fn next_round(&mut self) -> RoundEngine {
        RoundEngine::new(self.config.range, self.budget, &mut self.rng)
    }

    /// Fold a finished round into the session.
    ///
    /// Quit rounds end the session and leave scores and history untouched.
    pub fn record(&mut self, outcome: &RoundOutcome) {
        if outcome.result == RoundResult::Quit {
            log::info!("player quit after {} completed rounds", self.rounds_played);
            self.quit = true;
            return;
        }
        self.rounds_played += 1;
        self.scores.push(outcome.guesses_used);
        self.history.push(RoundSummary {
            round: self.rounds_played,
            guesses_used: outcome.guesses_used,
            result: outcome.result,
            message: outcome.feedback_message.clone(),
        });
        log::debug!(
            "round {} {} in {} guesses",
            self.rounds_played,
            outcome.result,
            outcome.guesses_used
        );
    }

    /// Play one round end to end and record it.
    ///
    /// # Errors
    ///
    /// Returns the source's error if it fails to produce a guess.
    pub fn play_round<S, A>(
        &mut self,
        source: &mut S,
        announcer: &mut A,
    ) -> Result<RoundOutcome, S::Error>
    where
        S: GuessSource + ?Sized,
        A: Announcer + ?Sized,
    {
        announcer.round_started(&RoundHeading {
            number: self.rounds_played + 1,
            limit: self.config.rounds,
        });
        let mut round = self.next_round();
        if self.config.show_secret {
            announcer.feedback(&Feedback::Spoiler {
                secret: round.secret(),
            });
        }
        let outcome = round.run(source, announcer)?;
        self.record(&outcome);
        Ok(outcome)
    }

    /// Play rounds until the limit is reached or the player quits.
    ///
    /// # Errors
    ///
    /// Returns the source's error if it fails to produce a guess.
    pub fn play<S, A>(
        &mut self,
        source: &mut S,
        announcer: &mut A,
    ) -> Result<Option<Statistics>, S::Error>
    where
        S: GuessSource + ?Sized,
        A: Announcer + ?Sized,
    {
        while !self.is_finished() {
            self.play_round(source, announcer)?;
        }
        Ok(self.statistics())
    }

    #[must_use]
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::from_scores(&self.scores)
    }

    #[must_use]
    pub fn report(&self) -> SessionReport {
        SessionReport {
            seed: self.seed,
            config: self.config,
            guess_budget: self.budget,
            rounds_played: self.rounds_played,
            quit: self.quit,
            history: self.history.clone(),
            statistics: self.statistics(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn budget(&self) -> u32 {
        self.budget
    }

    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    #[must_use]
    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    #[must_use]
    pub const fn quit(&self) -> bool {
        self.quit
    }
}
