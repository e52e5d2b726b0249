//! Centralized defaults and tokens for the Higher/Lower core.
//!
//! Anything the front end needs to agree on with the engine (default range,
//! quit token, infinite-mode sizing) lives here so both sides read the same
//! values.

// Range defaults -----------------------------------------------------------
pub const DEFAULT_LOW: i64 = 0;
pub const DEFAULT_HIGH: i64 = 10;

// Budget -------------------------------------------------------------------
/// Attempts granted on top of the binary-search step count.
pub const BUDGET_SLACK: u32 = 1;

// Session ------------------------------------------------------------------
/// Round count used to size the allowance display in infinite mode.
pub const INFINITE_MODE_DISPLAY_ROUNDS: u32 = 5;

/// Literal typed at a guess prompt to abandon the game.
pub const EXIT_TOKEN: &str = "xxx";
