//! Time management module for the Go engine
//!
//! This module decides how much of the remaining clock to spend on the next
//! move. It never measures elapsed time itself; the search driver turns the
//! returned [`TimeBudget`] into stop decisions.
//!
//! # Clock State Ownership
//!
//! [`ClockState`] is written only by the protocol layer (after `time_left`
//! style notifications from the game server). Everything here takes it by
//! shared reference and treats it as a snapshot.

mod allocation;
mod clock;
mod error;
mod lag;
mod progress;
mod settings;

pub use allocation::{allocate, divide_evenly, get_time, TimeBudget};
pub use clock::ClockState;
pub use error::{InconsistencyReason, TimeControlError, TimeControlResult};
pub use lag::apply_lag_buffer;
pub use progress::estimate_turns_left;
pub use settings::{ClockMode, SettingsError, TimeSettings};

/// Tuned allocation constants
///
/// These come from empirical play and are kept exactly as tuned.
pub mod constants {
    /// Expected game length: `GAME_LENGTH_PER_POINT * area + GAME_LENGTH_BASE` moves
    pub const GAME_LENGTH_PER_POINT: f64 = 0.60;
    pub const GAME_LENGTH_BASE: f64 = 30.0;

    /// Lower bound on turns left: `MIN_TURNS_BASE + MIN_TURNS_PER_POINT * area`
    pub const MIN_TURNS_BASE: f64 = 20.0;
    pub const MIN_TURNS_PER_POINT: f64 = 0.10;

    /// Fraction of the turns left assumed when an increment can refill the clock
    pub const INCREMENT_TURNS_FACTOR: f64 = 0.85;
    /// Fraction of the turns left assumed when byo-yomi periods back up main time
    pub const BYOYOMI_TURNS_FACTOR: f64 = 0.70;
    /// Cap on the aggressive bonus, as a fraction of increment / period time
    pub const AGGRESSIVE_BONUS_CAP: f64 = 0.5;

    /// Max time may use at most 1/5 of the spendable main time
    pub const MAX_MAIN_TIME_DIVISOR: f64 = 5.0;

    /// Max time in a period: `time / (STONE_WEIGHT * stones + STONE_OFFSET)`
    pub const STONE_WEIGHT: f64 = 0.75;
    pub const STONE_OFFSET: f64 = 0.25;

    /// Only the last this many periods are treated as real overtime
    pub const RESERVED_PERIODS: i32 = 3;

    /// Main time used for "no time limit"
    pub const UNLIMITED_MAIN_TIME: f64 = 1.0e30;
    /// Anything at or above this much main time counts as unlimited
    pub const UNLIMITED_THRESHOLD: f64 = 1.0e20;
}
