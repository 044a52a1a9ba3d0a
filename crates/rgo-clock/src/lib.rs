//! Per-move time budgeting for Go engines
//!
//! Given the state of the game clock and the stones on the board, this crate
//! computes how long the engine may think about the next move, expressed as a
//! `(min, recommended, max)` triple in seconds.
//!
//! Supported clocks:
//! - Absolute time (sudden death)
//! - Fischer increment
//! - Japanese byo-yomi and Canadian overtime
//!
//! ```
//! use rgo_clock::{get_time, Board, ClockState};
//!
//! let board = Board::new(19, 19);
//! let clock = ClockState::fischer_time(600.0, 5.0);
//! let budget = get_time(&board, &clock, 0.5).unwrap();
//! assert!(budget.recommended_time <= budget.max_time);
//! ```

pub mod board;
pub mod time_management;

pub use board::{Board, Stone, StoneGrid};
pub use time_management::{
    allocate, apply_lag_buffer, divide_evenly, estimate_turns_left, get_time, ClockMode,
    ClockState, InconsistencyReason, SettingsError, TimeBudget, TimeControlError, TimeControlResult,
    TimeSettings,
};
