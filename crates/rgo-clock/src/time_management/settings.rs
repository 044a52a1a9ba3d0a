//! Clock settings loaded from JSON
//!
//! Used by tools and tests to describe a clock without going through a game
//! server. Fields that are left out take their defaults; the current-state
//! fields (`*_left`, `in_overtime`) default to the start-of-game values.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::clock::ClockState;
use super::error::TimeControlError;

/// Errors while loading clock settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid clock settings: {0}")]
    Json(#[from] serde_json::Error),

    /// The described clock is inconsistent
    #[error(transparent)]
    Clock(#[from] TimeControlError),

    #[error("lag buffer must be a non-negative number of seconds, got {0}")]
    InvalidLagBuffer(f64),
}

/// Time control system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// No time limit
    #[default]
    Unlimited,
    /// Sudden death
    Absolute,
    /// Main time plus increment per move
    Fischer,
    /// Main time plus byo-yomi or Canadian periods
    Byoyomi,
}

/// Clock description plus lag buffer, in seconds
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeSettings {
    pub mode: ClockMode,
    pub main_time: f64,
    pub increment: f64,
    pub periods: i32,
    pub stones_per_period: i32,
    pub period_time: f64,

    pub main_time_left: Option<f64>,
    pub in_overtime: Option<bool>,
    pub periods_left: Option<i32>,
    pub stones_left_in_period: Option<i32>,
    pub time_left_in_period: Option<f64>,

    pub lag_buffer: f64,
}

impl TimeSettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        if settings.lag_buffer.is_nan() || settings.lag_buffer < 0.0 {
            return Err(SettingsError::InvalidLagBuffer(settings.lag_buffer));
        }
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Build the clock snapshot these settings describe
    ///
    /// The snapshot is validated, so a settings file can never feed the
    /// allocator an inconsistent clock.
    pub fn clock_state(&self) -> Result<ClockState, SettingsError> {
        let mut clock = match self.mode {
            ClockMode::Unlimited => ClockState::default(),
            ClockMode::Absolute => ClockState::absolute_time(self.main_time),
            ClockMode::Fischer => ClockState::fischer_time(self.main_time, self.increment),
            ClockMode::Byoyomi => ClockState::canadian_or_byoyomi_time(
                self.main_time,
                self.period_time,
                self.periods,
                self.stones_per_period,
            ),
        };

        if let Some(main_time_left) = self.main_time_left {
            clock.main_time_left = main_time_left;
        }
        if let Some(in_overtime) = self.in_overtime {
            clock.in_overtime = in_overtime;
        }
        if let Some(periods_left) = self.periods_left {
            clock.num_periods_left_including_current = periods_left;
        }
        // A period that is running but not described starts out full
        clock.num_stones_left_in_period = match self.stones_left_in_period {
            Some(stones_left) => stones_left,
            None if clock.in_overtime => clock.num_stones_per_period,
            None => clock.num_stones_left_in_period,
        };
        clock.time_left_in_period = match self.time_left_in_period {
            Some(time_left) => time_left,
            None if clock.in_overtime => clock.per_period_time,
            None => clock.time_left_in_period,
        };

        clock.validate()?;
        Ok(clock)
    }
}
