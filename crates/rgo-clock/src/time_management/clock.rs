//! Clock state snapshot

use std::fmt;

use super::constants::{UNLIMITED_MAIN_TIME, UNLIMITED_THRESHOLD};
use super::error::{InconsistencyReason, TimeControlResult};

/// Time control settings plus the current state of our clock
///
/// The first group of fields is fixed for the whole game. The second group is
/// updated by the protocol layer after every time-left notification. All times
/// are in seconds.
///
/// Counts are signed so that a broken snapshot from the controller can still be
/// represented and then rejected by [`ClockState::validate`] or the allocator.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ClockState {
    // Configuration
    pub original_main_time: f64,
    pub increment: f64,
    pub original_num_periods: i32,
    pub num_stones_per_period: i32,
    pub per_period_time: f64,

    // Current state
    pub main_time_left: f64,
    pub in_overtime: bool,
    pub num_periods_left_including_current: i32,
    pub num_stones_left_in_period: i32,
    pub time_left_in_period: f64,
}

impl Default for ClockState {
    /// No time limit
    fn default() -> Self {
        Self {
            original_main_time: UNLIMITED_MAIN_TIME,
            increment: 0.0,
            original_num_periods: 0,
            num_stones_per_period: 0,
            per_period_time: 0.0,
            main_time_left: UNLIMITED_MAIN_TIME,
            in_overtime: false,
            num_periods_left_including_current: 0,
            num_stones_left_in_period: 0,
            time_left_in_period: 0.0,
        }
    }
}

impl ClockState {
    /// Sudden death: `main_time` for the whole game
    pub fn absolute_time(main_time: f64) -> Self {
        Self {
            original_main_time: main_time,
            main_time_left: main_time,
            ..Self::default()
        }
    }

    /// `main_time` plus `increment` added after every move
    pub fn fischer_time(main_time: f64, increment: f64) -> Self {
        Self {
            increment,
            ..Self::absolute_time(main_time)
        }
    }

    /// Main time followed by `num_periods` periods of `per_period_time` seconds,
    /// each covering `num_stones_per_period` moves.
    ///
    /// One stone per period is Japanese byo-yomi, more is Canadian overtime.
    /// With no main time the first period is running from the start.
    pub fn canadian_or_byoyomi_time(
        main_time: f64,
        per_period_time: f64,
        num_periods: i32,
        num_stones_per_period: i32,
    ) -> Self {
        let in_overtime = main_time <= 0.0 && num_periods > 0;
        Self {
            original_main_time: main_time,
            increment: 0.0,
            original_num_periods: num_periods,
            num_stones_per_period,
            per_period_time,
            main_time_left: main_time,
            in_overtime,
            num_periods_left_including_current: num_periods,
            num_stones_left_in_period: if in_overtime { num_stones_per_period } else { 0 },
            time_left_in_period: if in_overtime { per_period_time } else { 0.0 },
        }
    }

    /// Whether this clock places no practical limit on thinking
    pub fn is_effectively_unlimited_time(&self) -> bool {
        self.num_periods_left_including_current <= 0
            && self.increment <= 0.0
            && self.main_time_left >= UNLIMITED_THRESHOLD
    }

    /// Whether byo-yomi periods drive the allocation (as opposed to Fischer/absolute)
    #[inline]
    pub fn uses_periods(&self) -> bool {
        !(self.increment > 0.0 || self.num_periods_left_including_current <= 0)
    }

    /// Check every clock invariant without computing a budget.
    ///
    /// Stricter than [`allocate`](super::allocate): it also rejects negative
    /// times, and requires a stone left whenever `in_overtime` is set even if
    /// the allocator would fold that period into main time.
    pub fn validate(&self) -> TimeControlResult<()> {
        let times = [
            self.original_main_time,
            self.increment,
            self.per_period_time,
            self.main_time_left,
            self.time_left_in_period,
        ];
        // NaN fails this check as well
        if !times.iter().all(|&t| t >= 0.0) {
            return Err(InconsistencyReason::NegativeTime.into());
        }

        if !self.uses_periods() {
            if self.in_overtime {
                return Err(InconsistencyReason::InOvertimeWithoutPeriods.into());
            }
            if self.num_periods_left_including_current != 0 {
                return Err(InconsistencyReason::PeriodsWithFischerOrAbsolute.into());
            }
        } else {
            if self.num_stones_per_period <= 0 {
                return Err(InconsistencyReason::NoStonesPerPeriod.into());
            }
            if self.in_overtime && self.num_stones_left_in_period < 1 {
                return Err(InconsistencyReason::NoStonesLeftInPeriod.into());
            }
        }
        Ok(())
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "main_time {} increment {} periods {} stones_per_period {} period_time {} | \
             main_time_left {} in_overtime {} periods_left {} stones_left_in_period {} \
             time_left_in_period {}",
            self.original_main_time,
            self.increment,
            self.original_num_periods,
            self.num_stones_per_period,
            self.per_period_time,
            self.main_time_left,
            self.in_overtime,
            self.num_periods_left_including_current,
            self.num_stones_left_in_period,
            self.time_left_in_period,
        )
    }
}
