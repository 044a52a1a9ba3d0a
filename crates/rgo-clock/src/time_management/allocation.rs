//! Time allocation algorithms

use log::{debug, trace, warn};

use super::clock::ClockState;
use super::constants::{
    AGGRESSIVE_BONUS_CAP, BYOYOMI_TURNS_FACTOR, INCREMENT_TURNS_FACTOR, MAX_MAIN_TIME_DIVISOR,
    RESERVED_PERIODS, STONE_OFFSET, STONE_WEIGHT,
};
use super::error::{InconsistencyReason, TimeControlError, TimeControlResult};
use super::lag::apply_lag_buffer;
use super::progress::estimate_turns_left;
use crate::board::StoneGrid;

/// Thinking time for one move, in seconds
///
/// `min_time <= max_time` and `recommended_time <= max_time` always hold.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TimeBudget {
    pub min_time: f64,
    pub recommended_time: f64,
    pub max_time: f64,
}

/// Compute the time budget for the side to move on `board`
///
/// This is the entry point for the search driver.
pub fn get_time<G: StoneGrid + ?Sized>(
    board: &G,
    clock: &ClockState,
    lag_buffer: f64,
) -> TimeControlResult<TimeBudget> {
    let board_area = board.area();
    let num_stones = board.count_stones();
    let approx_turns_left = estimate_turns_left(board_area, num_stones);
    trace!("time: area={board_area} stones={num_stones} approx_turns_left={approx_turns_left:.1}");
    allocate(clock, approx_turns_left, lag_buffer)
}

/// Spread `time` over the rest of the game
///
/// An increment or byo-yomi periods refill the clock later, so we can spend
/// more than the flat per-move average now. The extra is capped at half the
/// increment or half a period.
#[must_use]
pub fn divide_evenly(
    time: f64,
    approx_turns_left: f64,
    increment: f64,
    per_period_time: f64,
) -> f64 {
    let turns_for_increment = approx_turns_left * INCREMENT_TURNS_FACTOR;
    let turns_for_byoyomi = approx_turns_left * BYOYOMI_TURNS_FACTOR;

    let base = time / approx_turns_left;
    let agg_inc = time / turns_for_increment;
    let agg_byo = time / turns_for_byoyomi;
    base + f64::max(
        f64::min(agg_inc - base, AGGRESSIVE_BONUS_CAP * increment),
        f64::min(agg_byo - base, AGGRESSIVE_BONUS_CAP * per_period_time),
    )
}

/// Compute the time budget given an estimate of the moves left
///
/// Fails without a partial result when the clock snapshot is inconsistent.
pub fn allocate(
    clock: &ClockState,
    approx_turns_left: f64,
    lag_buffer: f64,
) -> TimeControlResult<TimeBudget> {
    let (min_time, recommended_time, max_time) = if !clock.uses_periods() {
        fischer_or_absolute_time(clock, approx_turns_left, lag_buffer)?
    } else {
        byoyomi_time(clock, approx_turns_left)?
    };

    let mut min_time = apply_lag_buffer(min_time, lag_buffer);
    let mut recommended_time = apply_lag_buffer(recommended_time, lag_buffer);
    let max_time = apply_lag_buffer(max_time, lag_buffer);

    if min_time > max_time {
        min_time = max_time;
    }
    if recommended_time > max_time {
        recommended_time = max_time;
    }

    debug!("time: min={min_time:.3} recommended={recommended_time:.3} max={max_time:.3}");
    Ok(TimeBudget {
        min_time,
        recommended_time,
        max_time,
    })
}

fn inconsistent(clock: &ClockState, reason: InconsistencyReason) -> TimeControlError {
    warn!("rejecting clock snapshot ({reason}): {clock}");
    TimeControlError::InconsistentTimeControl(reason)
}

/// Fischer or absolute time, before the final lag buffer
fn fischer_or_absolute_time(
    clock: &ClockState,
    approx_turns_left: f64,
    lag_buffer: f64,
) -> TimeControlResult<(f64, f64, f64)> {
    if clock.in_overtime {
        return Err(inconsistent(clock, InconsistencyReason::InOvertimeWithoutPeriods));
    }
    if clock.num_periods_left_including_current != 0 {
        return Err(inconsistent(clock, InconsistencyReason::PeriodsWithFischerOrAbsolute));
    }

    let increment = clock.increment;
    let main_time_left = clock.main_time_left;

    // Nearly out of time: the increment is all we have
    if main_time_left <= increment {
        debug!("time: fischer/absolute, main time {main_time_left:.3} within increment");
        return Ok((0.0, main_time_left, main_time_left));
    }

    // The excess gets the lag buffer once more for extra safety
    let excess_main_time = apply_lag_buffer(main_time_left - increment, lag_buffer);
    let recommended = increment
        + divide_evenly(excess_main_time, approx_turns_left, increment, clock.per_period_time);
    let max = increment + excess_main_time / MAX_MAIN_TIME_DIVISOR;
    debug!("time: fischer/absolute, excess main time {excess_main_time:.3}");
    Ok((0.0, recommended, max))
}

/// Byo-yomi or Canadian overtime, before the final lag buffer
fn byoyomi_time(clock: &ClockState, approx_turns_left: f64) -> TimeControlResult<(f64, f64, f64)> {
    if clock.num_stones_per_period <= 0 {
        return Err(inconsistent(clock, InconsistencyReason::NoStonesPerPeriod));
    }

    let periods_left = clock.num_periods_left_including_current;
    let per_period_time = clock.per_period_time;

    // All but the last few periods behave like main time
    let mut effective_main_time_left = clock.main_time_left;
    let mut effectively_in_overtime = clock.in_overtime;
    if periods_left > RESERVED_PERIODS {
        effectively_in_overtime = false;
        if !clock.in_overtime {
            effective_main_time_left +=
                per_period_time * f64::from(periods_left - RESERVED_PERIODS);
        } else {
            effective_main_time_left += clock.time_left_in_period
                + per_period_time * f64::from(periods_left - RESERVED_PERIODS - 1);
        }
    }

    if !effectively_in_overtime {
        let stones = f64::from(clock.num_stones_per_period);
        let recommended = per_period_time / stones
            + divide_evenly(
                effective_main_time_left,
                approx_turns_left,
                clock.increment,
                per_period_time,
            );
        let max = per_period_time / (STONE_WEIGHT * stones + STONE_OFFSET)
            + effective_main_time_left / MAX_MAIN_TIME_DIVISOR;
        debug!(
            "time: byo-yomi main time, effective main time {effective_main_time_left:.3}, \
             {periods_left} periods left"
        );
        return Ok((0.0, recommended, max));
    }

    if clock.num_stones_left_in_period < 1 {
        return Err(inconsistent(clock, InconsistencyReason::NoStonesLeftInPeriod));
    }

    let stones_left = clock.num_stones_left_in_period;
    let time_left = clock.time_left_in_period;
    let min = if stones_left <= 1 { time_left } else { 0.0 };
    let recommended = time_left / f64::from(stones_left);
    let max = time_left / (STONE_WEIGHT * f64::from(stones_left) + STONE_OFFSET);
    debug!(
        "time: byo-yomi overtime, {stones_left} stones in {time_left:.3}s, \
         {periods_left} periods left"
    );
    Ok((min, recommended, max))
}
