//! Property tests for time allocation invariants

use proptest::prelude::*;
use rgo_clock::{allocate, apply_lag_buffer, estimate_turns_left, ClockState};

fn arb_fischer_or_absolute() -> impl Strategy<Value = ClockState> {
    (0.0f64..7200.0, prop_oneof![Just(0.0f64), 0.0f64..60.0], 0.0f64..7200.0).prop_map(
        |(main_time, increment, main_time_left)| ClockState {
            main_time_left,
            ..ClockState::fischer_time(main_time, increment)
        },
    )
}

fn arb_byoyomi() -> impl Strategy<Value = ClockState> {
    (1i32..=10, 1i32..=25, 1.0f64..600.0, 0.0f64..3600.0, any::<bool>())
        .prop_flat_map(|(periods, stones_per_period, period_time, main_time, in_overtime)| {
            (
                Just((periods, stones_per_period, period_time, main_time, in_overtime)),
                1..=periods,
                1..=stones_per_period,
                0.0..=period_time,
            )
        })
        .prop_map(|(config, left, stones, time)| {
            let (periods, stones_per_period, period_time, main_time, in_overtime) = config;
            ClockState {
                main_time_left: if in_overtime { 0.0 } else { main_time },
                in_overtime,
                num_periods_left_including_current: left,
                num_stones_left_in_period: if in_overtime { stones } else { 0 },
                time_left_in_period: if in_overtime { time } else { 0.0 },
                ..ClockState::canadian_or_byoyomi_time(
                    main_time,
                    period_time,
                    periods,
                    stones_per_period,
                )
            }
        })
}

fn arb_clock() -> impl Strategy<Value = ClockState> {
    prop_oneof![arb_fischer_or_absolute(), arb_byoyomi()]
}

fn arb_turns_left() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![25usize, 49, 81, 169, 361])
        .prop_flat_map(|area| (Just(area), 0..=area))
        .prop_map(|(area, stones)| estimate_turns_left(area, stones))
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 512, .. ProptestConfig::default() })]

    #[test]
    fn prop_budget_is_ordered(
        clock in arb_clock(),
        turns in arb_turns_left(),
        lag_buffer in 0.0f64..5.0,
    ) {
        prop_assert!(clock.validate().is_ok(), "generator produced {}", clock);
        let budget = allocate(&clock, turns, lag_buffer).unwrap();
        prop_assert!(budget.min_time >= 0.0);
        prop_assert!(budget.min_time <= budget.recommended_time, "{:?}", budget);
        prop_assert!(budget.recommended_time <= budget.max_time, "{:?}", budget);
        prop_assert!(budget.max_time.is_finite());
    }

    #[test]
    fn prop_lag_buffer_never_adds_time(time in 0.0f64..1.0e6, lag_buffer in 0.0f64..100.0) {
        let adjusted = apply_lag_buffer(time, lag_buffer);
        prop_assert!(adjusted <= time);
        prop_assert!(adjusted >= 0.0);
    }

    #[test]
    fn prop_lag_buffer_continuous_at_threshold(lag_buffer in 0.0f64..100.0) {
        prop_assert_eq!(apply_lag_buffer(2.0 * lag_buffer, lag_buffer), lag_buffer);
    }

    #[test]
    fn prop_turns_left_has_floor(area in 0usize..=441, stones in 0usize..=441) {
        let turns = estimate_turns_left(area, stones);
        prop_assert!(turns >= 20.0 + 0.10 * area as f64);
    }
}
