//! Lag buffer handling

/// Shrink `time` to leave room for network and GUI delay.
///
/// Short times are halved instead of going negative. Both branches meet at
/// `time == 2 * lag_buffer`.
#[must_use]
#[inline]
pub fn apply_lag_buffer(time: f64, lag_buffer: f64) -> f64 {
    if time < 2.0 * lag_buffer {
        time * 0.5
    } else {
        time - lag_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtracts_when_time_is_plentiful() {
        assert_eq!(apply_lag_buffer(10.0, 1.0), 9.0);
        assert_eq!(apply_lag_buffer(5.0, 0.0), 5.0);
    }

    #[test]
    fn test_halves_when_time_is_short() {
        assert_eq!(apply_lag_buffer(1.0, 1.0), 0.5);
        assert_eq!(apply_lag_buffer(0.0, 3.0), 0.0);
    }

    #[test]
    fn test_continuous_at_threshold() {
        let lag = 0.75;
        assert_eq!(apply_lag_buffer(2.0 * lag, lag), lag);
        // Just below the threshold the halving branch is taken
        let below = 2.0 * lag - 1e-9;
        assert!((apply_lag_buffer(below, lag) - lag).abs() < 1e-8);
    }
}
