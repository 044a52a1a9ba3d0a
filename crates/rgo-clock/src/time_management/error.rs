//! Error types for time management

use std::fmt;

/// Which clock invariant a snapshot violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InconsistencyReason {
    /// In overtime, but the clock is Fischer or absolute
    InOvertimeWithoutPeriods,
    /// Periods left (or a negative period count) on a Fischer or absolute clock
    PeriodsWithFischerOrAbsolute,
    /// Byo-yomi periods configured with no stones per period
    NoStonesPerPeriod,
    /// In a byo-yomi period with no stones left to play in it
    NoStonesLeftInPeriod,
    /// A time quantity below zero
    NegativeTime,
}

impl fmt::Display for InconsistencyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InOvertimeWithoutPeriods => "in overtime with Fischer or absolute time",
            Self::PeriodsWithFischerOrAbsolute => {
                "periods left must be 0 with Fischer or absolute time"
            }
            Self::NoStonesPerPeriod => "stones per period must be positive with byo-yomi",
            Self::NoStonesLeftInPeriod => "no stones left in period while in overtime",
            Self::NegativeTime => "negative time value",
        };
        f.write_str(msg)
    }
}

/// Time management errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeControlError {
    /// Snapshot violates a clock invariant; the caller must fix the snapshot
    #[error("inconsistent time control: {0}")]
    InconsistentTimeControl(InconsistencyReason),
}

impl TimeControlError {
    /// The violated invariant
    pub fn reason(&self) -> InconsistencyReason {
        match self {
            Self::InconsistentTimeControl(reason) => *reason,
        }
    }
}

impl From<InconsistencyReason> for TimeControlError {
    fn from(reason: InconsistencyReason) -> Self {
        Self::InconsistentTimeControl(reason)
    }
}

/// Result type for time management operations
pub type TimeControlResult<T> = Result<T, TimeControlError>;
