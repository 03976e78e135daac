use thiserror::Error;

/// Recurrence validation and expansion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurError {
    #[error("Invalid interval: must be a positive integer")]
    InvalidInterval,

    #[error("Invalid day of week: {0} (expected 0-6, Sunday first)")]
    InvalidDayOfWeek(u8),

    #[error("Invalid occurrence count: endAfterOccurrences must be positive")]
    InvalidOccurrenceCount,

    #[error("Expansion exceeded the limit of {0} candidate dates")]
    IterationLimitExceeded(usize),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("RRule error: {0}")]
    RRuleError(String),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
