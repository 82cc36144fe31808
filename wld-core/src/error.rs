use std::fmt;

/// Errors raised when building chart keys from raw record fields.
///
/// The transform pipeline itself never surfaces these to callers: a record
/// that fails key construction is dropped with a logged diagnostic.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChartDataError {
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Month outside 1..=12.
    InvalidMonth(u32),
}

impl fmt::Display for ChartDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartDataError::InvalidHour(hour) => write!(f, "invalid hour of day: {hour}"),
            ChartDataError::InvalidMonth(month) => write!(f, "invalid month number: {month}"),
        }
    }
}

impl std::error::Error for ChartDataError {}
