use crate::dates;
use crate::error::ChartDataError;
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::fmt;

/// The x-axis position a group of readings aggregates into.
///
/// Keys are typed rather than stringly so that sorting compares the
/// represented instant: hour of day for hourly charts, (date, hour) for
/// multi-day period charts, month number for monthly charts. The legacy
/// string form of each key is its `Display` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeKey {
    Hourly { hour: u32 },
    Period { date: NaiveDate, hour: u32 },
    Monthly { month: u32 },
}

impl TimeKey {
    pub fn hourly(hour: u32) -> Result<Self, ChartDataError> {
        if hour > 23 {
            return Err(ChartDataError::InvalidHour(hour));
        }
        Ok(TimeKey::Hourly { hour })
    }

    pub fn period(date: NaiveDate, hour: u32) -> Result<Self, ChartDataError> {
        if hour > 23 {
            return Err(ChartDataError::InvalidHour(hour));
        }
        Ok(TimeKey::Period { date, hour })
    }

    pub fn monthly(month: u32) -> Result<Self, ChartDataError> {
        if !(1..=12).contains(&month) {
            return Err(ChartDataError::InvalidMonth(month));
        }
        Ok(TimeKey::Monthly { month })
    }

    /// Hour of day, when the key carries one.
    pub fn hour(&self) -> Option<u32> {
        match self {
            TimeKey::Hourly { hour } | TimeKey::Period { hour, .. } => Some(*hour),
            TimeKey::Monthly { .. } => None,
        }
    }

    /// Calendar date, when the key carries one.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            TimeKey::Period { date, .. } => Some(*date),
            _ => None,
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            TimeKey::Hourly { .. } => 0,
            TimeKey::Period { .. } => 1,
            TimeKey::Monthly { .. } => 2,
        }
    }
}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TimeKey::Hourly { hour: a }, TimeKey::Hourly { hour: b }) => a.cmp(b),
            (
                TimeKey::Period { date: da, hour: ha },
                TimeKey::Period { date: db, hour: hb },
            ) => da.cmp(db).then(ha.cmp(hb)),
            (TimeKey::Monthly { month: a }, TimeKey::Monthly { month: b }) => a.cmp(b),
            // Mixed variants never occur within one aggregation pass
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }
}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeKey::Hourly { hour } => write!(f, "{}", dates::format_hour(*hour)),
            TimeKey::Period { date, hour } => {
                let month = dates::month_name(date.month()).unwrap_or("?");
                write!(
                    f,
                    "{} {} {} {}",
                    date.day(),
                    month,
                    date.year(),
                    dates::format_hour(*hour)
                )
            }
            TimeKey::Monthly { month } => {
                write!(f, "{}", dates::month_abbrev(*month).unwrap_or("?"))
            }
        }
    }
}
