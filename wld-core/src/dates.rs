//! Date and label formatting shared by the WLD crates.

use chrono::{Datelike, NaiveDate};

/// Date format used by the station API: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Full month names, indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter month names, indexed by month number minus one.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Three-letter name for a 1-based month number.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    MONTH_ABBREVS.get(month.checked_sub(1)? as usize).copied()
}

/// Format an hour-of-day as "HH:00". Readings are hourly, so minutes
/// are always zero.
pub fn format_hour(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// Format a NaiveDate as "D MonthName YYYY", e.g. "3 March 2026".
pub fn long_date(date: &NaiveDate) -> String {
    let name = month_name(date.month()).unwrap_or("?");
    format!("{} {} {}", date.day(), name, date.year())
}

/// Format a NaiveDate as "D Mon", e.g. "3 Mar".
pub fn short_day_month(date: &NaiveDate) -> String {
    let name = month_abbrev(date.month()).unwrap_or("?");
    format!("{} {}", date.day(), name)
}

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}
