//! Extracts `(TimeKey, value)` pairs from the raw record shapes.
//!
//! Records with a missing value field count as 0 and are kept; records
//! whose time fields cannot form a valid key are malformed and dropped
//! with a logged diagnostic.

use wld_core::record::{RawDayBucket, RawHourlyRecord, RawMonthlyRecord};
use wld_core::time_key::TimeKey;

/// Key single-day hourly records by hour of day.
pub fn normalize_hourly(records: &[RawHourlyRecord]) -> Vec<(TimeKey, f64)> {
    let mut pairs = Vec::with_capacity(records.len());
    for record in records {
        match TimeKey::hourly(record.hour) {
            Ok(key) => pairs.push((key, record.value())),
            Err(err) => log::warn!("dropping malformed hourly record: {err}"),
        }
    }
    pairs
}

/// Flatten period day-buckets into one reading list, sort it by calendar
/// date (then hour) ascending, and key by the full date + hour.
pub fn normalize_period(buckets: &[RawDayBucket]) -> Vec<(TimeKey, f64)> {
    let mut readings: Vec<_> = buckets
        .iter()
        .flat_map(|bucket| bucket.readings.iter())
        .collect();
    readings.sort_by_key(|reading| (reading.date, reading.hour));

    let mut pairs = Vec::with_capacity(readings.len());
    for reading in readings {
        match TimeKey::period(reading.date, reading.hour) {
            Ok(key) => pairs.push((key, reading.value())),
            Err(err) => log::warn!("dropping malformed period reading: {err}"),
        }
    }
    pairs
}

/// Sort monthly records by month number ascending and key by month name.
pub fn normalize_monthly(records: &[RawMonthlyRecord]) -> Vec<(TimeKey, f64)> {
    let mut sorted: Vec<_> = records.iter().collect();
    sorted.sort_by_key(|record| record.month);

    let mut pairs = Vec::with_capacity(sorted.len());
    for record in sorted {
        match TimeKey::monthly(record.month) {
            Ok(key) => pairs.push((key, record.value())),
            Err(err) => log::warn!("dropping malformed monthly record: {err}"),
        }
    }
    pairs
}
