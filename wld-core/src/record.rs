use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which chart the raw data feeds: one day of hourly readings, a
/// multi-day period, or a year of monthly aggregates.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ChartMethod {
    Hourly,
    Period,
    Monthly,
}

/// One hourly reading for a single day.
///
/// The station API is inconsistent about the value field: some endpoints
/// send an instantaneous "Surface" reading, others only an already-averaged
/// "AvgSurface". `value()` prefers the instantaneous one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHourlyRecord {
    #[serde(alias = "Hour")]
    pub hour: u32,
    #[serde(alias = "Surface", default)]
    pub surface: Option<f64>,
    #[serde(alias = "AvgSurface", default)]
    pub avg_surface: Option<f64>,
}

impl RawHourlyRecord {
    /// Instantaneous reading if present, averaged fallback otherwise.
    /// A record with neither field counts as 0 rather than being dropped.
    pub fn value(&self) -> f64 {
        self.surface.or(self.avg_surface).unwrap_or(0.0)
    }
}

/// One hourly reading inside a day bucket of a period response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPeriodReading {
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    #[serde(alias = "Hour")]
    pub hour: u32,
    #[serde(alias = "Surface", default)]
    pub surface: Option<f64>,
}

impl RawPeriodReading {
    pub fn value(&self) -> f64 {
        self.surface.unwrap_or(0.0)
    }
}

/// A day bucket of a period response. Buckets hold a nested list of
/// readings and must be flattened before aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDayBucket {
    #[serde(alias = "Readings", default)]
    pub readings: Vec<RawPeriodReading>,
}

/// One monthly aggregate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMonthlyRecord {
    #[serde(alias = "Month")]
    pub month: u32,
    #[serde(alias = "Surface", default)]
    pub surface: Option<f64>,
}

impl RawMonthlyRecord {
    pub fn value(&self) -> f64 {
        self.surface.unwrap_or(0.0)
    }
}

/// One predicted reading from the forecast service. Arrives as a flat
/// array, not necessarily sorted or trimmed to the chart window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecastRecord {
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    #[serde(alias = "Hour")]
    pub hour: u32,
    #[serde(alias = "Surface", default)]
    pub surface: Option<f64>,
}

impl RawForecastRecord {
    pub fn value(&self) -> f64 {
        self.surface.unwrap_or(0.0)
    }

    /// A forecast entry is usable when its hour is a real hour of day and
    /// its value, if present, is finite. The date is already typed, so an
    /// unparseable date never gets this far.
    pub fn is_valid(&self) -> bool {
        self.hour <= 23 && self.surface.map_or(true, f64::is_finite)
    }
}
