use serde::{Deserialize, Serialize};

/// Fixed vertical pixel shift applied to point labels so they clear the
/// line stroke. Presentation hint only, not part of the data.
pub const LABEL_SHIFT: f64 = -10.0;

/// One render-ready chart point. Plain data: the rendering layer maps the
/// flags and label text to visual components on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub value: f64,
    pub label: String,
    pub is_actual: bool,
    pub is_forecast: bool,
    /// Position in the final sequence. Actual points use their array index;
    /// forecast points are offset so they always sort after all actual data.
    pub sort_order: u32,
    pub hour: Option<u32>,
    /// Full date for tooltip display, e.g. "2 March 2026".
    pub display_date: Option<String>,
    /// Time of day for tooltip display, e.g. "14:00".
    pub display_time: Option<String>,
    /// True for forecast points whose date has rolled past the day of the
    /// last actual reading.
    pub next_day: bool,
    pub label_shift: f64,
    /// Height of the value strip under the point, equal to the value.
    pub strip_height: f64,
}

impl ChartPoint {
    /// A measured (sensor) point.
    pub fn actual(value: f64, label: String, sort_order: u32) -> Self {
        ChartPoint {
            value,
            label,
            is_actual: true,
            is_forecast: false,
            sort_order,
            hour: None,
            display_date: None,
            display_time: None,
            next_day: false,
            label_shift: LABEL_SHIFT,
            strip_height: value,
        }
    }

    /// A predicted point.
    pub fn forecast(value: f64, label: String, sort_order: u32) -> Self {
        ChartPoint {
            value,
            label,
            is_actual: false,
            is_forecast: true,
            sort_order,
            hour: None,
            display_date: None,
            display_time: None,
            next_day: false,
            label_shift: LABEL_SHIFT,
            strip_height: value,
        }
    }
}
