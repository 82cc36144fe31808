//! Collapses same-key pairs by summing and orders the result by the
//! represented instant.
//!
//! The series is an explicitly ordered list of pairs, never a hash map:
//! downstream point building depends on iteration order.

use wld_core::time_key::TimeKey;

/// An aggregated, instant-ordered series of `(TimeKey, value)` pairs with
/// unique keys.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySeries(pub Vec<(TimeKey, f64)>);

impl KeySeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (TimeKey, f64)> {
        self.0.iter()
    }
}

/// Sort pairs by key instant (stable, so equal keys keep input order),
/// then fold left to right summing values at equal keys.
pub fn aggregate(pairs: Vec<(TimeKey, f64)>) -> KeySeries {
    let mut sorted = pairs;
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut series: Vec<(TimeKey, f64)> = Vec::with_capacity(sorted.len());
    for (key, value) in sorted {
        match series.last_mut() {
            Some((last_key, total)) if *last_key == key => *total += value,
            _ => series.push((key, value)),
        }
    }
    KeySeries(series)
}

impl From<Vec<(TimeKey, f64)>> for KeySeries {
    fn from(pairs: Vec<(TimeKey, f64)>) -> Self {
        aggregate(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_duplicate_keys_sum() {
        let key = TimeKey::hourly(8).unwrap();
        let other = TimeKey::hourly(9).unwrap();
        let series = aggregate(vec![(key, 1.5), (other, 2.0), (key, 0.5)]);
        assert_eq!(series.0, vec![(key, 2.0), (other, 2.0)]);
    }

    #[test]
    fn test_sum_is_preserved() {
        let keys = [
            TimeKey::hourly(3).unwrap(),
            TimeKey::hourly(3).unwrap(),
            TimeKey::hourly(7).unwrap(),
            TimeKey::hourly(12).unwrap(),
        ];
        let pairs: Vec<_> = keys.iter().map(|key| (*key, 1.25)).collect();
        let input_total: f64 = pairs.iter().map(|(_, value)| value).sum();
        let series = aggregate(pairs);
        let output_total: f64 = series.iter().map(|(_, value)| value).sum();
        assert_eq!(input_total, output_total);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_output_is_instant_ordered() {
        let jan_10 = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let jan_2 = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let late = TimeKey::period(jan_10, 0).unwrap();
        let early = TimeKey::period(jan_2, 12).unwrap();
        let series = aggregate(vec![(late, 1.0), (early, 2.0)]);
        assert_eq!(series.0[0].0, early);
        assert_eq!(series.0[1].0, late);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(Vec::new()).is_empty());
    }
}
