//! Timestamp sequence generation.

use chrono::{NaiveDateTime, TimeDelta};

use crate::frequency::Frequency;

/// Generates the ordered timestamp index for one dataset.
///
/// Produces every timestamp from `start` to `start + duration_days`,
/// inclusive of both endpoints, stepped by `freq`. A daily frequency over a
/// 10-day span therefore yields 11 points. A negative span yields an empty
/// sequence; callers reject that before building any signal component.
///
/// # Example
///
/// ```ignore
/// let freq: Frequency = "1D".parse().unwrap();
/// let start = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap().into();
/// let index = date_sequence(start, 10, &freq);
/// assert_eq!(index.len(), 11);
/// ```
pub fn date_sequence(start: NaiveDateTime, duration_days: i64, freq: &Frequency) -> Vec<NaiveDateTime> {
    let end = start + TimeDelta::days(duration_days);
    if end < start {
        return Vec::new();
    }

    let span = (end - start).num_seconds();
    let step = freq.step().num_seconds();
    let mut index = Vec::with_capacity((span / step + 1) as usize);

    let mut current = start;
    while current <= end {
        index.push(current);
        current += freq.step();
    }
    index
}
