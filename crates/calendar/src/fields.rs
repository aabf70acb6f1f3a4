//! Calendar field readers for the seasonal builders.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Returns the hour of day (0..=23).
pub fn hour_of_day(ts: NaiveDateTime) -> u32 {
    ts.hour()
}

/// Returns the day of week with Monday = 0 (0..=6).
pub fn day_of_week(ts: NaiveDateTime) -> u32 {
    ts.weekday().num_days_from_monday()
}

/// Returns the calendar quarter (1..=4).
pub fn quarter(ts: NaiveDateTime) -> u32 {
    (ts.month() - 1) / 3 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn hour_range() {
        assert_eq!(hour_of_day(at(2021, 7, 1, 0)), 0);
        assert_eq!(hour_of_day(at(2021, 7, 1, 23)), 23);
    }

    #[test]
    fn monday_is_zero() {
        // 2021-07-05 was a Monday
        assert_eq!(day_of_week(at(2021, 7, 5, 0)), 0);
        assert_eq!(day_of_week(at(2021, 7, 11, 0)), 6);
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(quarter(at(2021, 1, 1, 0)), 1);
        assert_eq!(quarter(at(2021, 3, 31, 0)), 1);
        assert_eq!(quarter(at(2021, 4, 1, 0)), 2);
        assert_eq!(quarter(at(2021, 6, 30, 0)), 2);
        assert_eq!(quarter(at(2021, 7, 1, 0)), 3);
        assert_eq!(quarter(at(2021, 10, 1, 0)), 4);
        assert_eq!(quarter(at(2021, 12, 31, 0)), 4);
    }
}
