use aion_calendar::{Frequency, date_sequence, day_of_week, hour_of_day, quarter};
use chrono::NaiveDate;

fn start(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn ten_days_daily_yields_eleven_points() {
    let freq: Frequency = "1D".parse().unwrap();
    let index = date_sequence(start(2021, 7, 1), 10, &freq);
    assert_eq!(index.len(), 11);
    assert_eq!(index[0], start(2021, 7, 1));
    assert_eq!(*index.last().unwrap(), start(2021, 7, 11));
}

#[test]
fn sixty_days_daily_yields_sixty_one_points() {
    let freq: Frequency = "1D".parse().unwrap();
    let index = date_sequence(start(2021, 7, 1), 60, &freq);
    assert_eq!(index.len(), 61);
}

#[test]
fn subdaily_index_carries_hours() {
    let freq: Frequency = "6H".parse().unwrap();
    let index = date_sequence(start(2021, 7, 1), 2, &freq);
    assert_eq!(index.len(), 9);
    let hours: Vec<u32> = index.iter().map(|&ts| hour_of_day(ts)).collect();
    assert_eq!(hours, vec![0, 6, 12, 18, 0, 6, 12, 18, 0]);
}

#[test]
fn daily_index_walks_weekdays() {
    let freq: Frequency = "1D".parse().unwrap();
    // 2021-07-05 was a Monday
    let index = date_sequence(start(2021, 7, 5), 6, &freq);
    let dows: Vec<u32> = index.iter().map(|&ts| day_of_week(ts)).collect();
    assert_eq!(dows, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn index_crosses_quarter_boundary() {
    let freq: Frequency = "1D".parse().unwrap();
    let index = date_sequence(start(2021, 3, 30), 3, &freq);
    let quarters: Vec<u32> = index.iter().map(|&ts| quarter(ts)).collect();
    assert_eq!(quarters, vec![1, 1, 2, 2]);
}

#[test]
fn parse_all_supported_offsets() {
    for spec in ["1D", "10T", "30T", "1H", "6H", "8H"] {
        let freq: Frequency = spec.parse().unwrap();
        assert!(freq.step().num_seconds() > 0, "step for {spec}");
        assert_eq!(freq.as_str(), spec);
    }
}
