//! The four independent signal component builders.
//!
//! Each builder produces one sequence aligned with the timestamp index. A
//! disabled component is filled with the neutral element of the configured
//! combination arithmetic so it drops out of the composition.

use std::f64::consts::TAU;

use aion_calendar::{day_of_week, hour_of_day, quarter};
use chrono::NaiveDateTime;
use rand::Rng;

use crate::config::CompositionMode;

/// Days per month used to convert the span into the trend amplitude.
const DAYS_PER_MONTH: f64 = 30.0;

fn neutral(n: usize, mode: CompositionMode) -> Vec<f64> {
    vec![mode.neutral(); n]
}

fn seasonal_offset(mode: CompositionMode) -> f64 {
    // Keeps multiplicative factors centered near 1 instead of oscillating
    // through 0.
    match mode {
        CompositionMode::Additive => 0.0,
        CompositionMode::Multiplicative => 1.0,
    }
}

/// Builds the hour-of-day seasonal component: `sin(2π · hour / 24)`.
pub fn daily_component(index: &[NaiveDateTime], enabled: bool, mode: CompositionMode) -> Vec<f64> {
    if !enabled {
        return neutral(index.len(), mode);
    }
    let offset = seasonal_offset(mode);
    index
        .iter()
        .map(|&ts| (TAU * f64::from(hour_of_day(ts)) / 24.0).sin() + offset)
        .collect()
}

/// Builds the day-of-week seasonal component: `sin(2π · dow / 7)`, Monday = 0.
pub fn weekly_component(index: &[NaiveDateTime], enabled: bool, mode: CompositionMode) -> Vec<f64> {
    if !enabled {
        return neutral(index.len(), mode);
    }
    let offset = seasonal_offset(mode);
    index
        .iter()
        .map(|&ts| (TAU * f64::from(day_of_week(ts)) / 7.0).sin() + offset)
        .collect()
}

/// Builds the quarterly cyclic component: `sin(2π · (quarter − 1) / 4)`.
pub fn cyclic_component(index: &[NaiveDateTime], enabled: bool, mode: CompositionMode) -> Vec<f64> {
    if !enabled {
        return neutral(index.len(), mode);
    }
    let offset = seasonal_offset(mode);
    index
        .iter()
        .map(|&ts| (TAU * (f64::from(quarter(ts)) - 1.0) / 4.0).sin() + offset)
        .collect()
}

/// Builds the linear trend component.
///
/// The slope sign is drawn uniformly from {+1, −1}. A rising trend ramps
/// from 0 to `duration / 30`; a falling trend ramps from `−duration / 30`
/// to 0, so the trend always touches zero at one end and its extremum at
/// the other. The amplitude grows with the span in months.
pub fn trend_component(
    n: usize,
    duration_days: i64,
    enabled: bool,
    mode: CompositionMode,
    rng: &mut impl Rng,
) -> Vec<f64> {
    if !enabled {
        return neutral(n, mode);
    }
    let amplitude = duration_days as f64 / DAYS_PER_MONTH;
    let (from, to) = if rng.random_bool(0.5) {
        (0.0, amplitude)
    } else {
        (-amplitude, 0.0)
    };
    linspace(from, to, n)
}

/// Returns `n` evenly spaced values from `from` to `to` inclusive.
fn linspace(from: f64, to: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![from; n];
    }
    let step = (to - from) / (n - 1) as f64;
    (0..n).map(|i| from + step * i as f64).collect()
}
