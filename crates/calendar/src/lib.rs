//! # aion-calendar
//!
//! Sampling frequencies and timestamp sequence generation.
//!
//! A [`Frequency`] is parsed from a pandas-style offset string (`"1D"`,
//! `"10T"`, `"6H"`, ...) and [`date_sequence`] expands a start date and a
//! span in days into the ordered timestamp index that carries the rest of
//! the generation pipeline. The field readers ([`hour_of_day`],
//! [`day_of_week`], [`quarter`]) expose the calendar components the
//! seasonal builders key on.
//!
//! ## Quick Start
//!
//! ```ignore
//! use aion_calendar::{Frequency, date_sequence, quarter};
//! use chrono::NaiveDate;
//!
//! let freq: Frequency = "1D".parse().unwrap();
//! let start = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap().into();
//! let index = date_sequence(start, 10, &freq);
//! assert_eq!(index.len(), 11); // both endpoints inclusive
//! assert_eq!(quarter(index[0]), 3);
//! ```

mod error;
mod fields;
mod frequency;
mod sequence;

pub use error::CalendarError;
pub use fields::{day_of_week, hour_of_day, quarter};
pub use frequency::Frequency;
pub use sequence::date_sequence;
