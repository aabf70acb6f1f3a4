//! Error types for the aion-simulate crate.

use aion_calendar::CalendarError;

/// Error type for all fallible operations in the aion-simulate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulateError {
    /// Returned when the configured duration is negative.
    #[error("invalid duration: {days} days (must be >= 0)")]
    InvalidDuration {
        /// The invalid duration in days.
        days: i64,
    },

    /// Returned when a fraction parameter is outside [0, 1].
    #[error("invalid fraction for {field}: {value} (must be in [0, 1])")]
    InvalidFraction {
        /// Name of the offending parameter.
        field: String,
        /// The invalid value.
        value: f64,
    },

    /// Returned when the frequency yields no sample point beyond the start.
    #[error("frequency {frequency} yields {n_points} point(s) over the requested span (need at least 2)")]
    DegenerateIndex {
        /// Number of points the index would contain.
        n_points: usize,
        /// The configured frequency specifier.
        frequency: String,
    },

    /// Returned when component sequence lengths do not match.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched sequence.
        field: String,
    },

    /// Returned when a sample size exceeds the series length.
    #[error("cannot draw {requested} distinct indices from {available} points")]
    SampleTooLarge {
        /// Number of indices requested.
        requested: usize,
        /// Number of points available.
        available: usize,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_duration() {
        let e = SimulateError::InvalidDuration { days: -3 };
        assert!(e.to_string().contains("-3"));
    }

    #[test]
    fn display_invalid_fraction() {
        let e = SimulateError::InvalidFraction {
            field: "percentage_outliers".to_string(),
            value: 1.5,
        };
        assert!(e.to_string().contains("percentage_outliers"));
        assert!(e.to_string().contains("1.5"));
    }

    #[test]
    fn display_degenerate_index() {
        let e = SimulateError::DegenerateIndex {
            n_points: 1,
            frequency: "1D".to_string(),
        };
        assert!(e.to_string().contains("1D"));
    }

    #[test]
    fn display_length_mismatch() {
        let e = SimulateError::LengthMismatch {
            expected: 61,
            got: 60,
            field: "weekly".to_string(),
        };
        assert!(e.to_string().contains("61"));
        assert!(e.to_string().contains("weekly"));
    }

    #[test]
    fn display_sample_too_large() {
        let e = SimulateError::SampleTooLarge {
            requested: 10,
            available: 5,
        };
        assert!(e.to_string().contains("10"));
        assert!(e.to_string().contains("5"));
    }

    #[test]
    fn from_calendar_error() {
        let err = CalendarError::InvalidFrequency {
            spec: "1X".to_string(),
        };
        let e: SimulateError = err.into();
        assert!(matches!(e, SimulateError::Calendar(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SimulateError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SimulateError>();
    }
}
