//! Error types for the aion-calendar crate.

/// Error type for all fallible operations in the aion-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a frequency string cannot be parsed into a sampling step.
    #[error("invalid frequency: {spec:?} (expected <n><unit> with unit D, H, T/min, or S)")]
    InvalidFrequency {
        /// The offending frequency specifier.
        spec: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_frequency() {
        let err = CalendarError::InvalidFrequency {
            spec: "1X".to_string(),
        };
        assert!(err.to_string().contains("1X"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
