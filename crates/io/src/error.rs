//! Error types for the aion-io crate.

/// Error type for all fallible operations in the aion-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Wraps a filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wraps an error from the CSV writer.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Returned when the sequences of one dataset disagree in length.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched sequence.
        field: String,
    },
}
