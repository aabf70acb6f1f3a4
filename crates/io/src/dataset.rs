//! Per-dataset CSV writer.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::IoError;

/// Format written into the timestamp column.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One output row: value, timestamp, anomaly label.
#[derive(Debug, Serialize)]
struct Row<'a> {
    /// Signal value; empty cell for a missing point.
    value: Option<f64>,
    /// Formatted timestamp.
    timestamp: &'a str,
    /// Anomaly label.
    anomaly: bool,
}

/// Writes one generated dataset to a CSV file.
///
/// Columns are `value,timestamp,anomaly`; a missing point serialises as an
/// empty value cell while keeping its timestamp and label.
///
/// # Errors
///
/// Returns [`IoError::LengthMismatch`] when the three sequences disagree in
/// length, and I/O or CSV errors when the file cannot be written.
pub fn write_dataset(
    path: &Path,
    values: &[Option<f64>],
    timestamps: &[NaiveDateTime],
    anomaly_mask: &[bool],
) -> Result<(), IoError> {
    let n = values.len();
    for (len, name) in [
        (timestamps.len(), "timestamps"),
        (anomaly_mask.len(), "anomaly_mask"),
    ] {
        if len != n {
            return Err(IoError::LengthMismatch {
                expected: n,
                got: len,
                field: name.to_string(),
            });
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for i in 0..n {
        let timestamp = timestamps[i].format(TIMESTAMP_FORMAT).to_string();
        writer.serialize(Row {
            value: values[i],
            timestamp: &timestamp,
            anomaly: anomaly_mask[i],
        })?;
    }
    writer.flush()?;
    Ok(())
}
