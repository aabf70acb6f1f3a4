//! Batch-level metadata index.

use std::path::Path;

use serde::Serialize;

use crate::error::IoError;

/// One row of the dataset-level metadata index.
///
/// Describes how a single dataset in the batch was generated so experiments
/// can filter by configuration without re-parsing file names.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetMeta {
    /// Dataset identifier (the output file name).
    pub id: String,
    /// Combination arithmetic (`additive` or `multiplicative`).
    pub data_type: String,
    /// Whether daily seasonality was present.
    pub daily_seasonality: bool,
    /// Whether weekly seasonality was present.
    pub weekly_seasonality: bool,
    /// Noise amplitude class (`none`, `small`, or `large`).
    pub noise: String,
    /// Whether the trend component was present.
    pub trend: bool,
    /// Whether the quarterly cyclic component was present.
    pub cyclic_period: bool,
    /// Span of the generated range in days.
    pub data_size: i64,
    /// Fraction of points replaced by labeled outliers.
    pub percentage_outliers: f64,
    /// Fraction of points nulled (fixed by the generator).
    pub percentage_missing: f64,
    /// Sampling frequency specifier.
    pub freq: String,
}

/// Writes the metadata index for a whole batch.
///
/// # Errors
///
/// Returns I/O or CSV errors when the file cannot be written.
pub fn write_metadata(path: &Path, records: &[DatasetMeta]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
