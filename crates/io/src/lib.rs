//! # aion-io
//!
//! Write generated datasets and the batch-level metadata index to CSV.
//! Bridges the in-memory triples produced by `aion-simulate` into the
//! on-disk layout consumed by downstream anomaly-detection experiments:
//! one `value,timestamp,anomaly` file per dataset plus one `meta_data.csv`
//! describing every dataset in the batch.

mod dataset;
mod error;
mod metadata;

pub use dataset::write_dataset;
pub use error::IoError;
pub use metadata::{DatasetMeta, write_metadata};
