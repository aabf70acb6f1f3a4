//! Result types for the generation pipeline.

use chrono::NaiveDateTime;

/// The complete output of one generation call.
///
/// All three sequences have the same length and positional alignment.
/// Missing points are `None` in the value sequence; their anomaly labels,
/// if any, are preserved.
#[derive(Debug, Clone)]
pub struct GeneratedSeries {
    /// Final signal; `None` marks a missing point.
    values: Vec<Option<f64>>,
    /// Timestamp index.
    timestamps: Vec<NaiveDateTime>,
    /// True exactly at injected-outlier positions.
    anomaly_mask: Vec<bool>,
}

impl GeneratedSeries {
    /// Creates a new generated series.
    pub fn new(
        values: Vec<Option<f64>>,
        timestamps: Vec<NaiveDateTime>,
        anomaly_mask: Vec<bool>,
    ) -> Self {
        Self {
            values,
            timestamps,
            anomaly_mask,
        }
    }

    /// Returns the final signal.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Returns the timestamp index.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Returns the anomaly mask.
    pub fn anomaly_mask(&self) -> &[bool] {
        &self.anomaly_mask
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the series has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of labeled anomalies.
    pub fn n_anomalies(&self) -> usize {
        self.anomaly_mask.iter().filter(|&&flagged| flagged).count()
    }

    /// Returns the number of missing points.
    pub fn n_missing(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Consumes self and returns the owned sequences.
    pub fn into_parts(self) -> (Vec<Option<f64>>, Vec<NaiveDateTime>, Vec<bool>) {
        (self.values, self.timestamps, self.anomaly_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamps(n: usize) -> Vec<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(2021, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (0..n).map(|i| start + chrono::TimeDelta::days(i as i64)).collect()
    }

    #[test]
    fn accessors() {
        let series = GeneratedSeries::new(
            vec![Some(0.5), None, Some(-0.2)],
            stamps(3),
            vec![false, true, false],
        );
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.n_anomalies(), 1);
        assert_eq!(series.n_missing(), 1);
        assert_eq!(series.values()[0], Some(0.5));
        assert!(series.anomaly_mask()[1]);
    }

    #[test]
    fn into_parts_round_trip() {
        let timestamps = stamps(2);
        let series = GeneratedSeries::new(
            vec![Some(1.0), Some(2.0)],
            timestamps.clone(),
            vec![false, false],
        );
        let (values, ts, mask) = series.into_parts();
        assert_eq!(values, vec![Some(1.0), Some(2.0)]);
        assert_eq!(ts, timestamps);
        assert_eq!(mask, vec![false, false]);
    }
}
