//! Labeled outlier injection.

use rand::Rng;

use crate::error::SimulateError;
use crate::sample::sample_indices;

/// Series and anomaly labels after outlier injection.
#[derive(Debug, Clone)]
pub struct OutlierResult {
    /// Series with outliers substituted in.
    values: Vec<f64>,
    /// True exactly at the replaced positions.
    mask: Vec<bool>,
}

impl OutlierResult {
    /// Creates a new outlier result.
    pub fn new(values: Vec<f64>, mask: Vec<bool>) -> Self {
        Self { values, mask }
    }

    /// Returns the series with outliers substituted in.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the anomaly mask.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Returns the number of injected outliers.
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&flagged| flagged).count()
    }

    /// Consumes self and returns the owned series and mask.
    pub fn into_parts(self) -> (Vec<f64>, Vec<bool>) {
        (self.values, self.mask)
    }
}

/// Replaces a random subset of points with out-of-distribution values.
///
/// `floor(N · fraction)` distinct indices are drawn without replacement;
/// each chosen point is overwritten with an independent `Uniform(−1, 1)`
/// draw and flagged in the anomaly mask. A fraction small enough that the
/// count floors to zero leaves the series untouched and the mask all-false.
///
/// # Errors
///
/// Returns [`SimulateError::InvalidFraction`] when `fraction` is outside
/// [0, 1].
pub fn inject_outliers(
    values: &[f64],
    fraction: f64,
    rng: &mut impl Rng,
) -> Result<OutlierResult, SimulateError> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(SimulateError::InvalidFraction {
            field: "percentage_outliers".to_string(),
            value: fraction,
        });
    }

    let n = values.len();
    let count = (n as f64 * fraction).floor() as usize;
    let chosen = sample_indices(n, count, rng)?;

    let mut output = values.to_vec();
    let mut mask = vec![false; n];
    for idx in chosen {
        output[idx] = rng.random_range(-1.0..1.0);
        mask[idx] = true;
    }
    Ok(OutlierResult::new(output, mask))
}
