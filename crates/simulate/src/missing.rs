//! Missing-value injection.

use rand::Rng;

use crate::error::SimulateError;
use crate::sample::sample_indices;

/// Fraction of points nulled to simulate incomplete collection.
pub const MISSING_RATE: f64 = 0.05;

/// Nulls out a random subset of points.
///
/// `floor(N · rate)` distinct indices are drawn without replacement,
/// independently of the outlier draw, and may therefore land on labeled
/// outliers; the anomaly mask is left untouched either way. The rest of
/// the series passes through as `Some`.
///
/// # Errors
///
/// Returns [`SimulateError::InvalidFraction`] when `rate` is outside [0, 1].
pub fn inject_missing(
    values: &[f64],
    rate: f64,
    rng: &mut impl Rng,
) -> Result<Vec<Option<f64>>, SimulateError> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(SimulateError::InvalidFraction {
            field: "percentage_missing".to_string(),
            value: rate,
        });
    }

    let n = values.len();
    let count = (n as f64 * rate).floor() as usize;
    let chosen = sample_indices(n, count, rng)?;

    let mut output: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    for idx in chosen {
        output[idx] = None;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn count_missing(values: &[Option<f64>]) -> usize {
        values.iter().filter(|v| v.is_none()).count()
    }

    #[test]
    fn count_is_floor_of_rate() {
        let values = vec![1.0; 61];
        let mut rng = StdRng::seed_from_u64(1);
        let output = inject_missing(&values, MISSING_RATE, &mut rng).unwrap();
        // floor(61 * 0.05) = 3
        assert_eq!(count_missing(&output), 3);
    }

    #[test]
    fn short_series_floors_to_zero() {
        let values = vec![1.0; 11];
        let mut rng = StdRng::seed_from_u64(2);
        let output = inject_missing(&values, MISSING_RATE, &mut rng).unwrap();
        assert_eq!(count_missing(&output), 0);
        assert!(output.iter().all(|v| v.is_some()));
    }

    #[test]
    fn surviving_values_are_unchanged() {
        let values: Vec<f64> = (0..40).map(|i| i as f64 * 0.5).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let output = inject_missing(&values, 0.25, &mut rng).unwrap();
        for (i, v) in output.iter().enumerate() {
            if let Some(v) = v {
                assert_eq!(*v, values[i]);
            }
        }
    }

    #[test]
    fn zero_rate_keeps_everything() {
        let values = [0.1, 0.2];
        let mut rng = StdRng::seed_from_u64(4);
        let output = inject_missing(&values, 0.0, &mut rng).unwrap();
        assert_eq!(output, vec![Some(0.1), Some(0.2)]);
    }

    #[test]
    fn invalid_rate_fails() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            inject_missing(&[1.0], 1.5, &mut rng),
            Err(SimulateError::InvalidFraction { .. })
        ));
    }

    #[test]
    fn deterministic_with_seed() {
        let values = vec![1.0; 100];
        let a = inject_missing(&values, 0.05, &mut StdRng::seed_from_u64(8)).unwrap();
        let b = inject_missing(&values, 0.05, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a, b);
    }
}
