//! Index sampling without replacement.

use rand::Rng;

use crate::error::SimulateError;

/// Draws `k` distinct indices uniformly at random from `0..n`.
///
/// Partial Fisher-Yates shuffle: only the first `k` slots are settled.
///
/// # Errors
///
/// Returns [`SimulateError::SampleTooLarge`] when `k > n`.
pub fn sample_indices(n: usize, k: usize, rng: &mut impl Rng) -> Result<Vec<usize>, SimulateError> {
    if k > n {
        return Err(SimulateError::SampleTooLarge {
            requested: k,
            available: n,
        });
    }
    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }
    pool.truncate(k);
    Ok(pool)
}
