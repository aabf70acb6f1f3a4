//! Heteroscedastic noise injection.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::config::NoiseLevel;

/// Adds value-proportional Gaussian noise to each point.
///
/// Each point receives an independent perturbation with mean 0 and standard
/// deviation `|value| · multiplier`, so noise scales with the current
/// magnitude and points near zero stay near-quiet even at
/// [`NoiseLevel::Large`]. At [`NoiseLevel::None`] no draw occurs and the
/// input is returned unchanged.
pub fn inject_noise(values: &[f64], level: NoiseLevel, rng: &mut impl Rng) -> Vec<f64> {
    let multiplier = level.multiplier();
    if multiplier == 0.0 {
        return values.to_vec();
    }
    values
        .iter()
        .map(|&v| {
            let z: f64 = rng.sample(StandardNormal);
            v + z * v.abs() * multiplier
        })
        .collect()
}
