//! Pointwise combination of the four signal components.

use crate::config::CompositionMode;
use crate::error::SimulateError;

/// Combines the four component sequences into one raw signal.
///
/// Elementwise sum under [`CompositionMode::Additive`], elementwise product
/// under [`CompositionMode::Multiplicative`]. All four sequences must have
/// the same length.
///
/// # Errors
///
/// Returns [`SimulateError::LengthMismatch`] when any sequence length
/// differs from the daily component's.
pub fn compose(
    daily: &[f64],
    weekly: &[f64],
    trend: &[f64],
    cyclic: &[f64],
    mode: CompositionMode,
) -> Result<Vec<f64>, SimulateError> {
    let n = daily.len();
    for (len, name) in [
        (weekly.len(), "weekly"),
        (trend.len(), "trend"),
        (cyclic.len(), "cyclic"),
    ] {
        if len != n {
            return Err(SimulateError::LengthMismatch {
                expected: n,
                got: len,
                field: name.to_string(),
            });
        }
    }

    let combined = (0..n)
        .map(|i| match mode {
            CompositionMode::Additive => daily[i] + weekly[i] + trend[i] + cyclic[i],
            CompositionMode::Multiplicative => daily[i] * weekly[i] * trend[i] * cyclic[i],
        })
        .collect();
    Ok(combined)
}
