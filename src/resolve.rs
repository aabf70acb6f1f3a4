//! Resolution of the YAML option space into one concrete configuration.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;

use aion_calendar::Frequency;
use aion_simulate::{CompositionMode, NoiseLevel, SimConfig};

use crate::config::{DataTypeOption, NoiseOption, SpaceConfig};

/// Format of `start_date` in the YAML configuration.
const START_DATE_FORMAT: &str = "%d-%m-%Y";

fn choose<'a, T>(options: &'a [T], name: &str, rng: &mut impl Rng) -> Result<&'a T> {
    options
        .choose(rng)
        .ok_or_else(|| anyhow!("option list '{name}' is empty"))
}

/// Draws one concrete [`SimConfig`] from the option space.
///
/// Every option list contributes one uniformly chosen element; the start
/// date and frequency strings are parsed and validated here so a broken
/// configuration fails before any dataset is generated.
pub fn resolve(space: &SpaceConfig, rng: &mut impl Rng) -> Result<SimConfig> {
    let start_date = NaiveDate::parse_from_str(&space.start_date, START_DATE_FORMAT)
        .with_context(|| format!("invalid start_date {:?} (expected DD-MM-YYYY)", space.start_date))?;

    let duration = *choose(&space.data_sizes, "data_sizes", rng)?;
    let frequency: Frequency = choose(&space.frequencies, "frequencies", rng)?
        .parse()
        .context("invalid frequency option")?;

    let daily = *choose(&space.daily_seasonality_options, "daily_seasonality_options", rng)?;
    let weekly = *choose(&space.weekly_seasonality_options, "weekly_seasonality_options", rng)?;
    let trend = *choose(&space.trend_options, "trend_options", rng)?;
    let cyclic = *choose(&space.cyclic_options, "cyclic_options", rng)?;

    let noise = match choose(&space.noise_levels, "noise_levels", rng)? {
        NoiseOption::None => NoiseLevel::None,
        NoiseOption::Small => NoiseLevel::Small,
        NoiseOption::Large => NoiseLevel::Large,
    };
    let mode = match choose(&space.data_types, "data_types", rng)? {
        DataTypeOption::Additive => CompositionMode::Additive,
        DataTypeOption::Multiplicative => CompositionMode::Multiplicative,
    };
    let outliers = *choose(
        &space.percentage_outliers_options,
        "percentage_outliers_options",
        rng,
    )?;

    Ok(SimConfig::new(start_date, duration, frequency)
        .with_daily_seasonality(daily)
        .with_weekly_seasonality(weekly)
        .with_trend(trend)
        .with_cyclic(cyclic)
        .with_noise(noise)
        .with_mode(mode)
        .with_outlier_fraction(outliers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn resolves_defaults() {
        let space = SpaceConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let config = resolve(&space, &mut rng).unwrap();
        assert_eq!(config.start_date(), NaiveDate::from_ymd_opt(2021, 7, 1).unwrap());
        assert_eq!(config.duration(), 60);
        assert_eq!(config.frequency().as_str(), "1D");
        assert_eq!(config.noise(), NoiseLevel::Small);
        assert_eq!(config.mode(), CompositionMode::Additive);
        assert_eq!(config.outlier_fraction(), 0.05);
    }

    #[test]
    fn every_resolved_value_comes_from_its_list() {
        let space: SpaceConfig = serde_yaml::from_str(
            r#"
frequencies: ["1D", "6H"]
data_sizes: [60, 90, 120]
daily_seasonality_options: [true, false]
percentage_outliers_options: [0.0, 0.05]
"#,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..32 {
            let config = resolve(&space, &mut rng).unwrap();
            assert!(["1D", "6H"].contains(&config.frequency().as_str()));
            assert!([60, 90, 120].contains(&config.duration()));
            assert!([0.0, 0.05].contains(&config.outlier_fraction()));
        }
    }

    #[test]
    fn empty_option_list_fails() {
        let space: SpaceConfig = serde_yaml::from_str("frequencies: []\n").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let err = resolve(&space, &mut rng).unwrap_err();
        assert!(err.to_string().contains("frequencies"));
    }

    #[test]
    fn bad_start_date_fails() {
        let space: SpaceConfig = serde_yaml::from_str("start_date: 2021-07-01\n").unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        assert!(resolve(&space, &mut rng).is_err());
    }

    #[test]
    fn bad_frequency_fails() {
        let space: SpaceConfig = serde_yaml::from_str("frequencies: [\"1X\"]\n").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(resolve(&space, &mut rng).is_err());
    }

    #[test]
    fn deterministic_with_seed() {
        let space: SpaceConfig = serde_yaml::from_str(
            r#"
frequencies: ["1D", "10T", "1H"]
data_sizes: [60, 90, 120, 365]
daily_seasonality_options: [true, false]
weekly_seasonality_options: [true, false]
"#,
        )
        .unwrap();
        let a = resolve(&space, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = resolve(&space, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.duration(), b.duration());
        assert_eq!(a.frequency().as_str(), b.frequency().as_str());
        assert_eq!(a.daily_seasonality(), b.daily_seasonality());
    }
}
