//! Generate command: produce a batch of labeled datasets.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug_span, info, info_span};

use aion_io::{DatasetMeta, write_dataset, write_metadata};
use aion_simulate::MISSING_RATE;

use crate::cli::GenerateArgs;
use crate::config::SpaceConfig;
use crate::resolve;

/// Run the batch generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Load the YAML option space
    let raw = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let space: SpaceConfig =
        serde_yaml::from_str(&raw).context("failed to parse YAML configuration")?;

    let count = args.count.unwrap_or(space.datasets_num);
    info!(
        config = %args.config.display(),
        n_datasets = count,
        "configuration loaded"
    );

    // 2. Create seeded RNG; one seed reproduces the whole batch
    let mut rng = match args.seed.or(space.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // 3. Prepare the output directory
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create output dir: {}", args.output.display()))?;

    // 4. Resolve, generate, and write each dataset
    let mut metadata = Vec::with_capacity(count);
    for i in 1..=count {
        let _dataset = debug_span!("dataset", idx = i).entered();

        let config = resolve::resolve(&space, &mut rng)
            .with_context(|| format!("failed to resolve configuration for dataset {i}"))?;
        let series = aion_simulate::generate(&config, &mut rng)
            .with_context(|| format!("generation failed for dataset {i}"))?;

        let file_name = format!("{i}.csv");
        let path = args.output.join(&file_name);
        write_dataset(&path, series.values(), series.timestamps(), series.anomaly_mask())
            .with_context(|| format!("failed to write dataset: {}", path.display()))?;
        info!(
            dataset = %file_name,
            n_points = series.len(),
            n_outliers = series.n_anomalies(),
            n_missing = series.n_missing(),
            "dataset written"
        );

        metadata.push(DatasetMeta {
            id: file_name,
            data_type: config.mode().to_string(),
            daily_seasonality: config.daily_seasonality(),
            weekly_seasonality: config.weekly_seasonality(),
            noise: config.noise().to_string(),
            trend: config.trend(),
            cyclic_period: config.cyclic(),
            data_size: config.duration(),
            percentage_outliers: config.outlier_fraction(),
            percentage_missing: MISSING_RATE,
            freq: config.frequency().to_string(),
        });
    }

    // 5. Write the batch metadata index
    let meta_path = args.output.join("meta_data.csv");
    write_metadata(&meta_path, &metadata)
        .with_context(|| format!("failed to write metadata index: {}", meta_path.display()))?;
    info!(
        path = %meta_path.display(),
        n_datasets = metadata.len(),
        "metadata index written"
    );

    Ok(())
}
