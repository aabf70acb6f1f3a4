use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aion labeled time-series dataset generator.
#[derive(Parser)]
#[command(
    name = "aion",
    version,
    about = "Labeled time-series dataset generator for anomaly-detection research"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a batch of labeled datasets.
    Generate(GenerateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to YAML configuration file.
    #[arg(short, long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Directory for generated CSV files and the metadata index.
    #[arg(short, long, default_value = "sample_datasets")]
    pub output: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the number of datasets from config.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}
