use serde::Deserialize;

/// The YAML option space one batch draws from.
///
/// Each `*_options` list holds the values a single dataset's configuration
/// may take; resolution picks one element per list uniformly at random for
/// every dataset in the batch.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpaceConfig {
    /// First date of every generated range, `DD-MM-YYYY`.
    #[serde(default = "default_start_date")]
    pub start_date: String,

    /// Sampling frequency options (pandas-style offsets).
    #[serde(default = "default_frequencies")]
    pub frequencies: Vec<String>,

    /// Span options in days.
    #[serde(default = "default_data_sizes")]
    pub data_sizes: Vec<i64>,

    /// Daily seasonality presence options.
    #[serde(default = "default_flag_options")]
    pub daily_seasonality_options: Vec<bool>,

    /// Weekly seasonality presence options.
    #[serde(default = "default_flag_options")]
    pub weekly_seasonality_options: Vec<bool>,

    /// Trend presence options.
    #[serde(default = "default_flag_options")]
    pub trend_options: Vec<bool>,

    /// Quarterly cyclic presence options.
    #[serde(default = "default_flag_options")]
    pub cyclic_options: Vec<bool>,

    /// Noise amplitude options.
    #[serde(default = "default_noise_levels")]
    pub noise_levels: Vec<NoiseOption>,

    /// Composition arithmetic options.
    #[serde(default = "default_data_types")]
    pub data_types: Vec<DataTypeOption>,

    /// Outlier fraction options.
    #[serde(default = "default_outlier_options")]
    pub percentage_outliers_options: Vec<f64>,

    /// Number of datasets to generate.
    #[serde(default = "default_datasets_num")]
    pub datasets_num: usize,

    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            frequencies: default_frequencies(),
            data_sizes: default_data_sizes(),
            daily_seasonality_options: default_flag_options(),
            weekly_seasonality_options: default_flag_options(),
            trend_options: default_flag_options(),
            cyclic_options: default_flag_options(),
            noise_levels: default_noise_levels(),
            data_types: default_data_types(),
            percentage_outliers_options: default_outlier_options(),
            datasets_num: default_datasets_num(),
            seed: None,
        }
    }
}

fn default_start_date() -> String {
    "01-07-2021".to_string()
}
fn default_frequencies() -> Vec<String> {
    vec!["1D".to_string()]
}
fn default_data_sizes() -> Vec<i64> {
    vec![60]
}
fn default_flag_options() -> Vec<bool> {
    vec![false]
}
fn default_noise_levels() -> Vec<NoiseOption> {
    vec![NoiseOption::Small]
}
fn default_data_types() -> Vec<DataTypeOption> {
    vec![DataTypeOption::Additive]
}
fn default_outlier_options() -> Vec<f64> {
    vec![0.05]
}
fn default_datasets_num() -> usize {
    1
}

/// Noise amplitude option as written in YAML.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseOption {
    None,
    Small,
    Large,
}

/// Composition arithmetic option as written in YAML.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataTypeOption {
    Additive,
    Multiplicative,
}
