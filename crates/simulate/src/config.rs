//! Configuration types for the generation pipeline.

use std::fmt;

use aion_calendar::Frequency;
use chrono::NaiveDate;

use crate::error::SimulateError;

/// Amplitude class of the value-proportional noise stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseLevel {
    /// No noise is drawn.
    #[default]
    None,
    /// Standard deviation of 10% of each point's magnitude.
    Small,
    /// Standard deviation of 30% of each point's magnitude.
    Large,
}

impl NoiseLevel {
    /// Returns the noise standard-deviation multiplier.
    pub fn multiplier(self) -> f64 {
        match self {
            NoiseLevel::None => 0.0,
            NoiseLevel::Small => 0.1,
            NoiseLevel::Large => 0.3,
        }
    }
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoiseLevel::None => "none",
            NoiseLevel::Small => "small",
            NoiseLevel::Large => "large",
        };
        f.write_str(s)
    }
}

/// How the four signal components combine into one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionMode {
    /// Components are summed pointwise.
    #[default]
    Additive,
    /// Components are multiplied pointwise.
    Multiplicative,
}

impl CompositionMode {
    /// Returns the neutral element of the combination: a disabled component
    /// filled with this value has no effect on the composed signal.
    pub fn neutral(self) -> f64 {
        match self {
            CompositionMode::Additive => 0.0,
            CompositionMode::Multiplicative => 1.0,
        }
    }
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompositionMode::Additive => "additive",
            CompositionMode::Multiplicative => "multiplicative",
        };
        f.write_str(s)
    }
}

/// Resolved configuration for one generation call.
///
/// Carries exactly the parameters the pipeline consumes. Randomness is not
/// part of the record: the caller passes an RNG into
/// [`generate`](crate::generate) so that one seed reproduces a whole batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// First timestamp of the generated range.
    start_date: NaiveDate,
    /// Span of the generated range in days.
    duration: i64,
    /// Sampling interval.
    frequency: Frequency,
    /// Whether the hour-of-day seasonal component is present.
    daily_seasonality: bool,
    /// Whether the day-of-week seasonal component is present.
    weekly_seasonality: bool,
    /// Whether the linear trend component is present.
    trend: bool,
    /// Whether the quarterly cyclic component is present.
    cyclic: bool,
    /// Noise amplitude class.
    noise: NoiseLevel,
    /// Combination arithmetic.
    mode: CompositionMode,
    /// Fraction of points replaced by labeled outliers.
    outlier_fraction: f64,
}

impl SimConfig {
    /// Creates a configuration with all components disabled, no noise,
    /// additive composition, and no outliers.
    pub fn new(start_date: NaiveDate, duration: i64, frequency: Frequency) -> Self {
        Self {
            start_date,
            duration,
            frequency,
            daily_seasonality: false,
            weekly_seasonality: false,
            trend: false,
            cyclic: false,
            noise: NoiseLevel::None,
            mode: CompositionMode::Additive,
            outlier_fraction: 0.0,
        }
    }

    /// Sets whether daily seasonality is present.
    pub fn with_daily_seasonality(mut self, enabled: bool) -> Self {
        self.daily_seasonality = enabled;
        self
    }

    /// Sets whether weekly seasonality is present.
    pub fn with_weekly_seasonality(mut self, enabled: bool) -> Self {
        self.weekly_seasonality = enabled;
        self
    }

    /// Sets whether the trend component is present.
    pub fn with_trend(mut self, enabled: bool) -> Self {
        self.trend = enabled;
        self
    }

    /// Sets whether the quarterly cyclic component is present.
    pub fn with_cyclic(mut self, enabled: bool) -> Self {
        self.cyclic = enabled;
        self
    }

    /// Sets the noise amplitude class.
    pub fn with_noise(mut self, noise: NoiseLevel) -> Self {
        self.noise = noise;
        self
    }

    /// Sets the combination arithmetic.
    pub fn with_mode(mut self, mode: CompositionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the fraction of points replaced by labeled outliers.
    pub fn with_outlier_fraction(mut self, fraction: f64) -> Self {
        self.outlier_fraction = fraction;
        self
    }

    // --- Accessors ---

    /// Returns the first date of the generated range.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the span of the generated range in days.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Returns the sampling interval.
    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    /// Returns whether daily seasonality is present.
    pub fn daily_seasonality(&self) -> bool {
        self.daily_seasonality
    }

    /// Returns whether weekly seasonality is present.
    pub fn weekly_seasonality(&self) -> bool {
        self.weekly_seasonality
    }

    /// Returns whether the trend component is present.
    pub fn trend(&self) -> bool {
        self.trend
    }

    /// Returns whether the quarterly cyclic component is present.
    pub fn cyclic(&self) -> bool {
        self.cyclic
    }

    /// Returns the noise amplitude class.
    pub fn noise(&self) -> NoiseLevel {
        self.noise
    }

    /// Returns the combination arithmetic.
    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    /// Returns the outlier fraction.
    pub fn outlier_fraction(&self) -> f64 {
        self.outlier_fraction
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulateError::InvalidDuration`] when the duration is
    /// negative and [`SimulateError::InvalidFraction`] when the outlier
    /// fraction is outside [0, 1].
    pub fn validate(&self) -> Result<(), SimulateError> {
        if self.duration < 0 {
            return Err(SimulateError::InvalidDuration {
                days: self.duration,
            });
        }
        if !self.outlier_fraction.is_finite() || !(0.0..=1.0).contains(&self.outlier_fraction) {
            return Err(SimulateError::InvalidFraction {
                field: "percentage_outliers".to_string(),
                value: self.outlier_fraction,
            });
        }
        Ok(())
    }
}
