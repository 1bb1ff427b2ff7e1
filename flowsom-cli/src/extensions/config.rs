//! Training configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use flowsom::algorithms::som::*;
use flowsom::utils::{DefaultRandom, Float, GenericResult, LegacyRandom, Random};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A training configuration. Every field is optional: missing ones keep library defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies grid configuration.
    pub grid: Option<GridConfig>,
    /// Specifies training loop configuration.
    pub training: Option<TrainingConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A grid configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Grid width. Default is 10.
    pub xdim: Option<usize>,
    /// Grid height. Default is 10.
    pub ydim: Option<usize>,
    /// Lattice distance metric. Default is chebyshev.
    pub metric: Option<GridMetricType>,
    /// Weight initialization method. Default is sample.
    pub init: Option<InitType>,
}

/// A training loop configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingConfig {
    /// Amount of epochs. Default is 10.
    pub epochs: Option<usize>,
    /// Learning rate range. Default is 0.05 to 0.01.
    pub learning_rate: Option<RangeConfig>,
    /// Neighbourhood radius range. Default is derived from the grid.
    pub radius: Option<RangeConfig>,
    /// Decay schedule. Default is linear.
    pub decay: Option<DecayType>,
    /// Neighbourhood kernel. Default is gaussian.
    pub kernel: Option<KernelType>,
    /// Sample visiting order. Default is shuffled.
    pub order: Option<OrderType>,
    /// Early stop threshold. Default is none.
    pub convergence_threshold: Option<Float>,
    /// Use repeatable random source. Default is false.
    pub deterministic: Option<bool>,
    /// Random number generator. Default is small fast generator.
    pub random: Option<RandomType>,
}

/// A value range: value at the first and the last epoch.
#[derive(Clone, Debug, Deserialize)]
pub struct RangeConfig {
    /// Start value.
    pub start: Float,
    /// End value.
    pub end: Float,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether training progress is logged.
    pub enabled: bool,
}

/// A lattice distance metric.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GridMetricType {
    /// Maximum of coordinate differences.
    Chebyshev,
    /// Euclidean distance.
    Euclidean,
    /// Sum of coordinate differences.
    Manhattan,
}

/// A weight initialization method.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InitType {
    /// Copy random rows.
    Sample,
    /// Uniform values within feature ranges.
    Range,
}

/// A decay schedule.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DecayType {
    /// Linear interpolation.
    Linear,
    /// Geometric interpolation.
    Exponential,
}

/// A neighbourhood kernel.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KernelType {
    /// Gaussian of lattice distance.
    Gaussian,
    /// Constant influence within radius.
    Bubble,
}

/// A sample visiting order.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Random permutation per epoch.
    Shuffled,
    /// Dataset order.
    Sequential,
    /// Random draws with replacement.
    Sampled,
}

/// A random number generator.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RandomType {
    /// Small fast generator, seeded from entropy unless deterministic.
    Default,
    /// Linear congruential generator of classic FlowSOM, always seeded with a fixed value.
    Legacy,
}

impl Config {
    /// Returns true if a repeatable random source is requested.
    pub fn is_deterministic(&self) -> bool {
        self.training.as_ref().and_then(|training| training.deterministic).unwrap_or(false)
    }

    /// Creates a random source: the legacy generator replays the same stream on every run.
    pub fn create_random(&self, is_deterministic: bool) -> Arc<dyn Random> {
        match self.training.as_ref().and_then(|training| training.random) {
            Some(RandomType::Legacy) => Arc::new(LegacyRandom::default()),
            _ if is_deterministic => Arc::new(DefaultRandom::new_repeatable()),
            _ => Arc::new(DefaultRandom::default()),
        }
    }

    /// Returns true if training progress should be logged.
    pub fn is_logging_enabled(&self) -> bool {
        self.logging.as_ref().is_none_or(|logging| logging.enabled)
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a `SomConfigBuilder` with parameters taken from config.
pub fn create_config_builder(config: &Config) -> SomConfigBuilder {
    let mut builder = SomConfigBuilder::default();

    if let Some(grid) = &config.grid {
        builder = builder.with_grid(grid.xdim.unwrap_or(10), grid.ydim.unwrap_or(10));

        if let Some(metric) = grid.metric {
            builder = builder.with_grid_metric(match metric {
                GridMetricType::Chebyshev => GridMetric::Chebyshev,
                GridMetricType::Euclidean => GridMetric::Euclidean,
                GridMetricType::Manhattan => GridMetric::Manhattan,
            });
        }

        if let Some(init) = grid.init {
            builder = builder.with_init_method(match init {
                InitType::Sample => InitMethod::Sample,
                InitType::Range => InitMethod::Range,
            });
        }
    }

    if let Some(training) = &config.training {
        if let Some(epochs) = training.epochs {
            builder = builder.with_epochs(epochs);
        }

        if let Some(RangeConfig { start, end }) = training.learning_rate {
            builder = builder.with_learning_rate(start, end);
        }

        if let Some(RangeConfig { start, end }) = training.radius {
            builder = builder.with_radius(start, end);
        }

        if let Some(decay) = training.decay {
            builder = builder.with_decay(match decay {
                DecayType::Linear => DecaySchedule::Linear,
                DecayType::Exponential => DecaySchedule::Exponential,
            });
        }

        if let Some(kernel) = training.kernel {
            builder = builder.with_kernel(match kernel {
                KernelType::Gaussian => NeighbourhoodKernel::Gaussian,
                KernelType::Bubble => NeighbourhoodKernel::Bubble,
            });
        }

        if let Some(order) = training.order {
            builder = builder.with_sample_order(match order {
                OrderType::Shuffled => SampleOrder::Shuffled,
                OrderType::Sequential => SampleOrder::Sequential,
                OrderType::Sampled => SampleOrder::Sampled,
            });
        }

        builder = builder.with_convergence_threshold(training.convergence_threshold);
    }

    builder
}
