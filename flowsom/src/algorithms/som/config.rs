#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/config_test.rs"]
mod config_test;

use super::{GridMetric, InitMethod};
use crate::utils::{Float, SomError, SomResult};

/// Default learning rate at the first and the last epoch.
pub const DEFAULT_LEARNING_RATE: (Float, Float) = (0.05, 0.01);

/// Default neighbourhood radius at the last epoch.
pub const DEFAULT_FINAL_RADIUS: Float = 1.;

/// Specifies how a parameter decays from its start value to its end value over epochs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecaySchedule {
    /// Linear interpolation between start and end.
    #[default]
    Linear,
    /// Geometric interpolation between start and end, both should be positive.
    Exponential,
}

impl DecaySchedule {
    /// Returns value for the given progress in [0, 1] range.
    pub fn value(&self, start: Float, end: Float, progress: Float) -> Float {
        let progress = progress.clamp(0., 1.);

        match self {
            DecaySchedule::Linear => start - (start - end) * progress,
            DecaySchedule::Exponential => start * (end / start).powf(progress),
        }
    }
}

/// Specifies how much nodes around the best matching unit are pulled towards a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighbourhoodKernel {
    /// Gaussian of lattice distance with sigma equal to one third of the radius.
    #[default]
    Gaussian,
    /// Full influence for every node within radius.
    Bubble,
}

impl NeighbourhoodKernel {
    /// Returns influence of the best matching unit on the node at the given lattice distance or
    /// `None` when the node is outside of the radius.
    pub fn influence(&self, distance: Float, radius: Float) -> Option<Float> {
        if distance > radius {
            return None;
        }

        Some(match self {
            NeighbourhoodKernel::Gaussian => {
                let sigma = radius / 3.;
                (-(distance * distance) / (2. * sigma * sigma)).exp()
            }
            NeighbourhoodKernel::Bubble => 1.,
        })
    }
}

/// Specifies in which order samples are visited within an epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleOrder {
    /// Each row once, in a random permutation drawn per epoch.
    #[default]
    Shuffled,
    /// Each row once, in dataset order.
    Sequential,
    /// As many random draws with replacement as there are rows.
    Sampled,
}

/// Keeps hyperparameters of self-organizing map training.
#[derive(Clone, Debug, PartialEq)]
pub struct SomConfig {
    /// Grid width.
    pub xdim: usize,
    /// Grid height.
    pub ydim: usize,
    /// Amount of epochs: full passes over the dataset.
    pub rlen: usize,
    /// Learning rate at the first and the last epoch.
    pub learning_rate: (Float, Float),
    /// Neighbourhood radius at the first and the last epoch. When not set, the start radius is
    /// derived from lattice distances and the end radius is `DEFAULT_FINAL_RADIUS`.
    pub radius: Option<(Float, Float)>,
    /// A decay schedule for both learning rate and radius.
    pub decay: DecaySchedule,
    /// A neighbourhood kernel.
    pub kernel: NeighbourhoodKernel,
    /// A metric to measure lattice distance.
    pub grid_metric: GridMetric,
    /// A weight initialization method.
    pub init: InitMethod,
    /// A sample visiting order.
    pub order: SampleOrder,
    /// Stops training when total absolute weight change over an epoch is below this value.
    pub convergence_threshold: Option<Float>,
}

/// Provides configurable way to build `SomConfig`.
pub struct SomConfigBuilder {
    config: SomConfig,
}

impl Default for SomConfigBuilder {
    fn default() -> Self {
        Self {
            config: SomConfig {
                xdim: 10,
                ydim: 10,
                rlen: 10,
                learning_rate: DEFAULT_LEARNING_RATE,
                radius: None,
                decay: DecaySchedule::default(),
                kernel: NeighbourhoodKernel::default(),
                grid_metric: GridMetric::default(),
                init: InitMethod::default(),
                order: SampleOrder::default(),
                convergence_threshold: None,
            },
        }
    }
}

impl SomConfigBuilder {
    /// Sets grid dimensions. Default is 10x10.
    pub fn with_grid(mut self, xdim: usize, ydim: usize) -> Self {
        self.config.xdim = xdim;
        self.config.ydim = ydim;
        self
    }

    /// Sets amount of epochs. Default is 10.
    pub fn with_epochs(mut self, rlen: usize) -> Self {
        self.config.rlen = rlen;
        self
    }

    /// Sets learning rate at the first and the last epoch. Default is (0.05, 0.01).
    pub fn with_learning_rate(mut self, start: Float, end: Float) -> Self {
        self.config.learning_rate = (start, end);
        self
    }

    /// Sets neighbourhood radius at the first and the last epoch.
    pub fn with_radius(mut self, start: Float, end: Float) -> Self {
        self.config.radius = Some((start, end));
        self
    }

    /// Sets decay schedule.
    pub fn with_decay(mut self, decay: DecaySchedule) -> Self {
        self.config.decay = decay;
        self
    }

    /// Sets neighbourhood kernel.
    pub fn with_kernel(mut self, kernel: NeighbourhoodKernel) -> Self {
        self.config.kernel = kernel;
        self
    }

    /// Sets lattice distance metric.
    pub fn with_grid_metric(mut self, grid_metric: GridMetric) -> Self {
        self.config.grid_metric = grid_metric;
        self
    }

    /// Sets weight initialization method.
    pub fn with_init_method(mut self, init: InitMethod) -> Self {
        self.config.init = init;
        self
    }

    /// Sets sample visiting order.
    pub fn with_sample_order(mut self, order: SampleOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Sets early stop threshold. Default is none: all epochs are run.
    pub fn with_convergence_threshold(mut self, threshold: Option<Float>) -> Self {
        self.config.convergence_threshold = threshold;
        self
    }

    /// Validates parameters and builds the config.
    pub fn build(self) -> SomResult<SomConfig> {
        validate_config(&self.config)?;

        Ok(self.config)
    }
}

/// Checks that parameters describe a non-empty grid and decreasing schedules.
pub(crate) fn validate_config(config: &SomConfig) -> SomResult<()> {
    if config.xdim == 0 || config.ydim == 0 {
        return Err(SomError::EmptyInput(format!("{}x{} grid has no nodes", config.xdim, config.ydim)));
    }

    let needs_positive = config.decay == DecaySchedule::Exponential;

    validate_schedule("learning rate", config.learning_rate, needs_positive)?;

    if let Some(radius) = config.radius {
        // NOTE radius end is used as a divisor in gaussian kernel
        validate_schedule("radius", radius, true)?;
    }

    match config.convergence_threshold {
        Some(threshold) if !threshold.is_finite() || threshold < 0. => {
            Err(SomError::InvalidParameter(format!("convergence threshold should be non-negative: {threshold}")))
        }
        _ => Ok(()),
    }
}

fn validate_schedule(name: &str, (start, end): (Float, Float), needs_positive: bool) -> SomResult<()> {
    let (is_end_valid, bound) = if needs_positive { (end > 0., "positive") } else { (end >= 0., "non-negative") };

    if start.is_finite() && end.is_finite() && start >= end && is_end_valid {
        Ok(())
    } else {
        Err(SomError::InvalidParameter(format!("{name} should not increase and stay {bound}: ({start}, {end})")))
    }
}
