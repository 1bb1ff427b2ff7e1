#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/training_test.rs"]
mod training_test;

use super::config::validate_config;
use super::grid::get_default_radius;
use super::*;
use crate::algorithms::math::find_nearest_in_slice;
use crate::models::{Matrix, MatrixView};
use crate::utils::{Environment, Float, Random, SomError, SomResult, Timer};

/// Keeps information about a single training epoch.
#[derive(Clone, Debug, PartialEq)]
pub struct EpochStatistics {
    /// Epoch sequence number, starting from zero.
    pub epoch: usize,
    /// Neighbourhood radius used within the epoch.
    pub radius: Float,
    /// Learning rate used within the epoch.
    pub learning_rate: Float,
    /// Total absolute difference between samples and updated weights observed within the epoch.
    pub change: Float,
}

/// A result of training: the grid with final weights and training statistics.
pub struct TrainedMap {
    /// A trained grid.
    pub grid: Grid,
    /// Statistics of each epoch run.
    pub epochs: Vec<EpochStatistics>,
    /// True if training was stopped early by convergence threshold.
    pub is_converged: bool,
}

impl TrainedMap {
    /// Returns trained node weights as `nodes x features` matrix.
    pub fn node_output(&self) -> &Matrix {
        self.grid.weights()
    }

    /// Consumes the map returning trained node weights.
    pub fn into_node_output(self) -> Matrix {
        self.grid.into_weights()
    }

    /// Assigns each data row to its nearest trained node.
    pub fn map(&self, data: &dyn MatrixView) -> SomResult<Mapping> {
        map_to_nearest(self.node_output(), data)
    }
}

/// Trains a self-organizing map on the given data starting from weights sampled from the data.
///
/// Samples are processed strictly one after another: each update moves node weights and
/// therefore changes the best matching unit of every following sample. Reordering samples or
/// processing them in parallel produces different weights.
pub fn train_with_config(data: &dyn MatrixView, config: &SomConfig, environment: &Environment) -> SomResult<TrainedMap> {
    validate_config(config)?;
    validate_data(data, None)?;

    let data = Matrix::from_view(data);
    let mut grid = Grid::new(config.xdim, config.ydim, data.ncols())?;
    grid.initialize(&data, config.init, environment.random.as_ref())?;

    Ok(run_epochs(&data, grid, config, environment))
}

/// Continues training of an existing grid. Grid dimensions are taken from the grid itself,
/// initialization method of the config is ignored.
pub fn train_grid_with_config(
    data: &dyn MatrixView,
    grid: Grid,
    config: &SomConfig,
    environment: &Environment,
) -> SomResult<TrainedMap> {
    validate_config(config)?;
    validate_data(data, Some(grid.feature_count()))?;

    Ok(run_epochs(&Matrix::from_view(data), grid, config, environment))
}

fn validate_data(data: &dyn MatrixView, feature_count: Option<usize>) -> SomResult<()> {
    let (rows, cols) = data.shape();

    match feature_count {
        Some(expected) if expected != cols => Err(SomError::DimensionMismatch { expected, actual: cols }),
        _ if rows == 0 => Err(SomError::EmptyInput("dataset has no rows".to_string())),
        _ if cols == 0 => Err(SomError::EmptyInput("dataset has no features".to_string())),
        _ => Ok(()),
    }
}

fn run_epochs(data: &Matrix, mut grid: Grid, config: &SomConfig, environment: &Environment) -> TrainedMap {
    let timer = Timer::start();
    let random = environment.random.as_ref();
    let logger = environment.logger.as_ref();
    let (rows, cols) = data.shape();

    let distances = grid.neighbourhood_distances(config.grid_metric);
    let (radius_start, radius_end) = config.radius.unwrap_or_else(|| {
        (get_default_radius(&distances).max(DEFAULT_FINAL_RADIUS), DEFAULT_FINAL_RADIUS)
    });

    (logger)(&format!(
        "training {}x{} map on {rows} rows with {cols} features, epochs: {}, radius: {radius_start:.3} -> {radius_end:.3}",
        grid.xdim(),
        grid.ydim(),
        config.rlen
    ));

    let mut order = (0..rows).collect::<Vec<_>>();
    let mut epochs = Vec::with_capacity(config.rlen);
    let mut is_converged = false;

    for epoch in 0..config.rlen {
        let progress = if config.rlen > 1 { epoch as Float / (config.rlen - 1) as Float } else { 0. };
        let radius = get_effective_radius(config.decay.value(radius_start, radius_end, progress));
        let learning_rate = config.decay.value(config.learning_rate.0, config.learning_rate.1, progress);

        fill_sample_order(order.as_mut_slice(), config.order, random);

        let change = order.iter().fold(Float::default(), |change, &row| {
            change + train_sample(&mut grid, &distances, data.row(row), radius, learning_rate, config.kernel)
        });

        (logger)(&format!(
            "epoch {}/{}: radius: {radius:.3}, learning rate: {learning_rate:.4}, change: {change:.4}",
            epoch + 1,
            config.rlen
        ));

        epochs.push(EpochStatistics { epoch, radius, learning_rate, change });

        if config.convergence_threshold.is_some_and(|threshold| change < threshold) {
            (logger)(&format!("converged after {} epochs", epoch + 1));
            is_converged = true;
            break;
        }
    }

    (logger)(&format!("training is completed in {}ms", timer.elapsed_millis()));

    TrainedMap { grid, epochs, is_converged }
}

/// A radius below one lattice unit keeps updates on the best matching unit only.
fn get_effective_radius(radius: Float) -> Float {
    if radius < 1. { 0.5 } else { radius }
}

fn fill_sample_order(order: &mut [usize], sample_order: SampleOrder, random: &dyn Random) {
    match sample_order {
        SampleOrder::Sequential => order.iter_mut().enumerate().for_each(|(idx, row)| *row = idx),
        SampleOrder::Shuffled => {
            order.iter_mut().enumerate().for_each(|(idx, row)| *row = idx);
            random.shuffle(order);
        }
        SampleOrder::Sampled => {
            let max = order.len() as i32 - 1;
            order.iter_mut().for_each(|row| *row = random.uniform_int(0, max) as usize);
        }
    }
}

/// Finds best matching unit for the sample and pulls its neighbourhood towards the sample.
/// Returns total absolute difference between the sample and updated weights.
fn train_sample(
    grid: &mut Grid,
    distances: &Matrix,
    sample: &[Float],
    radius: Float,
    learning_rate: Float,
    kernel: NeighbourhoodKernel,
) -> Float {
    let bmu = find_nearest_in_slice(sample, grid.weights().as_slice()).index;
    let weights = grid.weights_mut();

    distances.row(bmu).iter().enumerate().fold(Float::default(), |change, (node, &distance)| {
        match kernel.influence(distance, radius) {
            Some(influence) => change + adjust(weights.row_mut(node), sample, learning_rate * influence),
            None => change,
        }
    })
}

/// Adjusts the weights towards target: `w += rate * (target - w)`.
fn adjust(weights: &mut [Float], target: &[Float], rate: Float) -> Float {
    debug_assert_eq!(weights.len(), target.len());

    weights.iter_mut().zip(target.iter()).fold(Float::default(), |change, (weight, &value)| {
        let diff = value - *weight;
        *weight += rate * diff;

        change + diff.abs()
    })
}
