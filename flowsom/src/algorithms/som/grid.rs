#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/grid_test.rs"]
mod grid_test;

use crate::models::Matrix;
use crate::utils::{Float, Random, SomError, SomResult, compare_floats_refs};

/// Coordinate of the node on the integer lattice.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Coordinate(pub i32, pub i32);

/// Specifies a metric used to measure distance between two nodes on the lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridMetric {
    /// Maximum of absolute coordinate differences.
    #[default]
    Chebyshev,
    /// Euclidean distance between coordinates.
    Euclidean,
    /// Sum of absolute coordinate differences.
    Manhattan,
}

impl GridMetric {
    /// Returns distance between two coordinates.
    pub fn distance(&self, a: &Coordinate, b: &Coordinate) -> Float {
        let dx = (a.0 - b.0).abs() as Float;
        let dy = (a.1 - b.1).abs() as Float;

        match self {
            GridMetric::Chebyshev => dx.max(dy),
            GridMetric::Euclidean => (dx * dx + dy * dy).sqrt(),
            GridMetric::Manhattan => dx + dy,
        }
    }
}

/// Specifies how node weights are initialized from the input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitMethod {
    /// Copies randomly selected input rows.
    #[default]
    Sample,
    /// Draws each weight uniformly within observed min/max range of its feature.
    Range,
}

/// A rectangular grid of nodes: fixed lattice coordinates and mutable weight vectors.
#[derive(Clone, Debug)]
pub struct Grid {
    xdim: usize,
    ydim: usize,
    coordinates: Vec<Coordinate>,
    weights: Matrix,
}

impl Grid {
    /// Creates a new grid with zero weights. Nodes are enumerated in row-major order:
    /// node with coordinate `(x, y)` has index `y * xdim + x`.
    pub fn new(xdim: usize, ydim: usize, feature_count: usize) -> SomResult<Self> {
        Self::with_weights(xdim, ydim, Matrix::zeros(xdim * ydim, feature_count))
    }

    /// Creates a new grid with the given weights: one row per node.
    pub fn with_weights(xdim: usize, ydim: usize, weights: Matrix) -> SomResult<Self> {
        if xdim == 0 || ydim == 0 {
            return Err(SomError::EmptyInput(format!("{xdim}x{ydim} grid has no nodes")));
        }

        if weights.ncols() == 0 {
            return Err(SomError::EmptyInput("node weights have no features".to_string()));
        }

        if weights.nrows() != xdim * ydim {
            return Err(SomError::InvalidShape { rows: weights.nrows(), cols: weights.ncols() });
        }

        let coordinates =
            (0..ydim).flat_map(|y| (0..xdim).map(move |x| Coordinate(x as i32, y as i32))).collect::<Vec<_>>();

        Ok(Self { xdim, ydim, coordinates, weights })
    }

    /// Returns grid width.
    pub fn xdim(&self) -> usize {
        self.xdim
    }

    /// Returns grid height.
    pub fn ydim(&self) -> usize {
        self.ydim
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns length of each weight vector.
    pub fn feature_count(&self) -> usize {
        self.weights.ncols()
    }

    /// Returns node coordinates in node index order.
    pub fn coordinates(&self) -> &[Coordinate] {
        self.coordinates.as_slice()
    }

    /// Returns node index for the given coordinate if it belongs to the grid.
    pub fn index_of(&self, coordinate: &Coordinate) -> Option<usize> {
        let Coordinate(x, y) = *coordinate;
        let is_inside = x >= 0 && y >= 0 && (x as usize) < self.xdim && (y as usize) < self.ydim;

        is_inside.then(|| y as usize * self.xdim + x as usize)
    }

    /// Returns node weights as `nodes x features` matrix.
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub(crate) fn weights_mut(&mut self) -> &mut Matrix {
        &mut self.weights
    }

    /// Consumes grid returning its weights.
    pub fn into_weights(self) -> Matrix {
        self.weights
    }

    /// Initializes node weights from data rows using the given random source.
    pub fn initialize(&mut self, data: &Matrix, method: InitMethod, random: &dyn Random) -> SomResult<()> {
        if data.ncols() != self.feature_count() {
            return Err(SomError::DimensionMismatch { expected: self.feature_count(), actual: data.ncols() });
        }

        if data.nrows() == 0 {
            return Err(SomError::EmptyInput("cannot initialize grid from dataset without rows".to_string()));
        }

        match method {
            InitMethod::Sample => {
                sample_rows(data.nrows(), self.size(), random)
                    .into_iter()
                    .enumerate()
                    .for_each(|(node, row)| self.weights.row_mut(node).copy_from_slice(data.row(row)));
            }
            InitMethod::Range => {
                let ranges = get_feature_ranges(data);
                if let Some(feature) = ranges.iter().position(|&(min, max)| !(max - min).is_finite()) {
                    return Err(SomError::InvalidParameter(format!(
                        "feature {feature} has range which cannot be sampled: [{}, {}]",
                        ranges[feature].0, ranges[feature].1
                    )));
                }

                (0..self.size()).for_each(|node| {
                    self.weights
                        .row_mut(node)
                        .iter_mut()
                        .zip(ranges.iter())
                        .for_each(|(weight, &(min, max))| *weight = random.uniform_real(min, max));
                });
            }
        }

        Ok(())
    }

    /// Returns `nodes x nodes` matrix of lattice distances between all node pairs.
    pub fn neighbourhood_distances(&self, metric: GridMetric) -> Matrix {
        let mut distances = Matrix::zeros(self.size(), self.size());

        self.coordinates.iter().enumerate().for_each(|(node, a)| {
            distances
                .row_mut(node)
                .iter_mut()
                .zip(self.coordinates.iter())
                .for_each(|(distance, b)| *distance = metric.distance(a, b))
        });

        distances
    }

    /// Returns indices of lattice neighbours in main directions.
    pub fn lattice_neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let Coordinate(x, y) = self.coordinates[node];

        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.index_of(&Coordinate(x + dx, y + dy)))
    }
}

/// Returns a default starting radius: 0.67 quantile of all lattice distances.
pub(crate) fn get_default_radius(distances: &Matrix) -> Float {
    let mut values = distances.as_slice().to_vec();
    values.sort_by(compare_floats_refs);

    get_quantile(values.as_slice(), 0.67)
}

/// Returns quantile of sorted values using linear interpolation between closest ranks.
fn get_quantile(sorted: &[Float], probability: Float) -> Float {
    match sorted.len() {
        0 => 0.,
        1 => sorted[0],
        len => {
            let position = (len - 1) as Float * probability;
            let lower = position.floor() as usize;
            let upper = (lower + 1).min(len - 1);
            let fraction = position - lower as Float;

            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
    }
}

/// Picks data row for each node: without replacement when there are enough rows.
fn sample_rows(rows: usize, nodes: usize, random: &dyn Random) -> Vec<usize> {
    if rows >= nodes {
        let mut indices = (0..rows).collect::<Vec<_>>();
        (0..nodes).for_each(|idx| {
            let other = random.uniform_int(idx as i32, rows as i32 - 1) as usize;
            indices.swap(idx, other);
        });
        indices.truncate(nodes);

        indices
    } else {
        (0..nodes).map(|_| random.uniform_int(0, rows as i32 - 1) as usize).collect()
    }
}

fn get_feature_ranges(data: &Matrix) -> Vec<(Float, Float)> {
    let initial = vec![(Float::INFINITY, Float::NEG_INFINITY); data.ncols()];

    data.rows_iter()
        .fold(initial, |mut ranges, row| {
            ranges.iter_mut().zip(row.iter()).for_each(|((min, max), &value)| {
                *min = min.min(value);
                *max = max.max(value);
            });
            ranges
        })
        .into_iter()
        // NOTE a feature without any finite value collapses to zero
        .map(|(min, max)| if min > max { (0., 0.) } else { (min, max) })
        .collect()
}
