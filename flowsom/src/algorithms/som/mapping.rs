#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/mapping_test.rs"]
mod mapping_test;

use crate::algorithms::math::find_nearest_in_slice;
use crate::models::{MatrixView, contiguous_data};
use crate::utils::{Float, SomError, SomResult, map_reduce, parallel_collect_range};

/// Keeps nearest node assignment of each data row in input row order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping {
    /// Index of the nearest node per row.
    pub indices: Vec<usize>,
    /// Euclidean distance to the nearest node per row.
    pub distances: Vec<Float>,
}

impl Mapping {
    /// Returns amount of mapped rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no rows were mapped.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns mean distance between rows and their nodes (quantization error).
    pub fn quantization_error(&self) -> Float {
        if self.distances.is_empty() {
            return 0.;
        }

        let total = map_reduce(self.distances.as_slice(), |distance| *distance, || 0., |a, b| a + b);

        total / self.distances.len() as Float
    }

    /// Returns how many rows are assigned to each node.
    pub fn hits(&self, node_count: usize) -> Vec<usize> {
        self.indices.iter().fold(vec![0; node_count], |mut hits, &index| {
            if let Some(hit) = hits.get_mut(index) {
                *hit += 1;
            }
            hits
        })
    }
}

/// Assigns each data row to the closest node (Euclidean) and reports the distance to it.
///
/// Node weights are only read, so rows are searched in parallel; the result does not depend on
/// scheduling. Inputs with any memory layout are accepted and normalized internally.
pub fn map_to_nearest(nodes: &dyn MatrixView, data: &dyn MatrixView) -> SomResult<Mapping> {
    let (node_count, features) = nodes.shape();
    let (rows, cols) = data.shape();

    if cols != features {
        return Err(SomError::DimensionMismatch { expected: features, actual: cols });
    }

    if node_count == 0 || features == 0 {
        return Err(SomError::EmptyInput(format!("cannot map to {node_count}x{features} nodes")));
    }

    let nodes = contiguous_data(nodes);
    let data = contiguous_data(data);
    let (nodes, data) = (nodes.as_ref(), data.as_ref());

    let (indices, distances) = parallel_collect_range(rows, |row| {
        let nearest = find_nearest_in_slice(&data[row * cols..(row + 1) * cols], nodes);
        (nearest.index, nearest.distance)
    })
    .into_iter()
    .unzip();

    Ok(Mapping { indices, distances })
}
