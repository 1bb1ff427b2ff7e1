#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/state_test.rs"]
mod state_test;

use super::*;
use crate::algorithms::math::euclidean;
use crate::utils::Float;
use std::fmt::{Display, Formatter, Result, Write};

/// Represents state of the grid.
pub struct GridState {
    /// Shape of the grid as (xdim, ydim, num of weights).
    pub shape: (usize, usize, usize),
    /// Nodes of the grid in node index order.
    pub nodes: Vec<NodeState>,
}

/// Contains information about grid node state.
pub struct NodeState {
    /// Node coordinate in grid.
    pub coordinate: Coordinate,
    /// Unified distance to neighbors.
    pub unified_distance: Float,
    /// Node weights.
    pub weights: Vec<Float>,
    /// Amount of mapped rows.
    pub hits: usize,
}

/// Gets grid state. Hits are taken from mapping when it is passed.
pub fn get_grid_state(grid: &Grid, mapping: Option<&Mapping>) -> GridState {
    let hits = mapping.map_or_else(|| vec![0; grid.size()], |mapping| mapping.hits(grid.size()));
    let weights = grid.weights();

    let nodes = grid
        .coordinates()
        .iter()
        .enumerate()
        .map(|(node, coordinate)| {
            let (sum, count) = grid.lattice_neighbours(node).fold((0., 0), |(sum, count), neighbour| {
                (sum + euclidean(weights.row(node), weights.row(neighbour)), count + 1)
            });

            NodeState {
                coordinate: *coordinate,
                unified_distance: if count > 0 { sum / count as Float } else { 0. },
                weights: weights.row(node).to_vec(),
                hits: hits[node],
            }
        })
        .collect();

    GridState { shape: (grid.xdim(), grid.ydim(), grid.feature_count()), nodes }
}

impl Display for GridState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // NOTE serialize state in simple representation which can be embedded
        // to json as string and then easily parsed.
        let nodes = self.nodes.iter().try_fold(String::new(), |mut res, n| -> std::result::Result<String, std::fmt::Error> {
            let Coordinate(x, y) = n.coordinate;
            let weights = n.weights.iter().map(|w| format!("{w:.7}")).collect::<Vec<_>>().join(",");

            write!(&mut res, "({x},{y},{:.7},{},[{weights}]),", n.unified_distance, n.hits)?;

            Ok(res)
        })?;

        write!(f, "({},{},{},[{nodes}])", self.shape.0, self.shape.1, self.shape.2)
    }
}
