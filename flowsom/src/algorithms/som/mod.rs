//! Provides an implementation of a self-organizing map on a fixed rectangular grid: training of
//! node weights and mapping of arbitrary observations to their nearest node.
//!
//! # Examples
//!
//! ```
//! use flowsom::algorithms::som::{map_to_nearest, train};
//! use flowsom::models::Matrix;
//!
//! let data = Matrix::from_rows(&[vec![0., 0.], vec![0., 1.], vec![10., 10.], vec![10., 11.]]).unwrap();
//!
//! let nodes = train(&data, 2, 1, 10, true).unwrap();
//! let mapping = map_to_nearest(&nodes, &data).unwrap();
//!
//! assert_eq!((nodes.nrows(), nodes.ncols()), (2, 2));
//! assert_eq!(mapping.len(), 4);
//! assert!(mapping.indices.iter().all(|&index| index < 2));
//! ```

use crate::models::{Matrix, MatrixView};
use crate::utils::{Environment, SomResult};

mod config;
pub use self::config::*;

mod grid;
pub use self::grid::{Coordinate, Grid, GridMetric, InitMethod};

mod mapping;
pub use self::mapping::*;

mod state;
pub use self::state::*;

mod training;
pub use self::training::*;

/// Trains a `xdim x ydim` map for `rlen` epochs with default parameters and returns node weights
/// as `(xdim * ydim) x features` matrix. When `deterministic` is set, the same input produces
/// bit-identical output on each run.
pub fn train(data: &dyn MatrixView, xdim: usize, ydim: usize, rlen: usize, deterministic: bool) -> SomResult<Matrix> {
    let config = SomConfigBuilder::default().with_grid(xdim, ydim).with_epochs(rlen).build()?;
    let environment = Environment::new_with_mode(deterministic);

    train_with_config(data, &config, &environment).map(TrainedMap::into_node_output)
}
