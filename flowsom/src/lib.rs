//! This crate implements a self-organizing map (SOM) which clusters high-dimensional observations,
//! e.g. per-pixel marker intensity vectors, onto a fixed rectangular grid of representative
//! vectors and assigns arbitrary observations to their nearest representative.
//!
//! The main entry points are [`algorithms::som::train`] and [`algorithms::som::map_to_nearest`].
//! Both accept any [`models::MatrixView`], so data stored in column-major order or as a strided
//! view is handled without copying it back into caller owned storage.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod utils;
