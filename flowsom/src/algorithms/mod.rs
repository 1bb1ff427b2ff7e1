//! Contains algorithms: self-organizing map training, nearest node search and numeric kernels.

pub mod math;
pub mod som;
