//! This module contains distance calculations and small numeric kernels.

mod distance;
pub use self::distance::*;

mod elementwise;
pub use self::elementwise::*;
