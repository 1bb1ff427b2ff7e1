//! Contains functionality to analyze mapping results.

mod clusters;
pub use self::clusters::*;
