//! Contains data models shared by algorithms.

mod matrix;
pub use self::matrix::*;
