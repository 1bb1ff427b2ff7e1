#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Specifies errors raised by numeric kernels of the crate.
///
/// All errors are raised before any partial computation is done, so no partial result is ever
/// returned together with an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SomError {
    /// Feature count of a query, dataset or grid does not match the expected one.
    DimensionMismatch {
        /// An expected amount of features.
        expected: usize,
        /// An actual amount of features.
        actual: usize,
    },
    /// Matrix has unexpected shape.
    InvalidShape {
        /// Amount of rows.
        rows: usize,
        /// Amount of columns.
        cols: usize,
    },
    /// Matrix storage layout is not supported by the operation.
    InvalidLayout(String),
    /// Input has no data to work with: no rows, no nodes, etc.
    EmptyInput(String),
    /// A parameter value is out of its allowed range.
    InvalidParameter(String),
}

/// A type alias for result type with `SomError`.
pub type SomResult<T> = Result<T, SomError>;

impl Display for SomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SomError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected} features, got {actual}")
            }
            SomError::InvalidShape { rows, cols } => write!(f, "invalid shape: {rows}x{cols}"),
            SomError::InvalidLayout(msg) => write!(f, "invalid layout: {msg}"),
            SomError::EmptyInput(msg) => write!(f, "empty input: {msg}"),
            SomError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for SomError {}

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for GenericError {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<SomError> for GenericError {
    fn from(value: SomError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
