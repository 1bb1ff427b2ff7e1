#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/elementwise_test.rs"]
mod elementwise_test;

use crate::models::{Matrix, MatrixView};
use crate::utils::{SomError, SomResult};

/// Squares each element of a square matrix. Unlike other kernels of the crate, it does not
/// normalize input layout: a view which is not stored compactly is rejected.
pub fn square(view: &dyn MatrixView) -> SomResult<Matrix> {
    let (rows, cols) = view.shape();

    if rows != cols {
        return Err(SomError::InvalidShape { rows, cols });
    }

    let data = view
        .as_contiguous()
        .ok_or_else(|| SomError::InvalidLayout("input is not stored contiguously".to_string()))?;

    Matrix::new(rows, cols, data.iter().map(|value| value * value).collect())
}
