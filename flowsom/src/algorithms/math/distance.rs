#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::models::{Matrix, MatrixView, contiguous_data};
use crate::utils::{Float, SomError, SomResult};

/// Keeps result of the nearest reference search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    /// Index of the closest reference vector.
    pub index: usize,
    /// Euclidean (non-squared) distance to the closest reference vector.
    pub distance: Float,
}

/// Calculates squared euclidean distance between two vectors of the same length.
#[inline]
pub fn squared_euclidean(a: &[Float], b: &[Float]) -> Float {
    debug_assert_eq!(a.len(), b.len());

    a.iter().zip(b.iter()).fold(Float::default(), |acc, (a, b)| {
        let diff = a - b;
        acc + diff * diff
    })
}

/// Calculates euclidean distance between two vectors of the same length.
#[inline]
pub fn euclidean(a: &[Float], b: &[Float]) -> Float {
    squared_euclidean(a, b).sqrt()
}

/// Finds the reference row closest to the query. Ties are resolved in favor of the lowest index.
/// Returns `InvalidParameter` for a query with non-finite values or when no reference lies at
/// a finite distance.
pub fn find_nearest(query: &[Float], references: &Matrix) -> SomResult<Nearest> {
    validate_references(query.len(), references.shape())?;
    validate_query(query)?;

    ensure_found(find_nearest_in_slice(query, references.as_slice()))
}

/// Finds the reference row closest to the query for references stored with any memory layout.
/// Non-contiguous references are copied into a compact scratch buffer once.
pub fn find_nearest_in_view(query: &[Float], references: &dyn MatrixView) -> SomResult<Nearest> {
    validate_references(query.len(), references.shape())?;
    validate_query(query)?;

    let data = contiguous_data(references);

    ensure_found(find_nearest_in_slice(query, data.as_ref()))
}

/// Finds nearest row in compact row-major references which row length equals to query length.
/// Squared distances are compared, a square root is taken only from the winner.
/// When no distance is below infinity (NaN or overflow), index 0 with infinite distance is returned.
pub(crate) fn find_nearest_in_slice(query: &[Float], references: &[Float]) -> Nearest {
    debug_assert!(!query.is_empty() && references.len() % query.len() == 0);

    let (index, squared) = references.chunks_exact(query.len()).enumerate().fold(
        (0, Float::INFINITY),
        |(best_idx, best_dist), (idx, reference)| {
            let dist = squared_euclidean(query, reference);
            if dist < best_dist { (idx, dist) } else { (best_idx, best_dist) }
        },
    );

    Nearest { index, distance: squared.sqrt() }
}

fn validate_query(query: &[Float]) -> SomResult<()> {
    match query.iter().position(|value| !value.is_finite()) {
        Some(idx) => Err(SomError::InvalidParameter(format!("query has non-finite value at {idx}"))),
        None => Ok(()),
    }
}

fn ensure_found(nearest: Nearest) -> SomResult<Nearest> {
    if nearest.distance.is_finite() {
        Ok(nearest)
    } else {
        Err(SomError::InvalidParameter("no reference vector at finite distance".to_string()))
    }
}

fn validate_references(query_len: usize, (rows, cols): (usize, usize)) -> SomResult<()> {
    if query_len != cols {
        return Err(SomError::DimensionMismatch { expected: cols, actual: query_len });
    }

    if rows == 0 {
        return Err(SomError::EmptyInput("no reference vectors to search in".to_string()));
    }

    if cols == 0 {
        return Err(SomError::EmptyInput("reference vectors have no features".to_string()));
    }

    Ok(())
}
