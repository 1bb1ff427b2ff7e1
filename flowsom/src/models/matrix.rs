#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{Float, SomError, SomResult};
use std::borrow::Cow;

/// Represents any two dimensional view on numeric data regardless of its memory layout.
pub trait MatrixView: Sync {
    /// Returns shape of the matrix as (rows, cols).
    fn shape(&self) -> (usize, usize);

    /// Returns a value at the given position.
    fn get(&self, row: usize, col: usize) -> Float;

    /// Copies the given row into the target slice which length should be equal to amount of columns.
    fn copy_row(&self, row: usize, target: &mut [Float]) {
        target.iter_mut().enumerate().for_each(|(col, value)| *value = self.get(row, col));
    }

    /// Returns underlying data when it is stored compactly in row-major order.
    fn as_contiguous(&self) -> Option<&[Float]> {
        None
    }
}

/// An owned matrix stored compactly in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Float>,
}

impl Matrix {
    /// Creates a new matrix from row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<Float>) -> SomResult<Self> {
        if rows * cols != data.len() {
            return Err(SomError::InvalidParameter(format!(
                "{rows}x{cols} matrix cannot be built from {} values",
                data.len()
            )));
        }

        Ok(Self { rows, cols, data })
    }

    /// Creates a new matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.; rows * cols] }
    }

    /// Creates a new matrix from a list of rows which all should have the same length.
    pub fn from_rows<R: AsRef<[Float]>>(rows: &[R]) -> SomResult<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);

        for row in rows.iter().map(|row| row.as_ref()) {
            if row.len() != cols {
                return Err(SomError::DimensionMismatch { expected: cols, actual: row.len() });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { rows: rows.len(), cols, data })
    }

    /// Copies any matrix view into a compact row-major matrix. Source data is not modified.
    pub fn from_view(view: &dyn MatrixView) -> Self {
        let (rows, cols) = view.shape();

        let data = if let Some(data) = view.as_contiguous() {
            data.to_vec()
        } else {
            let mut data = vec![0.; rows * cols];
            if cols > 0 {
                data.chunks_exact_mut(cols).enumerate().for_each(|(row, target)| view.copy_row(row, target));
            }
            data
        };

        Self { rows, cols, data }
    }

    /// Returns amount of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Returns amount of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Returns a row by its index.
    pub fn row(&self, row: usize) -> &[Float] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a mutable row by its index.
    pub fn row_mut(&mut self, row: usize) -> &mut [Float] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Returns an iterator over rows.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Float]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// Returns all values as a row-major slice.
    pub fn as_slice(&self) -> &[Float] {
        self.data.as_slice()
    }

    /// Returns a strided view on this matrix.
    pub fn view(&self) -> StridedView<'_> {
        StridedView { data: self.data.as_slice(), offset: 0, rows: self.rows, cols: self.cols, strides: (self.cols, 1) }
    }

    /// Consumes matrix returning its row-major data.
    pub fn into_vec(self) -> Vec<Float> {
        self.data
    }
}

impl MatrixView for Matrix {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get(&self, row: usize, col: usize) -> Float {
        self.data[row * self.cols + col]
    }

    fn copy_row(&self, row: usize, target: &mut [Float]) {
        target.copy_from_slice(self.row(row));
    }

    fn as_contiguous(&self) -> Option<&[Float]> {
        Some(self.data.as_slice())
    }
}

/// A borrowed view on numeric data with arbitrary offset and strides (measured in elements).
///
/// Covers row-major and column-major storage, transposed matrices and views with skipped
/// rows or columns.
#[derive(Clone, Copy, Debug)]
pub struct StridedView<'a> {
    data: &'a [Float],
    offset: usize,
    rows: usize,
    cols: usize,
    strides: (usize, usize),
}

impl<'a> StridedView<'a> {
    /// Creates a new view checking that all addressed elements are within data.
    pub fn new(data: &'a [Float], offset: usize, shape: (usize, usize), strides: (usize, usize)) -> SomResult<Self> {
        let (rows, cols) = shape;

        if rows > 0 && cols > 0 {
            let last = (rows - 1)
                .checked_mul(strides.0)
                .zip((cols - 1).checked_mul(strides.1))
                .and_then(|(row_span, col_span)| row_span.checked_add(col_span))
                .and_then(|span| span.checked_add(offset))
                .ok_or_else(|| SomError::InvalidLayout("view strides overflow address space".to_string()))?;

            if last >= data.len() {
                return Err(SomError::InvalidLayout(format!(
                    "view addresses element {last} of {} available",
                    data.len()
                )));
            }
        }

        Ok(Self { data, offset, rows, cols, strides })
    }

    /// Creates a view on row-major data.
    pub fn row_major(data: &'a [Float], rows: usize, cols: usize) -> SomResult<Self> {
        Self::new(data, 0, (rows, cols), (cols, 1))
    }

    /// Creates a view on column-major data.
    pub fn column_major(data: &'a [Float], rows: usize, cols: usize) -> SomResult<Self> {
        Self::new(data, 0, (rows, cols), (1, rows))
    }

    /// Returns a transposed view on the same data.
    pub fn transpose(&self) -> Self {
        Self { data: self.data, offset: self.offset, rows: self.cols, cols: self.rows, strides: (self.strides.1, self.strides.0) }
    }

    /// Returns a view which contains every `step` row starting from the first one.
    pub fn step_rows(&self, step: usize) -> SomResult<Self> {
        if step == 0 {
            return Err(SomError::InvalidParameter("row step should be positive".to_string()));
        }

        // NOTE saturation can only happen when the stepped view keeps a single row
        let strides = (self.strides.0.saturating_mul(step), self.strides.1);

        Ok(Self { rows: self.rows.div_ceil(step), strides, ..*self })
    }

    /// Returns a view on the given half-open range of columns.
    pub fn columns(&self, start: usize, end: usize) -> SomResult<Self> {
        if start > end || end > self.cols {
            return Err(SomError::InvalidParameter(format!(
                "column range {start}..{end} is out of 0..{}",
                self.cols
            )));
        }

        Ok(Self { offset: self.offset + start * self.strides.1, cols: end - start, ..*self })
    }

    /// Returns true if the view describes compact row-major storage.
    pub fn is_contiguous(&self) -> bool {
        let (row_stride, col_stride) = self.strides;

        (col_stride == 1 || self.cols <= 1) && (row_stride == self.cols || self.rows <= 1)
    }
}

impl MatrixView for StridedView<'_> {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get(&self, row: usize, col: usize) -> Float {
        self.data[self.offset + row * self.strides.0 + col * self.strides.1]
    }

    fn as_contiguous(&self) -> Option<&[Float]> {
        match (self.rows * self.cols, self.is_contiguous()) {
            (0, _) => Some(&self.data[..0]),
            (size, true) => Some(&self.data[self.offset..self.offset + size]),
            _ => None,
        }
    }
}

/// Returns view data in compact row-major order borrowing it when possible.
pub(crate) fn contiguous_data(view: &dyn MatrixView) -> Cow<'_, [Float]> {
    match view.as_contiguous() {
        Some(data) => Cow::Borrowed(data),
        None => Cow::Owned(Matrix::from_view(view).into_vec()),
    }
}
