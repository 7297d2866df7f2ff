use nalgebra::{DMatrix, DVector};

use crate::error::SplineError;

/// Ordered sequence of N points with M coordinates each, stored row-per-point.
///
/// Every coordinate is checked to be finite and the shape is fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    data: DMatrix<f64>,
}

impl PointSequence {
    /// Builds a sequence from a N×M matrix where each row is a point.
    /// # Errors
    /// [SplineError::DimensionMismatch] when the matrix has no columns,
    /// [SplineError::NonFiniteInput] when a coordinate is NaN or infinite.
    pub fn new(data: DMatrix<f64>) -> Result<Self, SplineError> {
        if data.ncols() == 0 {
            return Err(SplineError::DimensionMismatch {
                expected: 1,
                actual: 0,
                context: "point coordinates",
            });
        }

        for row in 0..data.nrows() {
            for column in 0..data.ncols() {
                if !data[(row, column)].is_finite() {
                    return Err(SplineError::NonFiniteInput { row, column });
                }
            }
        }

        Ok(PointSequence { data })
    }

    /// One-dimensional sequence, every value is a point with a single coordinate.
    pub fn from_scalars(values: &[f64]) -> Result<Self, SplineError> {
        Self::new(DMatrix::from_column_slice(values.len(), 1, values))
    }

    /// Builds a sequence from rows of coordinates. All rows must have the same length.
    /// ```
    /// use hermite_path::PointSequence;
    ///
    /// let ragged = PointSequence::from_rows(&[vec![0.0, 1.0], vec![2.0]]);
    /// assert!(ragged.is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, SplineError> {
        let dimensions = rows.first().map(|r| r.as_ref().len()).unwrap_or(1);

        if let Some(row) = rows.iter().find(|r| r.as_ref().len() != dimensions) {
            return Err(SplineError::DimensionMismatch {
                expected: dimensions,
                actual: row.as_ref().len(),
                context: "point row length",
            });
        }

        let flat: Vec<f64> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(DMatrix::from_row_slice(rows.len(), dimensions, &flat))
    }

    /// Number of points (N).
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Number of coordinates per point (M).
    pub fn dimensions(&self) -> usize {
        self.data.ncols()
    }

    pub fn point(&self, index: usize) -> DVector<f64> {
        self.data.row(index).transpose()
    }

    /// Values of one coordinate across all points.
    pub fn coordinate(&self, dimension: usize) -> DVector<f64> {
        self.data.column(dimension).into_owned()
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }
}

impl TryFrom<DMatrix<f64>> for PointSequence {
    type Error = SplineError;

    fn try_from(data: DMatrix<f64>) -> Result<Self, Self::Error> {
        PointSequence::new(data)
    }
}

impl TryFrom<&[f64]> for PointSequence {
    type Error = SplineError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        PointSequence::from_scalars(values)
    }
}

impl TryFrom<Vec<f64>> for PointSequence {
    type Error = SplineError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        PointSequence::from_scalars(&values)
    }
}

impl TryFrom<Vec<Vec<f64>>> for PointSequence {
    type Error = SplineError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        PointSequence::from_rows(&rows)
    }
}

impl<const M: usize> TryFrom<&[[f64; M]]> for PointSequence {
    type Error = SplineError;

    fn try_from(rows: &[[f64; M]]) -> Result<Self, Self::Error> {
        PointSequence::from_rows(rows)
    }
}

impl<const N: usize, const M: usize> TryFrom<[[f64; M]; N]> for PointSequence {
    type Error = SplineError;

    fn try_from(rows: [[f64; M]; N]) -> Result<Self, Self::Error> {
        PointSequence::from_rows(&rows)
    }
}
