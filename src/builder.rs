use log::trace;
use nalgebra::{DMatrix, DVector};

use crate::{
    boundary::BoundaryCondition, error::SplineError, points::PointSequence,
    polynomial::Polynomial, spacing::Spacing,
};

/// Per-segment, per-dimension cubic coefficients in the local segment parameter `u` in `[0, 1]`.
///
/// Shape is `(N-1) × M × 4`; entry `[c0, c1, c2, c3]` describes `c0 + c1·u + c2·u² + c3·u³`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    number_of_segments: usize,
    dimensions: usize,
    polynomials: Vec<Polynomial>,
}

impl CoefficientTable {
    pub fn number_of_segments(&self) -> usize {
        self.number_of_segments
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Cubic of `segment` along coordinate `dimension`.
    pub fn polynomial(&self, segment: usize, dimension: usize) -> &Polynomial {
        &self.polynomials[segment * self.dimensions + dimension]
    }

    /// Coefficients `[c0, c1, c2, c3]` of `segment` along coordinate `dimension`.
    pub fn get(&self, segment: usize, dimension: usize) -> [f64; 4] {
        let mut coefficients = [0.0; 4];
        for (target, c) in coefficients
            .iter_mut()
            .zip(self.polynomial(segment, dimension).coefficients())
        {
            *target = *c;
        }
        coefficients
    }
}

/// Slope system `A·d = b` of one coordinate. The unknowns are the first derivatives with respect
/// to the global path parameter at every point.
struct LinearSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl LinearSystem {
    fn assemble(values: &DVector<f64>, spacing: &Spacing, boundary_condition: BoundaryCondition) -> Self {
        let size = values.len();
        let dt = spacing.dt();
        let mut system = LinearSystem {
            matrix: DMatrix::zeros(size, size),
            rhs: DVector::zeros(size),
        };

        system.boundary_equations(values, dt, boundary_condition);

        // C1 and C2 continuity between the segments meeting at point i
        for i in 1..size - 1 {
            let h0 = 1.0 / dt[i - 1];
            let h1 = 1.0 / dt[i];

            system.matrix[(i, i - 1)] = h0;
            system.matrix[(i, i)] = 2.0 * (h0 + h1);
            system.matrix[(i, i + 1)] = h1;
            system.rhs[i] = 3.0 * (values[i] - values[i - 1]) * h0 * h0
                + 3.0 * (values[i + 1] - values[i]) * h1 * h1;
        }
        system
    }

    fn boundary_equations(&mut self, values: &DVector<f64>, dt: &[f64], boundary_condition: BoundaryCondition) {
        let last = values.len() - 1;

        match boundary_condition {
            BoundaryCondition::Natural => {
                let h = 1.0 / dt[0];
                self.matrix[(0, 0)] = 2.0 * h;
                self.matrix[(0, 1)] = h;
                self.rhs[0] = 3.0 * (values[1] - values[0]) * h * h;

                let h = 1.0 / dt[last - 1];
                self.matrix[(last, last - 1)] = h;
                self.matrix[(last, last)] = 2.0 * h;
                self.rhs[last] = 3.0 * (values[last] - values[last - 1]) * h * h;
            }
            BoundaryCondition::EqualThirdDerivative => {
                // spacing is uniform here, a single h serves both ends
                let h = 1.0 / dt[0];
                self.matrix[(0, 0)] = 1.0;
                self.matrix[(0, 2)] = -1.0;
                self.rhs[0] = (4.0 * values[1] - 2.0 * values[0] - 2.0 * values[2]) * h;

                self.matrix[(last, last - 2)] = -1.0;
                self.matrix[(last, last)] = 1.0;
                self.rhs[last] =
                    (2.0 * values[last] + 2.0 * values[last - 2] - 4.0 * values[last - 1]) * h;
            }
        }
    }

    fn solve(self, dimension: usize) -> Result<DVector<f64>, SplineError> {
        self.matrix
            .lu()
            .solve(&self.rhs)
            .ok_or(SplineError::SingularSystem { dimension })
    }
}

/// Solves the slope system of every coordinate and converts the slopes into Hermite cubics.
///
/// Inputs are expected to be validated already: at least `boundary_condition.min_points()`
/// points, `spacing` built for the same number of points, and uniform when the boundary
/// condition requires it.
pub(crate) fn build_coefficients(
    points: &PointSequence,
    spacing: &Spacing,
    boundary_condition: BoundaryCondition,
) -> Result<CoefficientTable, SplineError> {
    let number_of_segments = points.len() - 1;
    let dimensions = points.dimensions();
    let dt = spacing.dt();

    let mut polynomials = vec![Polynomial::new(Vec::new()); number_of_segments * dimensions];

    for dimension in 0..dimensions {
        let values = points.coordinate(dimension);
        let slopes = LinearSystem::assemble(&values, spacing, boundary_condition).solve(dimension)?;
        trace!("dimension {}: slopes {:?}", dimension, slopes.as_slice());

        for i in 0..number_of_segments {
            polynomials[i * dimensions + dimension] =
                hermite_cubic(values[i], values[i + 1], slopes[i], slopes[i + 1], dt[i]);
        }
    }

    Ok(CoefficientTable { number_of_segments, dimensions, polynomials })
}

/// Cubic on `u` in `[0, 1]` joining `p0` to `p1` with global slopes `d0`, `d1` over a segment of
/// length `dt`.
fn hermite_cubic(p0: f64, p1: f64, d0: f64, d1: f64, dt: f64) -> Polynomial {
    let delta = p1 - p0;
    Polynomial::new(vec![
        p0,
        d0 * dt,
        3.0 * delta - (2.0 * d0 + d1) * dt,
        -2.0 * delta + (d0 + d1) * dt,
    ])
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn hermite_cubic_endpoints() {
        let eps = 1e-12;
        let dt = 0.25;
        let polynomial = hermite_cubic(1.0, 3.0, 2.0, -4.0, dt);

        assert_approx_eq!(1.0, polynomial.evaluate(0.0), eps);
        assert_approx_eq!(3.0, polynomial.evaluate(1.0), eps);
        assert_approx_eq!(2.0 * dt, polynomial.derivative(1).evaluate(0.0), eps);
        assert_approx_eq!(-4.0 * dt, polynomial.derivative(1).evaluate(1.0), eps);
    }

    #[test]
    fn uniform_natural_system() {
        let values = DVector::from_vec(vec![0.0, 1.0, 3.0, 2.0]);
        let spacing = Spacing::uniform(4);
        let system = LinearSystem::assemble(&values, &spacing, BoundaryCondition::Natural);

        // rows are the (2, 1), (1, 4, 1), (1, 2) pattern scaled by N - 1
        let h = 3.0;
        let expected = DMatrix::from_row_slice(4, 4, &[
            2.0, 1.0, 0.0, 0.0,
            1.0, 4.0, 1.0, 0.0,
            0.0, 1.0, 4.0, 1.0,
            0.0, 0.0, 1.0, 2.0,
        ]) * h;
        let expected_rhs = DVector::from_vec(vec![3.0, 9.0, 3.0, -3.0]) * h * h;

        for (a, b) in system.matrix.iter().zip(expected.iter()) {
            assert_approx_eq!(*b, *a, 1e-12);
        }
        for (a, b) in system.rhs.iter().zip(expected_rhs.iter()) {
            assert_approx_eq!(*b, *a, 1e-12);
        }
    }

    #[test]
    fn equal_third_derivative_rows() {
        let values = DVector::from_vec(vec![0.0, 4.0, 8.0, 6.0, 10.0]);
        let spacing = Spacing::uniform(5);
        let system = LinearSystem::assemble(&values, &spacing, BoundaryCondition::EqualThirdDerivative);

        assert_eq!(1.0, system.matrix[(0, 0)]);
        assert_eq!(0.0, system.matrix[(0, 1)]);
        assert_eq!(-1.0, system.matrix[(0, 2)]);
        assert_eq!(-1.0, system.matrix[(4, 2)]);
        assert_eq!(1.0, system.matrix[(4, 4)]);
        assert_approx_eq!((16.0 - 0.0 - 16.0) * 4.0, system.rhs[0], 1e-12);
        assert_approx_eq!((20.0 + 16.0 - 24.0) * 4.0, system.rhs[4], 1e-12);
    }

    #[test]
    fn two_points_give_straight_line() {
        let points = PointSequence::from_rows(&[[1.0, -2.0], [3.0, 6.0]]).unwrap();
        let spacing = Spacing::uniform(2);
        let table = build_coefficients(&points, &spacing, BoundaryCondition::Natural).unwrap();

        assert_eq!(1, table.number_of_segments());
        assert_eq!(2, table.dimensions());

        let x = table.get(0, 0);
        assert_approx_eq!(1.0, x[0], 1e-12);
        assert_approx_eq!(2.0, x[1], 1e-12);
        assert_approx_eq!(0.0, x[2], 1e-12);
        assert_approx_eq!(0.0, x[3], 1e-12);

        let y = table.get(0, 1);
        assert_approx_eq!(-2.0, y[0], 1e-12);
        assert_approx_eq!(8.0, y[1], 1e-12);
    }

    #[test]
    fn reproduces_cubic_with_equal_third_derivative() {
        // one cubic through all points satisfies equal third derivatives everywhere
        let f = |t: f64| 1.0 - 2.0 * t + 0.5 * t * t + 3.0 * t * t * t;
        let values: Vec<f64> = (0..6).map(|i| f(i as f64 / 5.0)).collect();
        let points = PointSequence::from_scalars(&values).unwrap();
        let spacing = Spacing::uniform(6);
        let table = build_coefficients(&points, &spacing, BoundaryCondition::EqualThirdDerivative).unwrap();

        for segment in 0..5 {
            let u = 0.3;
            let t = (segment as f64 + u) / 5.0;
            assert_approx_eq!(f(t), table.polynomial(segment, 0).evaluate(u), 1e-9);
        }
    }
}
