use log::debug;
use nalgebra::DVector;

use crate::{
    boundary::BoundaryCondition,
    builder::{build_coefficients, CoefficientTable},
    error::SplineError,
    options::SplineOptions,
    points::PointSequence,
    spacing::Spacing,
};

/// Smooth curve through an ordered sequence of points, parameterized by `t` in `[0, 1]`.
///
/// Built once, immutable afterwards. Evaluation never mutates the spline, so one instance can be
/// shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    points: PointSequence,
    spacing: Spacing,
    boundary_condition: BoundaryCondition,
    coefficients: CoefficientTable,
}

/// Query for [CubicSpline::interpolate]: one parameter value or a sequence of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parameter<'a> {
    Single(f64),
    Many(&'a [f64]),
}

impl From<f64> for Parameter<'_> {
    fn from(t: f64) -> Self {
        Parameter::Single(t)
    }
}

impl<'a> From<&'a [f64]> for Parameter<'a> {
    fn from(t: &'a [f64]) -> Self {
        Parameter::Many(t)
    }
}

impl<'a> From<&'a Vec<f64>> for Parameter<'a> {
    fn from(t: &'a Vec<f64>) -> Self {
        Parameter::Many(t.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Parameter<'a> {
    fn from(t: &'a [f64; N]) -> Self {
        Parameter::Many(t.as_slice())
    }
}

/// Result of [CubicSpline::interpolate].
///
/// A single-coordinate spline yields plain numbers instead of one-element points, and a single
/// parameter yields one value instead of a one-element sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolation {
    Scalar(f64),
    Point(DVector<f64>),
    Scalars(Vec<f64>),
    Points(Vec<DVector<f64>>),
}

impl Interpolation {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Interpolation::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<&DVector<f64>> {
        match self {
            Interpolation::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_scalars(&self) -> Option<&[f64]> {
        match self {
            Interpolation::Scalars(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_points(&self) -> Option<&[DVector<f64>]> {
        match self {
            Interpolation::Points(points) => Some(points),
            _ => None,
        }
    }
}

/// Evenly spaced evaluation of a whole spline, see [CubicSpline::sample].
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub t: Vec<f64>,
    pub points: Vec<DVector<f64>>,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

impl CubicSpline {
    /// Builds the spline through `points`.
    ///
    /// # Errors
    /// - [SplineError::DimensionMismatch] - ragged or empty point rows, or spacing length other than N-1,
    /// - [SplineError::InsufficientPoints] - fewer than 2 points, or fewer than 4 with
    ///   [BoundaryCondition::EqualThirdDerivative],
    /// - [SplineError::UnsupportedConfiguration] - non-uniform spacing with a boundary condition
    ///   requiring uniform spacing,
    /// - [SplineError::InvalidSpacing], [SplineError::NonFiniteInput] - bad numeric input,
    /// - [SplineError::SingularSystem] - the slope system could not be solved.
    pub fn new<P>(points: P, options: SplineOptions) -> Result<Self, SplineError>
    where
        P: TryInto<PointSequence, Error = SplineError>,
    {
        let points = points.try_into()?;
        let SplineOptions { spacing, boundary_condition } = options;
        let number_of_points = points.len();

        if number_of_points < 2 {
            return Err(SplineError::InsufficientPoints {
                required: 2,
                actual: number_of_points,
                context: "cubic spline",
            });
        }
        if number_of_points < boundary_condition.min_points() {
            return Err(SplineError::InsufficientPoints {
                required: boundary_condition.min_points(),
                actual: number_of_points,
                context: "equal-third-derivative boundary condition",
            });
        }

        let spacing = match spacing {
            Some(lengths) => Spacing::from_lengths(&lengths, number_of_points)?,
            None => Spacing::uniform(number_of_points),
        };

        if boundary_condition.requires_uniform_spacing() && !spacing.is_uniform() {
            return Err(SplineError::UnsupportedConfiguration(format!(
                "{} boundary condition requires uniform spacing",
                boundary_condition
            )));
        }

        debug!(
            "building cubic spline: {} points, {} dimensions, {} boundary condition, uniform spacing: {}",
            number_of_points,
            points.dimensions(),
            boundary_condition,
            spacing.is_uniform()
        );

        let coefficients = build_coefficients(&points, &spacing, boundary_condition)?;

        Ok(CubicSpline { points, spacing, boundary_condition, coefficients })
    }

    /// Uniformly spaced spline with natural boundary condition.
    pub fn natural<P>(points: P) -> Result<Self, SplineError>
    where
        P: TryInto<PointSequence, Error = SplineError>,
    {
        Self::new(points, SplineOptions::default())
    }

    /// Point at parameter `t`.
    /// # Errors
    /// [SplineError::OutOfDomain] when `t` is outside `[0, 1]`.
    pub fn evaluate(&self, t: f64) -> Result<DVector<f64>, SplineError> {
        let (index, u) = self.spacing.locate(t)?;
        Ok(self.evaluate_in_segment(index, u))
    }

    /// Points at every parameter of `t_vector`. Nothing is evaluated unless all values are inside
    /// `[0, 1]`. Ordered input is located in linear time.
    pub fn batch_evaluate(&self, t_vector: &[f64]) -> Result<Vec<DVector<f64>>, SplineError> {
        if let Some(t) = t_vector.iter().find(|t| !self.spacing.is_in_range(**t)) {
            return Err(SplineError::OutOfDomain { t: *t });
        }

        let mut results = Vec::with_capacity(t_vector.len());
        let mut index = 0;

        for t in t_vector {
            let (segment, u) = self.spacing.locate_with_hint(index, *t)?;
            index = segment;
            results.push(self.evaluate_in_segment(segment, u));
        }
        Ok(results)
    }

    /// Evaluates `t` with the shape collapses of [Interpolation].
    /// ```
    /// use hermite_path::{CubicSpline, Interpolation};
    ///
    /// let spline = CubicSpline::natural(vec![0.0, 1.0, 3.0]).unwrap();
    ///
    /// assert_eq!(Interpolation::Scalar(0.0), spline.interpolate(0.0).unwrap());
    /// assert_eq!(Some(&[0.0, 1.0][..]), spline.interpolate(&[0.0, 0.5]).unwrap().as_scalars());
    /// ```
    pub fn interpolate<'a>(&self, t: impl Into<Parameter<'a>>) -> Result<Interpolation, SplineError> {
        let is_scalar_valued = self.dimensions() == 1;

        match t.into() {
            Parameter::Single(t) => {
                let point = self.evaluate(t)?;
                if is_scalar_valued {
                    Ok(Interpolation::Scalar(point[0]))
                } else {
                    Ok(Interpolation::Point(point))
                }
            }
            Parameter::Many(t_vector) => {
                let points = self.batch_evaluate(t_vector)?;
                if is_scalar_valued {
                    Ok(Interpolation::Scalars(points.iter().map(|p| p[0]).collect()))
                } else {
                    Ok(Interpolation::Points(points))
                }
            }
        }
    }

    /// Derivative of given `order` with respect to the path parameter at `t`.
    /// Orders above 3 are zero.
    pub fn derivative(&self, t: f64, order: usize) -> Result<DVector<f64>, SplineError> {
        let (index, u) = self.spacing.locate(t)?;
        let scale = self.spacing.dt()[index].powi(order.min(4) as i32);

        Ok(DVector::from_iterator(
            self.dimensions(),
            (0..self.dimensions()).map(|dimension| {
                self.coefficients
                    .polynomial(index, dimension)
                    .derivative(order)
                    .evaluate(u)
                    / scale
            }),
        ))
    }

    /// `n` points at evenly spaced parameters from 0 to 1, both ends included.
    /// ```
    /// use hermite_path::CubicSpline;
    ///
    /// let spline = CubicSpline::natural([[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]]).unwrap();
    /// let sample = spline.sample(5).unwrap();
    ///
    /// assert_eq!(vec![0.0, 0.25, 0.5, 0.75, 1.0], sample.t);
    /// assert_eq!(5, sample.points.len());
    /// ```
    pub fn sample(&self, n: usize) -> Result<Sample, SplineError> {
        let t: Vec<f64> = match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let last = (n - 1) as f64;
                (0..n).map(|i| i as f64 / last).collect()
            }
        };
        let points = self.batch_evaluate(&t)?;
        Ok(Sample { t, points })
    }

    /// Number of interpolated points (N).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of coordinates per point (M).
    pub fn dimensions(&self) -> usize {
        self.points.dimensions()
    }

    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    pub fn boundary_condition(&self) -> BoundaryCondition {
        self.boundary_condition
    }

    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// Parameter value of every input point.
    pub fn segment_starts(&self) -> &[f64] {
        self.spacing.starts()
    }

    pub fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    fn evaluate_in_segment(&self, index: usize, u: f64) -> DVector<f64> {
        DVector::from_iterator(
            self.dimensions(),
            (0..self.dimensions())
                .map(|dimension| self.coefficients.polynomial(index, dimension).evaluate(u)),
        )
    }
}
