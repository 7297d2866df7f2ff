//! Piecewise cubic interpolation of an ordered sequence of N-dimensional points.
//! The curve passes through every point and is evaluated at a path parameter `t` in `[0, 1]`,
//! spread uniformly over the segments or according to user supplied segment lengths.
//!
//! # Example
//! ```
//! use hermite_path::{BoundaryCondition, CubicSpline, SplineOptions};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = [[0.0, 1.0], [4.0, 5.0], [8.0, 4.0], [6.0, 1.0], [10.0, 5.0]];
//! let options = SplineOptions::default()
//!     .with_boundary_condition(BoundaryCondition::EqualThirdDerivative);
//! let spline = CubicSpline::new(points, options).unwrap();
//!
//! let end = spline.evaluate(1.0).unwrap();
//! assert_approx_eq!(10.0, end[0], 1e-12);
//! assert_approx_eq!(5.0, end[1], 1e-12);
//!
//! let sample = spline.sample(100).unwrap();
//! assert_eq!(100, sample.points.len());
//! ```

mod boundary;
mod builder;
mod error;
mod options;
mod points;
mod polynomial;
mod spacing;
mod spline;

pub use boundary::BoundaryCondition;
pub use builder::CoefficientTable;
pub use error::SplineError;
pub use options::SplineOptions;
pub use points::PointSequence;
pub use polynomial::Polynomial;
pub use spacing::Spacing;
pub use spline::{CubicSpline, Interpolation, Parameter, Sample};
