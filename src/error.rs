use thiserror::Error;

/// Errors raised while building or evaluating a [CubicSpline](crate::CubicSpline).
///
/// Construction errors are raised before any coefficient is computed, so a failed call never
/// leaves a partially built spline behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("unknown boundary condition `{tag}`")]
    InvalidBoundaryCondition { tag: String },

    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: &'static str,
    },

    #[error("insufficient points for {context}: need at least {required}, got {actual}")]
    InsufficientPoints {
        required: usize,
        actual: usize,
        context: &'static str,
    },

    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("spacing[{index}] = {value} must be finite, positive and not negligible against the other lengths")]
    InvalidSpacing { index: usize, value: f64 },

    #[error("point coordinate ({row}, {column}) is not finite")]
    NonFiniteInput { row: usize, column: usize },

    #[error("linear system for dimension {dimension} is singular")]
    SingularSystem { dimension: usize },

    #[error("parameter t = {t} is outside [0, 1]")]
    OutOfDomain { t: f64 },
}
