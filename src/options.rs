use crate::{boundary::BoundaryCondition, error::SplineError};

/// Construction settings of a [CubicSpline](crate::CubicSpline).
///
/// - `spacing` - relative length of every segment, `None` for uniform spacing,
/// - `boundary_condition` - end conditions of the slope system.
///
/// # Example
/// ```
/// use hermite_path::{BoundaryCondition, SplineOptions};
///
/// let options = SplineOptions::default()
///     .with_spacing(vec![1.0, 2.0])
///     .with_boundary_condition_tag("natural")
///     .unwrap();
///
/// assert_eq!(BoundaryCondition::Natural, options.boundary_condition);
/// assert_eq!(Some(vec![1.0, 2.0]), options.spacing);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub spacing: Option<Vec<f64>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boundary_condition: BoundaryCondition,
}

impl SplineOptions {
    pub fn new(spacing: Option<Vec<f64>>, boundary_condition: BoundaryCondition) -> Self {
        SplineOptions { spacing, boundary_condition }
    }

    pub fn with_spacing(mut self, spacing: Vec<f64>) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn with_boundary_condition(mut self, boundary_condition: BoundaryCondition) -> Self {
        self.boundary_condition = boundary_condition;
        self
    }

    /// Same as [SplineOptions::with_boundary_condition] with the condition given by its tag.
    /// # Errors
    /// [SplineError::InvalidBoundaryCondition] for an unknown tag.
    pub fn with_boundary_condition_tag(self, tag: &str) -> Result<Self, SplineError> {
        Ok(self.with_boundary_condition(tag.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uniform_natural() {
        let options = SplineOptions::default();

        assert_eq!(None, options.spacing);
        assert_eq!(BoundaryCondition::Natural, options.boundary_condition);
    }

    #[test]
    fn unknown_tag() {
        let result = SplineOptions::default().with_boundary_condition_tag("periodic");

        assert_eq!(
            Err(SplineError::InvalidBoundaryCondition { tag: "periodic".to_string() }),
            result
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let options = SplineOptions::new(None, BoundaryCondition::EqualThirdDerivative);

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(r#"{"spacing":null,"boundary_condition":"equal-third-derivative"}"#, json);
        assert_eq!(options, serde_json::from_str(&json).unwrap());

        let partial: SplineOptions = serde_json::from_str(r#"{"spacing":[1.0,3.0]}"#).unwrap();
        assert_eq!(SplineOptions::default().with_spacing(vec![1.0, 3.0]), partial);
    }
}
