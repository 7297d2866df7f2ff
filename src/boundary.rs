use std::{fmt::Display, str::FromStr};

use crate::error::SplineError;

/// End conditions closing the slope system at the first and last point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BoundaryCondition {
    /// Second derivative vanishes at both endpoints.
    #[default]
    Natural,
    /// Third derivatives of the first two segments are equal, and likewise for the last two.
    /// Needs at least 4 points and uniform spacing.
    EqualThirdDerivative,
}

impl BoundaryCondition {
    /// Smallest number of points the condition can be built from.
    pub fn min_points(&self) -> usize {
        match self {
            BoundaryCondition::Natural => 2,
            BoundaryCondition::EqualThirdDerivative => 4,
        }
    }

    pub fn requires_uniform_spacing(&self) -> bool {
        matches!(self, BoundaryCondition::EqualThirdDerivative)
    }
}

impl FromStr for BoundaryCondition {
    type Err = SplineError;

    /// Accepts `natural`, `d_equal` and `equal-third-derivative` (case sensitive).
    /// ```
    /// use hermite_path::BoundaryCondition;
    ///
    /// assert_eq!(Ok(BoundaryCondition::EqualThirdDerivative), "d_equal".parse());
    /// assert!("clamped".parse::<BoundaryCondition>().is_err());
    /// ```
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "natural" => Ok(BoundaryCondition::Natural),
            "d_equal" | "equal-third-derivative" => Ok(BoundaryCondition::EqualThirdDerivative),
            _ => Err(SplineError::InvalidBoundaryCondition { tag: tag.to_string() }),
        }
    }
}

impl Display for BoundaryCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryCondition::Natural => write!(f, "natural"),
            BoundaryCondition::EqualThirdDerivative => write!(f, "equal-third-derivative"),
        }
    }
}
