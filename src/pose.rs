//! Vehicle pose and movement constraints.

use crate::angle::vector_to_angle;
use crate::error::{JourneyError, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and direction of travel of a point vehicle.
///
/// The heading is a forward unit vector, not an angle. Producers are expected to keep it
/// normalized; the planner re-normalizes headings it receives via [`Pose::validated`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position.
    pub position: Vec2,

    /// Forward direction of travel (unit length).
    pub heading: Vec2,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: Vec2::X, // Forward is the positive X axis
        }
    }
}

impl Pose {
    pub fn new(position: Vec2, heading: Vec2) -> Self {
        Self { position, heading }
    }

    /// Creates a pose whose heading points at `angle` radians from the positive X axis.
    pub fn from_angle(position: Vec2, angle: f32) -> Self {
        Self {
            position,
            heading: Vec2::from_angle(angle),
        }
    }

    /// Heading expressed as a normalized angle.
    pub fn heading_angle(&self) -> f32 {
        vector_to_angle(self.heading)
    }

    /// Returns a copy with a unit heading, or an error if the pose cannot be planned from.
    pub fn validated(&self) -> Result<Self> {
        if !self.position.is_finite() {
            return Err(JourneyError::NonFinitePosition(self.position));
        }
        let heading = self
            .heading
            .try_normalize()
            .ok_or(JourneyError::DegenerateHeading(self.heading))?;
        Ok(Self {
            position: self.position,
            heading,
        })
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pose [position: {}, heading: {}]",
            self.position, self.heading
        )
    }
}

/// Kinematic limits of the vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementConstraints {
    /// Minimum turning radius. Must be positive and finite.
    pub turning_radius: f32,
}

impl MovementConstraints {
    pub fn new(turning_radius: f32) -> Self {
        Self { turning_radius }
    }

    /// Fails fast on a radius no geometry can be built from.
    pub fn validate(&self) -> Result<()> {
        if self.turning_radius.is_finite() && self.turning_radius > 0.0 {
            Ok(())
        } else {
            Err(JourneyError::InvalidTurningRadius(self.turning_radius))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_validated_normalizes_heading() {
        let pose = Pose::new(Vec2::new(1.0, 2.0), Vec2::new(0.0, 5.0));
        let valid = pose.validated().unwrap();
        assert_eq!(valid.position, pose.position);
        assert!(valid.heading.abs_diff_eq(Vec2::Y, 1e-6));
        assert_relative_eq!(valid.heading_angle(), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_validated_rejects_degenerate_input() {
        let zero_heading = Pose::new(Vec2::ZERO, Vec2::ZERO);
        assert!(matches!(
            zero_heading.validated(),
            Err(JourneyError::DegenerateHeading(_))
        ));

        let nan_position = Pose::new(Vec2::new(f32::NAN, 0.0), Vec2::X);
        assert!(matches!(
            nan_position.validated(),
            Err(JourneyError::NonFinitePosition(_))
        ));
    }

    #[test]
    fn test_constraints_validation() {
        assert!(MovementConstraints::new(2.0).validate().is_ok());
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                MovementConstraints::new(bad).validate(),
                Err(JourneyError::InvalidTurningRadius(_))
            ));
        }
    }
}
