//! Angle arithmetic on the unit circle.
//!
//! All angles are radians. Normalized angles lie in `[0, 2π)`, measured counterclockwise from
//! the positive X axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::ops::Neg;

/// One full turn in radians.
pub const FULL_CIRCLE: f32 = TAU;

/// Directed spans within this distance of a full turn are reported as zero.
pub const ANGLE_EPSILON: f32 = 1e-4;

/// Sense of rotation around a circle.
///
/// The discriminants are the signed multipliers used throughout the geometry code, so a
/// direction applies directly to an angle or a perpendicular vector via [`sign`](Self::sign).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum RotationDirection {
    Clockwise = -1,
    Counterclockwise = 1,
}

impl RotationDirection {
    /// Returns `-1.0` for clockwise and `+1.0` for counterclockwise.
    pub fn sign(self) -> f32 {
        self as i8 as f32
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::Counterclockwise,
            Self::Counterclockwise => Self::Clockwise,
        }
    }
}

impl Neg for RotationDirection {
    type Output = Self;

    fn neg(self) -> Self {
        self.opposite()
    }
}

/// Maps any angle into `[0, 2π)`.
pub fn normalize(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_CIRCLE);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= FULL_CIRCLE { 0.0 } else { wrapped }
}

/// Angle of `v` measured from the positive X axis, normalized.
pub fn vector_to_angle(v: Vec2) -> f32 {
    normalize(v.y.atan2(v.x))
}

/// Unit vector pointing at `angle`.
pub fn angle_to_vector(angle: f32) -> Vec2 {
    Vec2::from_angle(angle)
}

/// Rotates `v` counterclockwise by `radians`.
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}

/// Rotation needed to go from `start` to `end` while turning in `direction`.
///
/// The magnitude is the arc span. The sign is bookkeeping only: the counterclockwise wrap is
/// positive, the clockwise wrap is negative, and the non-wrapping case is always non-negative.
/// Callers that need an arc length take the absolute value.
pub fn directed_angular_distance(start: f32, end: f32, direction: RotationDirection) -> f32 {
    let needs_to_cross_zero = match direction {
        RotationDirection::Counterclockwise => end < start,
        RotationDirection::Clockwise => end > start,
    };

    let distance = if needs_to_cross_zero {
        match direction {
            RotationDirection::Counterclockwise => end + FULL_CIRCLE - start,
            RotationDirection::Clockwise => -(start + FULL_CIRCLE - end),
        }
    } else {
        (end - start).abs()
    };

    if distance.abs() > FULL_CIRCLE - ANGLE_EPSILON {
        0.0
    } else {
        distance
    }
}

/// Whether `angle` lies on the arc from `start` to `end` traversed in `direction`.
pub fn is_between(start: f32, end: f32, angle: f32, direction: RotationDirection) -> bool {
    directed_angular_distance(start, angle, direction).abs()
        < directed_angular_distance(start, end, direction).abs()
}

/// Shortest unsigned angular distance between `a` and `b`.
pub fn min_angular_distance(a: f32, b: f32) -> f32 {
    directed_angular_distance(a, b, RotationDirection::Counterclockwise)
        .abs()
        .min(directed_angular_distance(a, b, RotationDirection::Clockwise).abs())
}

/// Direction of the shortest rotation from `a` to `b`. Ties resolve counterclockwise.
pub fn min_rotation_direction(a: f32, b: f32) -> RotationDirection {
    let ccw = directed_angular_distance(a, b, RotationDirection::Counterclockwise).abs();
    let cw = directed_angular_distance(a, b, RotationDirection::Clockwise).abs();
    if ccw <= cw {
        RotationDirection::Counterclockwise
    } else {
        RotationDirection::Clockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_range() {
        for a in [-100.0, -TAU, -PI, -1e-7, 0.0, 1.0, TAU, 3.0 * TAU + 0.5, 1e4] {
            let n = normalize(a);
            assert!((0.0..FULL_CIRCLE).contains(&n), "normalize({a}) = {n}");
        }
    }

    #[test]
    fn test_normalize_periodic() {
        for k in -3..=3 {
            let a = 1.25 + k as f32 * TAU;
            assert_relative_eq!(normalize(a), 1.25, epsilon = 1e-4);
        }
        assert_eq!(normalize(0.0), 0.0);
        assert_relative_eq!(normalize(-FRAC_PI_2), 3.0 * FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_directed_distance_magnitudes() {
        let ccw = RotationDirection::Counterclockwise;
        let cw = RotationDirection::Clockwise;

        // No wrap.
        assert_relative_eq!(directed_angular_distance(0.5, 2.0, ccw), 1.5, epsilon = 1e-6);
        assert_relative_eq!(directed_angular_distance(2.0, 0.5, cw), 1.5, epsilon = 1e-6);

        // Wraps across zero.
        assert_relative_eq!(
            directed_angular_distance(2.0, 0.5, ccw),
            TAU - 1.5,
            epsilon = 1e-5
        );
        let cw_wrap = directed_angular_distance(0.5, 2.0, cw);
        assert!(cw_wrap < 0.0, "clockwise wrap is reported negative");
        assert_relative_eq!(cw_wrap.abs(), TAU - 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_near_full_turn_collapses_to_zero() {
        let ccw = RotationDirection::Counterclockwise;
        let start = 3.0 * FRAC_PI_2;
        assert_eq!(directed_angular_distance(start, start - 1e-6, ccw), 0.0);
        assert_eq!(
            directed_angular_distance(TAU - 1e-6, 1e-6, RotationDirection::Clockwise),
            0.0
        );
    }

    #[test]
    fn test_is_between() {
        let ccw = RotationDirection::Counterclockwise;
        let cw = RotationDirection::Clockwise;
        assert!(is_between(0.0, PI, FRAC_PI_2, ccw));
        assert!(!is_between(0.0, PI, 3.0 * FRAC_PI_2, ccw));
        assert!(is_between(0.0, PI, 3.0 * FRAC_PI_2, cw));
        // Arc crossing zero.
        assert!(is_between(3.0 * FRAC_PI_2, FRAC_PI_2, 0.1, ccw));
    }

    #[test]
    fn test_min_distance_and_direction() {
        assert_relative_eq!(min_angular_distance(0.1, TAU - 0.1), 0.2, epsilon = 1e-5);
        assert_eq!(
            min_rotation_direction(0.1, TAU - 0.1),
            RotationDirection::Clockwise
        );
        assert_eq!(
            min_rotation_direction(0.1, 1.0),
            RotationDirection::Counterclockwise
        );
    }

    #[test]
    fn test_direction_sign_and_negation() {
        assert_eq!(RotationDirection::Clockwise.sign(), -1.0);
        assert_eq!(RotationDirection::Counterclockwise.sign(), 1.0);
        assert_eq!(-RotationDirection::Clockwise, RotationDirection::Counterclockwise);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::X, FRAC_PI_2);
        assert!(v.abs_diff_eq(Vec2::Y, 1e-6));
        let down = vector_to_angle(Vec2::new(0.0, -2.0));
        assert_relative_eq!(down, 3.0 * FRAC_PI_2, epsilon = 1e-6);
    }
}
