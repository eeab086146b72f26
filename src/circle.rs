//! Circle primitive and the tangent queries used to build turning bases.

use crate::angle::{FULL_CIRCLE, RotationDirection, angle_to_vector, vector_to_angle};
use bevy_math::primitives::{Circle as CirclePrimitive, Measured2d as _};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle in the plane, used as a turning base or as the middle circle of a CCC path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Radius, expected to be positive.
    pub radius: f32,
    pub center: Vec2,
}

impl Circle {
    pub fn new(radius: f32, center: Vec2) -> Self {
        Self { radius, center }
    }

    /// Convert to the corresponding `bevy_math` primitive for measurement.
    pub fn to_bevy_primitive(self) -> CirclePrimitive {
        CirclePrimitive::new(self.radius)
    }

    /// Circumference, `2π·radius`.
    pub fn perimeter(&self) -> f32 {
        self.to_bevy_primitive().perimeter()
    }

    /// Angle swept when travelling `arc_length` along the circumference.
    pub fn delta_angle(&self, arc_length: f32) -> f32 {
        arc_length / self.radius
    }

    /// Arc length covered by sweeping `angle` radians.
    pub fn delta_arc(&self, angle: f32) -> f32 {
        angle * self.radius
    }

    /// Point on the circumference at `angle`.
    pub fn point_at_angle(&self, angle: f32) -> Vec2 {
        self.center + self.radius * angle_to_vector(angle)
    }

    /// Normalized angle of `point` as seen from the center.
    pub fn angle_of(&self, point: Vec2) -> f32 {
        vector_to_angle(point - self.center)
    }

    /// Samples the circumference for display.
    ///
    /// Produces `ceil(perimeter / spacing)` points evenly spread by angle, starting at angle
    /// zero. A non-positive or non-finite spacing yields no points.
    pub fn rendering_points(&self, spacing: f32) -> Vec<Vec2> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Vec::new();
        }
        let count = (self.perimeter() / spacing).ceil();
        if !count.is_finite() || count <= 0.0 {
            return Vec::new();
        }
        let count = count as usize;

        (0..count)
            .map(|i| {
                let progress = i as f32 / count as f32;
                self.point_at_angle(progress * FULL_CIRCLE)
            })
            .collect()
    }
}

/// Whether `b` lies counterclockwise of (to the left of) `a`.
pub fn is_left_of(a: Vec2, b: Vec2) -> bool {
    a.perp_dot(b) > 0.0
}

/// The two circles of `radius` tangent to `tangent` at `point`, ordered `(left, right)`.
///
/// The left circle is the one a counterclockwise (left) turn follows, the right circle the one a
/// clockwise turn follows.
pub fn turning_bases_from_tangent(point: Vec2, tangent: Vec2, radius: f32) -> (Circle, Circle) {
    let offset = tangent.perp().normalize_or_zero() * radius;

    let a = Circle::new(radius, point + offset);
    let b = Circle::new(radius, point - offset);

    if is_left_of(tangent, offset) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Which way travel along `tangent` at `point` circulates around `center`.
pub fn rotation_direction_of(tangent: Vec2, point: Vec2, center: Vec2) -> RotationDirection {
    if is_left_of(tangent, point - center) {
        RotationDirection::Clockwise
    } else {
        RotationDirection::Counterclockwise
    }
}
