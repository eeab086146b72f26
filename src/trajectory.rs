//! The two segment shapes a Dubins path is made of.

use crate::angle::{RotationDirection, angle_to_vector, directed_angular_distance};
use crate::circle::Circle;
use crate::pose::Pose;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Circular arc travelled around a turning base.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub turning_base: Circle,

    /// Angle on the turning base where the arc begins.
    pub start_angle: f32,

    /// Angle on the turning base where the arc ends.
    pub end_angle: f32,

    pub direction: RotationDirection,
}

impl Arc {
    pub fn new(
        turning_base: Circle,
        start_angle: f32,
        end_angle: f32,
        direction: RotationDirection,
    ) -> Self {
        Self {
            turning_base,
            start_angle,
            end_angle,
            direction,
        }
    }

    /// Unsigned angle swept from start to end in the arc's direction.
    pub fn angular_span(&self) -> f32 {
        directed_angular_distance(self.start_angle, self.end_angle, self.direction).abs()
    }

    pub fn length(&self) -> f32 {
        self.turning_base.delta_arc(self.angular_span())
    }

    pub fn start_position(&self) -> Vec2 {
        self.turning_base.point_at_angle(self.start_angle)
    }

    pub fn end_position(&self) -> Vec2 {
        self.turning_base.point_at_angle(self.end_angle)
    }

    pub fn start_heading(&self) -> Vec2 {
        self.heading_at_angle(self.start_angle)
    }

    pub fn end_heading(&self) -> Vec2 {
        self.heading_at_angle(self.end_angle)
    }

    /// Tangent unit vector at `angle`, oriented with the direction of travel.
    fn heading_at_angle(&self, angle: f32) -> Vec2 {
        self.direction.sign() * angle_to_vector(angle).perp()
    }

    /// Pose after travelling `distance` along the arc, clamped to `[0, length]`.
    pub fn pose_at_distance(&self, distance: f32) -> Pose {
        let distance = distance.max(0.0).min(self.length());
        let angle =
            self.start_angle + self.direction.sign() * self.turning_base.delta_angle(distance);

        Pose::new(
            self.turning_base.point_at_angle(angle),
            self.heading_at_angle(angle),
        )
    }
}

/// Straight line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Straight {
    pub start: Vec2,
    pub end: Vec2,
}

impl Straight {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Unit direction of travel. Zero for a zero-length segment.
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Pose after travelling `distance` along the segment, clamped to `[0, length]`.
    pub fn pose_at_distance(&self, distance: f32) -> Pose {
        let direction = self.direction();
        let distance = distance.max(0.0).min(self.length());
        Pose::new(self.start + direction * distance, direction)
    }
}

/// A single constant-curvature piece of a journey.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Trajectory {
    Arc(Arc),
    Straight(Straight),
}

impl Trajectory {
    pub fn start_position(&self) -> Vec2 {
        match self {
            Self::Arc(arc) => arc.start_position(),
            Self::Straight(straight) => straight.start,
        }
    }

    pub fn end_position(&self) -> Vec2 {
        match self {
            Self::Arc(arc) => arc.end_position(),
            Self::Straight(straight) => straight.end,
        }
    }

    pub fn start_heading(&self) -> Vec2 {
        match self {
            Self::Arc(arc) => arc.start_heading(),
            Self::Straight(straight) => straight.direction(),
        }
    }

    pub fn end_heading(&self) -> Vec2 {
        match self {
            Self::Arc(arc) => arc.end_heading(),
            Self::Straight(straight) => straight.direction(),
        }
    }

    pub fn length(&self) -> f32 {
        match self {
            Self::Arc(arc) => arc.length(),
            Self::Straight(straight) => straight.length(),
        }
    }

    pub fn pose_at_distance(&self, distance: f32) -> Pose {
        match self {
            Self::Arc(arc) => arc.pose_at_distance(distance),
            Self::Straight(straight) => straight.pose_at_distance(distance),
        }
    }
}

impl From<Arc> for Trajectory {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<Straight> for Trajectory {
    fn from(straight: Straight) -> Self {
        Self::Straight(straight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn unit_arc(start: f32, end: f32, direction: RotationDirection) -> Arc {
        Arc::new(Circle::new(2.0, Vec2::new(1.0, -1.0)), start, end, direction)
    }

    #[test]
    fn test_arc_endpoints_match_pose_at_distance() {
        let cases = [
            (0.0, FRAC_PI_2, RotationDirection::Counterclockwise),
            (FRAC_PI_2, 0.0, RotationDirection::Counterclockwise), // wraps
            (FRAC_PI_2, 0.0, RotationDirection::Clockwise),
            (0.3, 5.0, RotationDirection::Clockwise), // wraps
        ];
        for (start, end, direction) in cases {
            let arc = unit_arc(start, end, direction);
            let begin = arc.pose_at_distance(0.0);
            let finish = arc.pose_at_distance(arc.length());
            assert!(begin.position.abs_diff_eq(arc.start_position(), 1e-4));
            assert!(
                finish.position.abs_diff_eq(arc.end_position(), 1e-4),
                "arc {start}->{end} {direction:?} ends at {} not {}",
                finish.position,
                arc.end_position()
            );
            assert!(finish.heading.abs_diff_eq(arc.end_heading(), 1e-4));
        }
    }

    #[test]
    fn test_arc_length_uses_span_magnitude() {
        let ccw = unit_arc(FRAC_PI_2, 0.0, RotationDirection::Counterclockwise);
        assert_relative_eq!(ccw.length(), 2.0 * 3.0 * FRAC_PI_2, epsilon = 1e-4);
        let cw = unit_arc(0.0, FRAC_PI_2, RotationDirection::Clockwise);
        assert_relative_eq!(cw.length(), 2.0 * 3.0 * FRAC_PI_2, epsilon = 1e-4);
    }

    #[test]
    fn test_arc_heading_follows_direction() {
        // Counterclockwise around the origin starting at angle 0 heads +Y.
        let circle = Circle::new(1.0, Vec2::ZERO);
        let ccw = Arc::new(circle, 0.0, PI, RotationDirection::Counterclockwise);
        assert!(ccw.pose_at_distance(0.0).heading.abs_diff_eq(Vec2::Y, 1e-6));
        let cw = Arc::new(circle, 0.0, PI, RotationDirection::Clockwise);
        assert!(cw.pose_at_distance(0.0).heading.abs_diff_eq(Vec2::NEG_Y, 1e-6));

        // Halfway through the clockwise arc we are at the bottom heading -X.
        let mid = cw.pose_at_distance(cw.length() / 2.0);
        assert!(mid.position.abs_diff_eq(Vec2::NEG_Y, 1e-5));
        assert!(mid.heading.abs_diff_eq(Vec2::NEG_X, 1e-5));
    }

    #[test]
    fn test_arc_clamps_distance() {
        let arc = unit_arc(0.0, 1.0, RotationDirection::Counterclockwise);
        let over = arc.pose_at_distance(arc.length() + 10.0);
        assert!(over.position.abs_diff_eq(arc.end_position(), 1e-5));
        let under = arc.pose_at_distance(-3.0);
        assert!(under.position.abs_diff_eq(arc.start_position(), 1e-5));
    }

    #[test]
    fn test_straight_pose_at_distance() {
        let straight = Straight::new(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert_relative_eq!(straight.length(), 5.0, epsilon = 1e-6);

        let heading = Vec2::new(0.6, 0.8);
        for d in [0.0, 1.0, 2.5, 5.0, 7.0] {
            let pose = straight.pose_at_distance(d);
            assert!(pose.heading.abs_diff_eq(heading, 1e-6));
        }
        assert_eq!(straight.pose_at_distance(0.0).position, straight.start);
        assert!(
            straight
                .pose_at_distance(straight.length())
                .position
                .abs_diff_eq(straight.end, 1e-5)
        );
    }

    #[test]
    fn test_zero_length_straight() {
        let p = Vec2::new(2.0, 2.0);
        let straight = Straight::new(p, p);
        assert_eq!(straight.length(), 0.0);
        let pose = straight.pose_at_distance(1.0);
        assert_eq!(pose.position, p);
        assert_eq!(pose.heading, Vec2::ZERO);
    }

    #[test]
    fn test_trajectory_dispatch() {
        let straight: Trajectory = Straight::new(Vec2::ZERO, Vec2::new(3.0, 0.0)).into();
        assert_relative_eq!(straight.length(), 3.0);
        assert_eq!(straight.end_position(), Vec2::new(3.0, 0.0));

        let arc: Trajectory = Arc::new(
            Circle::new(1.0, Vec2::ZERO),
            0.0,
            PI,
            RotationDirection::Counterclockwise,
        )
        .into();
        assert_relative_eq!(arc.length(), PI, epsilon = 1e-6);
        assert!(arc.end_position().abs_diff_eq(Vec2::NEG_X, 1e-6));
        assert!(arc.end_heading().abs_diff_eq(Vec2::NEG_Y, 1e-6));
    }
}
