//! Shortest-path planning for a forward-only vehicle with a bounded turning radius.
//!
//! The entry point is [`JourneyPlanner`]. Two goals are supported:
//!
//! - [`JourneyPlanner::plan_to_point`]: reach a position with any final heading. Candidates are
//!   arc-then-straight (`LS`, `RS`) paths from either turning base of the start pose.
//! - [`JourneyPlanner::plan_to_pose`]: reach a position with a given heading. Candidates are the
//!   Dubins families `LSL`, `RSR`, `LSR`, `RSL` (curve-straight-curve) and `LRL`, `RLR`
//!   (curve-curve-curve) built from every pairing of start and end turning bases.
//!
//! Infeasible candidates are dropped before selection and the strictly shortest survivor is
//! returned. When nothing survives the planner reports [`JourneyError::NoFeasiblePath`].

use crate::angle::{RotationDirection, normalize, rotate, vector_to_angle};
use crate::circle::{Circle, rotation_direction_of, turning_bases_from_tangent};
use crate::config::PlannerConfig;
use crate::error::{JourneyError, Result};
use crate::journey::Journey;
use crate::pose::{MovementConstraints, Pose};
use crate::trajectory::{Arc, Straight, Trajectory};
use glam::Vec2;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Shape of a planned path. `L` is a counterclockwise arc, `R` a clockwise arc, `S` a straight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathType {
    LS,
    RS,
    LSL,
    RSR,
    LSR,
    RSL,
    LRL,
    RLR,
}

impl PathType {
    fn curve_straight(direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Counterclockwise => Self::LS,
            RotationDirection::Clockwise => Self::RS,
        }
    }

    fn curve_straight_curve(start: RotationDirection, end: RotationDirection) -> Self {
        use RotationDirection::{Clockwise as R, Counterclockwise as L};
        match (start, end) {
            (L, L) => Self::LSL,
            (R, R) => Self::RSR,
            (L, R) => Self::LSR,
            (R, L) => Self::RSL,
        }
    }

    fn curve_curve_curve(outer: RotationDirection) -> Self {
        match outer {
            RotationDirection::Counterclockwise => Self::LRL,
            RotationDirection::Clockwise => Self::RLR,
        }
    }

    /// Whether the path contains a straight segment.
    pub fn has_straight(self) -> bool {
        !matches!(self, Self::LRL | Self::RLR)
    }
}

/// A feasible path together with its family.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub path_type: PathType,
    pub journey: Journey,
}

impl Candidate {
    fn new<I>(path_type: PathType, trajectories: I) -> Self
    where
        I: IntoIterator<Item = Trajectory>,
    {
        Self {
            path_type,
            journey: Journey::from_trajectories(trajectories),
        }
    }

    pub fn length(&self) -> f32 {
        self.journey.length()
    }
}

/// Plans journeys for a single vehicle model.
#[derive(Clone, Debug, Default)]
pub struct JourneyPlanner {
    config: PlannerConfig,
}

impl JourneyPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Shortest arc-then-straight journey from `start` to the point `goal`.
    ///
    /// Fails with [`JourneyError::NoFeasiblePath`] if `goal` lies inside both turning bases.
    pub fn plan_to_point(
        &self,
        start: &Pose,
        goal: Vec2,
        constraints: &MovementConstraints,
    ) -> Result<Journey> {
        let candidates = self.candidates_to_point(start, goal, constraints)?;
        select_shortest(candidates)
    }

    /// Every feasible arc-then-straight candidate to `goal`, left turning base first.
    pub fn candidates_to_point(
        &self,
        start: &Pose,
        goal: Vec2,
        constraints: &MovementConstraints,
    ) -> Result<Vec<Candidate>> {
        constraints.validate()?;
        let start = start.validated()?;
        if !goal.is_finite() {
            return Err(JourneyError::NonFinitePosition(goal));
        }

        let (left, right) =
            turning_bases_from_tangent(start.position, start.heading, constraints.turning_radius);

        let candidates = [left, right]
            .into_iter()
            .filter_map(|base| curve_straight_path(&start, goal, base))
            .filter_map(|candidate| self.finish(candidate))
            .collect();

        Ok(candidates)
    }

    /// Shortest Dubins journey from `start` to `end`.
    pub fn plan_to_pose(
        &self,
        start: &Pose,
        end: &Pose,
        constraints: &MovementConstraints,
    ) -> Result<Journey> {
        let candidates = self.candidates_to_pose(start, end, constraints)?;
        select_shortest(candidates)
    }

    /// Every feasible CSC and CCC candidate from `start` to `end`.
    ///
    /// Turning base pairings are visited as (left, left), (left, right), (right, left),
    /// (right, right); all CSC candidates come before the CCC ones.
    pub fn candidates_to_pose(
        &self,
        start: &Pose,
        end: &Pose,
        constraints: &MovementConstraints,
    ) -> Result<Vec<Candidate>> {
        constraints.validate()?;
        let start = start.validated()?;
        let end = end.validated()?;

        let radius = constraints.turning_radius;
        let (start_left, start_right) =
            turning_bases_from_tangent(start.position, start.heading, radius);
        let (end_left, end_right) = turning_bases_from_tangent(end.position, end.heading, radius);

        let pairings = [
            (start_left, end_left),
            (start_left, end_right),
            (start_right, end_left),
            (start_right, end_right),
        ];

        let curve_straight_curve = pairings
            .iter()
            .filter_map(|(s, e)| curve_straight_curve_path(&start, &end, *s, *e));
        let curve_curve_curve = pairings
            .iter()
            .filter_map(|(s, e)| curve_curve_curve_path(&start, &end, *s, *e));

        let candidates = curve_straight_curve
            .chain(curve_curve_curve)
            .filter_map(|candidate| self.finish(candidate))
            .collect();

        Ok(candidates)
    }

    /// Applies the configured carry mode and drops candidates with a non-finite length.
    fn finish(&self, mut candidate: Candidate) -> Option<Candidate> {
        let length = candidate.length();
        if !length.is_finite() {
            debug!("Dropping {:?} candidate with length {}", candidate.path_type, length);
            return None;
        }
        trace!("{:?} candidate length {}", candidate.path_type, length);

        candidate.journey = candidate.journey.with_carry_mode(self.config.carry_mode);
        Some(candidate)
    }
}

/// [`JourneyPlanner::plan_to_point`] with the default configuration.
pub fn plan_to_point(
    start: &Pose,
    goal: Vec2,
    constraints: &MovementConstraints,
) -> Result<Journey> {
    JourneyPlanner::default().plan_to_point(start, goal, constraints)
}

/// [`JourneyPlanner::plan_to_pose`] with the default configuration.
pub fn plan_to_pose(
    start: &Pose,
    end: &Pose,
    constraints: &MovementConstraints,
) -> Result<Journey> {
    JourneyPlanner::default().plan_to_pose(start, end, constraints)
}

/// Picks the first candidate with strictly minimal length.
fn select_shortest(candidates: Vec<Candidate>) -> Result<Journey> {
    let mut shortest: Option<Candidate> = None;
    for candidate in candidates {
        if shortest
            .as_ref()
            .is_none_or(|best| candidate.length() < best.length())
        {
            shortest = Some(candidate);
        }
    }

    match shortest {
        Some(candidate) => {
            debug!(
                "Selected {:?} journey of length {}",
                candidate.path_type,
                candidate.length()
            );
            Ok(candidate.journey)
        }
        None => {
            debug!("No feasible candidate");
            Err(JourneyError::NoFeasiblePath)
        }
    }
}

/// Arc on `base` up to the tangent line through `goal`, then straight to `goal`.
fn curve_straight_path(start: &Pose, goal: Vec2, base: Circle) -> Option<Candidate> {
    let direction = rotation_direction_of(start.heading, start.position, base.center);

    // Center, tangent point and goal form a right triangle with the right angle at the
    // tangent point, so the angle at the center is acos(radius / |center -> goal|).
    let to_goal = goal - base.center;
    let distance = to_goal.length();
    if distance < base.radius {
        debug!(
            "Goal {} lies inside turning base at {} (distance {} < radius {})",
            goal, base.center, distance, base.radius
        );
        return None;
    }
    let alpha = (base.radius / distance).acos();

    // Rotate back against the direction of travel to reach the tangent point.
    let tangent_angle = normalize(vector_to_angle(to_goal) - direction.sign() * alpha);

    let arc = Arc::new(base, base.angle_of(start.position), tangent_angle, direction);
    let straight = Straight::new(base.point_at_angle(tangent_angle), goal);

    Some(Candidate::new(
        PathType::curve_straight(direction),
        [Trajectory::Arc(arc), Trajectory::Straight(straight)],
    ))
}

/// Curve-straight-curve path between one start and one end turning base.
fn curve_straight_curve_path(
    start: &Pose,
    end: &Pose,
    start_base: Circle,
    end_base: Circle,
) -> Option<Candidate> {
    let start_direction = rotation_direction_of(start.heading, start.position, start_base.center);
    let end_direction = rotation_direction_of(end.heading, end.position, end_base.center);

    let connector = if start_direction == end_direction {
        outer_tangent(start_base, end_base, start_direction, start.position)
    } else {
        let Some(connector) = inner_tangent(start_base, end_base, start_direction) else {
            debug!(
                "Turning bases at {} and {} too close for a crossing tangent",
                start_base.center, end_base.center
            );
            return None;
        };
        connector
    };

    let start_arc = Arc::new(
        start_base,
        start_base.angle_of(start.position),
        start_base.angle_of(connector.start),
        start_direction,
    );
    let end_arc = Arc::new(
        end_base,
        end_base.angle_of(connector.end),
        end_base.angle_of(end.position),
        end_direction,
    );

    Some(Candidate::new(
        PathType::curve_straight_curve(start_direction, end_direction),
        [
            Trajectory::Arc(start_arc),
            Trajectory::Straight(connector),
            Trajectory::Arc(end_arc),
        ],
    ))
}

/// Tangent shared by two equal circles travelled in the same direction.
///
/// Coincident centers leave the tangent undefined; the connector then collapses onto
/// `fallback`, which must lie on both circles.
fn outer_tangent(
    start_base: Circle,
    end_base: Circle,
    direction: RotationDirection,
    fallback: Vec2,
) -> Straight {
    let Some(unit) = (end_base.center - start_base.center).try_normalize() else {
        return Straight::new(fallback, fallback);
    };

    let offset = -direction.sign() * start_base.radius * unit.perp();
    Straight::new(start_base.center + offset, end_base.center + offset)
}

/// Tangent crossing between two equal circles travelled in opposite directions.
///
/// `None` when the circles are closer than two radii and no crossing tangent exists.
fn inner_tangent(
    start_base: Circle,
    end_base: Circle,
    start_direction: RotationDirection,
) -> Option<Straight> {
    let between = end_base.center - start_base.center;
    let half_distance = 0.5 * between.length();

    let cosine = start_base.radius / half_distance;
    if !(-1.0..=1.0).contains(&cosine) {
        return None;
    }
    let alpha = cosine.acos();
    let unit = between.try_normalize()?;
    let rotation = -start_direction.sign() * alpha;

    Some(Straight::new(
        start_base.center + start_base.radius * rotate(unit, rotation),
        end_base.center + end_base.radius * rotate(-unit, rotation),
    ))
}

/// Curve-curve-curve path through a third circle tangent to both turning bases.
fn curve_curve_curve_path(
    start: &Pose,
    end: &Pose,
    start_base: Circle,
    end_base: Circle,
) -> Option<Candidate> {
    let start_direction = rotation_direction_of(start.heading, start.position, start_base.center);
    let end_direction = rotation_direction_of(end.heading, end.position, end_base.center);
    if start_direction != end_direction {
        return None;
    }

    let radius = start_base.radius;
    let between = end_base.center - start_base.center;
    let distance = between.length();
    if distance > 4.0 * radius {
        trace!("Turning bases {distance} apart, no middle circle fits");
        return None;
    }
    let Some(unit) = between.try_normalize() else {
        trace!("Coincident turning bases, skipping middle circle");
        return None;
    };

    // 1. Middle circle touches both bases, so its center is 2r from each.
    let angle = ((0.5 * distance) / (2.0 * radius)).acos();
    let middle = Circle::new(radius, start_base.center + 2.0 * radius * rotate(unit, angle));

    // 2. Equal radii put the touching points halfway between centers.
    let start_touch = start_base.center + 0.5 * (middle.center - start_base.center);
    let end_touch = end_base.center + 0.5 * (middle.center - end_base.center);

    // 3. Outer arcs share the start direction, the middle arc turns the other way.
    let start_arc = Arc::new(
        start_base,
        start_base.angle_of(start.position),
        start_base.angle_of(start_touch),
        start_direction,
    );
    let middle_arc = Arc::new(
        middle,
        middle.angle_of(start_touch),
        middle.angle_of(end_touch),
        -start_direction,
    );
    let end_arc = Arc::new(
        end_base,
        end_base.angle_of(end_touch),
        end_base.angle_of(end.position),
        end_direction,
    );

    Some(Candidate::new(
        PathType::curve_curve_curve(start_direction),
        [
            Trajectory::Arc(start_arc),
            Trajectory::Arc(middle_arc),
            Trajectory::Arc(end_arc),
        ],
    ))
}
