//! Incremental traversal of planned paths by arc length.
//!
//! A [`SimpleJourney`] tracks progress along a single [`Trajectory`]. A [`Journey`] chains
//! several of them and carries overflow from one segment into the next. Journeys are mutable
//! cursors owned by a single caller, typically advanced once per simulation tick.

use crate::pose::Pose;
use crate::trajectory::Trajectory;
use serde::{Deserialize, Serialize};

/// Progress within this distance of a segment's length counts as finished.
pub const DISTANCE_EPSILON: f32 = 1e-6;

/// How [`Journey::advance`] treats a delta that overruns the active segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarryMode {
    /// Move to the next segment at most once per call. Whatever overflow remains after that
    /// hop is clamped at the end of the new segment.
    #[default]
    SingleHop,

    /// Keep moving forward until the delta is used up or the last segment is reached.
    Full,
}

/// Progress along one trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleJourney {
    trajectory: Trajectory,
    traveled: f32,
}

impl SimpleJourney {
    pub fn new(trajectory: impl Into<Trajectory>) -> Self {
        Self {
            trajectory: trajectory.into(),
            traveled: 0.0,
        }
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Distance travelled so far, in `[0, length]`.
    pub fn traveled(&self) -> f32 {
        self.traveled
    }

    pub fn length(&self) -> f32 {
        self.trajectory.length()
    }

    pub fn remaining(&self) -> f32 {
        self.length() - self.traveled
    }

    pub fn is_at_end(&self) -> bool {
        self.traveled >= self.length() - DISTANCE_EPSILON
    }

    /// Moves forward by `delta` (negative deltas count as zero) and returns the new pose.
    pub fn advance(&mut self, delta: f32) -> Pose {
        self.traveled = (self.traveled + delta.max(0.0)).min(self.length());
        self.current_pose()
    }

    pub fn current_pose(&self) -> Pose {
        self.trajectory.pose_at_distance(self.traveled)
    }
}

/// A complete path: an ordered, fixed sequence of segments and a cursor into it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    segments: Vec<SimpleJourney>,
    active_index: usize,
    carry_mode: CarryMode,
}

impl Journey {
    pub fn new(segments: Vec<SimpleJourney>) -> Self {
        Self {
            segments,
            active_index: 0,
            carry_mode: CarryMode::default(),
        }
    }

    /// Builds a journey with one fresh segment per trajectory.
    pub fn from_trajectories<I>(trajectories: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Trajectory>,
    {
        Self::new(trajectories.into_iter().map(SimpleJourney::new).collect())
    }

    pub fn with_carry_mode(mut self, carry_mode: CarryMode) -> Self {
        self.carry_mode = carry_mode;
        self
    }

    pub fn carry_mode(&self) -> CarryMode {
        self.carry_mode
    }

    pub fn segments(&self) -> &[SimpleJourney] {
        &self.segments
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Total length of all segments, independent of progress.
    pub fn length(&self) -> f32 {
        self.segments.iter().map(SimpleJourney::length).sum()
    }

    /// Distance left on the active segment and every segment after it.
    pub fn remaining(&self) -> f32 {
        self.segments
            .iter()
            .skip(self.active_index)
            .map(SimpleJourney::remaining)
            .sum()
    }

    /// True for an empty journey, or once the last segment has been fully travelled.
    pub fn is_at_the_end(&self) -> bool {
        match self.segments.last() {
            None => true,
            Some(last) => self.active_index == self.segments.len() - 1 && last.is_at_end(),
        }
    }

    /// Segments from the active one to the end. Empty once the journey is finished.
    pub fn remaining_segments(&self) -> &[SimpleJourney] {
        if self.is_at_the_end() {
            return &[];
        }
        &self.segments[self.active_index..]
    }

    /// Pose at the current progress. `None` for an empty journey.
    pub fn current_pose(&self) -> Option<Pose> {
        self.segments
            .get(self.active_index)
            .map(SimpleJourney::current_pose)
    }

    /// Moves forward by `delta` and returns the resulting pose. `None` for an empty journey.
    ///
    /// If `delta` fits in the active segment, only that segment moves. Otherwise the cursor
    /// steps to the next segment and the overflow is applied there, according to the journey's
    /// [`CarryMode`]. On the last segment progress is clamped at its end.
    pub fn advance(&mut self, delta: f32) -> Option<Pose> {
        let last_index = self.segments.len().checked_sub(1)?;
        let delta = delta.max(0.0);

        match self.carry_mode {
            CarryMode::SingleHop => {
                let current_remaining = self.segments[self.active_index].remaining();

                if delta <= current_remaining || self.active_index == last_index {
                    return Some(self.segments[self.active_index].advance(delta));
                }

                self.active_index += 1;
                Some(self.segments[self.active_index].advance(delta - current_remaining))
            }
            CarryMode::Full => {
                let mut delta = delta;
                loop {
                    let current = &mut self.segments[self.active_index];
                    let current_remaining = current.remaining();

                    if delta <= current_remaining || self.active_index == last_index {
                        return Some(current.advance(delta));
                    }

                    current.advance(current_remaining);
                    delta -= current_remaining;
                    self.active_index += 1;
                }
            }
        }
    }
}
