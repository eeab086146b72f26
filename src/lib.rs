//! # dubins-journey
//!
//! Shortest-path planning and traversal for a point vehicle with a bounded turning radius
//! (a Dubins car).
//!
//! The planner builds the turning circles tangent to a start pose and enumerates the classic
//! candidate families: arc-then-straight towards a bare goal point, and curve-straight-curve or
//! curve-curve-curve towards a goal pose. The shortest feasible candidate is returned as a
//! [`Journey`], an engine-agnostic cursor the caller advances by arc length every tick to obtain
//! the vehicle's next [`Pose`].
//!
//! ```
//! use dubins_journey::{MovementConstraints, Pose, plan_to_pose};
//! use glam::Vec2;
//!
//! let start = Pose::new(Vec2::ZERO, Vec2::X);
//! let end = Pose::new(Vec2::new(0.0, 10.0), Vec2::X);
//! let mut journey = plan_to_pose(&start, &end, &MovementConstraints::new(3.0)).unwrap();
//!
//! while !journey.is_at_the_end() {
//!     let _pose = journey.advance(0.1);
//! }
//! ```

pub mod angle;
pub mod circle;
pub mod config;
pub mod error;
pub mod journey;
pub mod planner;
pub mod pose;
pub mod trajectory;

pub use angle::*;
pub use circle::*;
pub use config::*;
pub use error::*;
pub use journey::*;
pub use planner::*;
pub use pose::*;
pub use trajectory::*;
