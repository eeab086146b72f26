//! Error types for journey planning.

use glam::Vec2;
use thiserror::Error;

/// Errors produced while validating planner inputs, planning, or loading configuration.
#[derive(Error, Debug)]
pub enum JourneyError {
    /// The turning radius was zero, negative or not finite.
    #[error("turning radius must be positive and finite, got {0}")]
    InvalidTurningRadius(f32),

    /// A pose heading could not be normalized (zero length or not finite).
    #[error("pose heading must be a non-zero finite vector, got {0}")]
    DegenerateHeading(Vec2),

    /// A position (pose or goal point) contained NaN or infinite components.
    #[error("position must be finite, got {0}")]
    NonFinitePosition(Vec2),

    /// Every candidate path was infeasible.
    #[error("no feasible path to the goal")]
    NoFeasiblePath,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for JourneyError {
    fn from(e: toml::de::Error) -> Self {
        JourneyError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JourneyError>;
