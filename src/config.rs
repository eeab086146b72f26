//! Planner configuration, loadable from TOML.
//!
//! ```toml
//! carry_mode = "full"
//! ```

use crate::error::Result;
use crate::journey::CarryMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for [`JourneyPlanner`](crate::planner::JourneyPlanner).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Carry behaviour of every journey the planner returns (default: `single_hop`).
    pub carry_mode: CarryMode,
}

impl PlannerConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
