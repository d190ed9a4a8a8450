//! Start-up configuration for a rover run.

use crate::error::GridError;
use crate::grid::{DEFAULT_GRID_SIZE, Grid};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// How a command batch reacts to a symbol outside the command alphabet.
///
/// An obstacle always stops the batch, whatever the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchPolicy {
    /// Stop at the first failing command and report it.
    #[default]
    StopOnFirstFailure,
    /// Log and skip unrecognized symbols, then carry on with the rest.
    SkipUnrecognized,
}

/// Grid and batch settings used to build a [`Rover`](crate::rover::Rover).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoverConfig {
    /// Number of columns. Default: 10.
    pub width: u32,
    /// Number of rows. Default: 10.
    pub height: u32,
    /// Cells the rover must never enter.
    pub obstacles: Vec<IVec2>,
    /// Policy applied by drivers when running a batch.
    pub policy: BatchPolicy,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            obstacles: Vec::new(),
            policy: BatchPolicy::default(),
        }
    }
}

impl RoverConfig {
    /// Builds the grid described by this configuration.
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::with_obstacles(self.width, self.height, self.obstacles.iter().copied())
    }
}
