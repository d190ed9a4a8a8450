//! Rover state and command execution.

use crate::command::Command;
use crate::config::{BatchPolicy, RoverConfig};
use crate::error::{BatchError, CommandError, GridError};
use crate::grid::Grid;
use crate::orientation::Orientation;
use glam::IVec2;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace, warn};

/// Outcome of a batch that ran to the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Number of commands that changed (or kept) the rover state successfully.
    pub applied: usize,
    /// Indices of symbols skipped under [`BatchPolicy::SkipUnrecognized`].
    pub skipped: Vec<usize>,
}

/// A rover on a wraparound grid.
///
/// The position is always inside the grid and never changes to an obstacle cell.
/// A command that fails leaves both position and orientation untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rover {
    position: IVec2,
    orientation: Orientation,
    grid: Grid,
}

impl Rover {
    /// Places a rover on the default 10x10 obstacle-free grid.
    pub fn new(position: IVec2, orientation: Orientation) -> Self {
        Self::with_grid(position, orientation, Grid::default())
    }

    /// Places a rover on `grid`. `position` is wrapped into the grid bounds.
    pub fn with_grid(position: IVec2, orientation: Orientation, grid: Grid) -> Self {
        Self {
            position: grid.wrap(position),
            orientation,
            grid,
        }
    }

    pub fn from_config(
        position: IVec2,
        orientation: Orientation,
        config: &RoverConfig,
    ) -> Result<Self, GridError> {
        Ok(Self::with_grid(position, orientation, config.grid()?))
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Parses and executes one command symbol (`f`, `b`, `l` or `r`).
    pub fn process_command(&mut self, symbol: &str) -> Result<(), CommandError> {
        let command: Command = symbol.parse()?;
        self.execute(command)
    }

    /// Executes an already parsed command.
    ///
    /// Moves compute the target cell, wrap it onto the grid and check it for an
    /// obstacle before anything is committed.
    pub fn execute(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Forward => self.step(1)?,
            Command::Backward => self.step(-1)?,
            Command::TurnLeft => self.orientation = self.orientation.turn_left(),
            Command::TurnRight => self.orientation = self.orientation.turn_right(),
        }
        trace!(
            command = command.symbol(),
            x = self.position.x,
            y = self.position.y,
            orientation = %self.orientation,
            "command applied"
        );
        Ok(())
    }

    fn step(&mut self, sign: i32) -> Result<(), CommandError> {
        let candidate = self
            .grid
            .wrap(self.position + self.orientation.movement_vector() * sign);
        if self.grid.has_obstacle(candidate) {
            debug!(x = candidate.x, y = candidate.y, "move blocked by obstacle");
            return Err(CommandError::ObstacleBlocked(candidate));
        }
        self.position = candidate;
        Ok(())
    }

    /// Runs `commands` in order, stopping at the first one that fails.
    ///
    /// Commands before the failing index stay applied; the rest are never run.
    pub fn process_commands<S: AsRef<str>>(
        &mut self,
        commands: impl IntoIterator<Item = S>,
    ) -> Result<(), BatchError> {
        self.process_commands_with(commands, BatchPolicy::StopOnFirstFailure)
            .map(|_| ())
    }

    /// Runs `commands` in order under an explicit [`BatchPolicy`].
    pub fn process_commands_with<S: AsRef<str>>(
        &mut self,
        commands: impl IntoIterator<Item = S>,
        policy: BatchPolicy,
    ) -> Result<BatchSummary, BatchError> {
        let mut summary = BatchSummary::default();
        for (index, symbol) in commands.into_iter().enumerate() {
            let symbol = symbol.as_ref();
            match self.process_command(symbol) {
                Ok(()) => summary.applied += 1,
                Err(CommandError::Unrecognized(_)) if policy == BatchPolicy::SkipUnrecognized => {
                    warn!(index, symbol, "skipping unrecognized command");
                    summary.skipped.push(index);
                }
                Err(source) => {
                    warn!(index, error = %source, "stopped processing commands");
                    return Err(BatchError { index, source });
                }
            }
        }
        Ok(summary)
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) facing {}",
            self.position.x, self.position.y, self.orientation
        )
    }
}
