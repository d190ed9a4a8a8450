//! # mars-rover
//!
//! A command interpreter for a single rover driving over a wraparound grid.
//!
//! The rover reads single-letter commands (`f`, `b`, `l`, `r`), moves one cell
//! at a time relative to its [`Orientation`], re-enters the [`Grid`] from the
//! opposite edge when it drives off one side, and refuses any move whose target
//! cell holds an obstacle.
//!
//! ```
//! use glam::IVec2;
//! use mars_rover::{Orientation, Rover};
//!
//! let mut rover = Rover::new(IVec2::ZERO, Orientation::North);
//! rover.process_commands(["f", "f", "f", "b", "f"]).unwrap();
//! assert_eq!(rover.position(), IVec2::new(0, 3));
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod rover;

pub use command::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use orientation::*;
pub use rover::*;
