//! Minesweeper rules on top of [`sweeper_grid`]: mine placement, adjacency counts, flood-fill reveal,
//! flagging, and win/loss detection.
//!
//! A presentation layer owns one [`Engine`], forwards reveal and flag actions by coordinate, and renders the
//! returned diffs. Rejected actions are plain `None`, only construction and mine placement can fail.

pub use sweeper_grid as grid;
pub use sweeper_grid::{CellCount, Coord, Coord2, Direction, Grid, GridError, mult};

pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use outcome::*;
pub use presets::*;

mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod outcome;
mod presets;
