use thiserror::Error;

use crate::{Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: Coord, height: Coord },
    #[error("Grid dimensions {width}x{height} exceed the coordinate range")]
    DimensionTooLarge { width: usize, height: usize },
    #[error("Coordinates {0:?} are outside the grid")]
    OutOfBounds(Coord2),
    #[error("Invalid direction label")]
    InvalidDirection,
}

pub type Result<T> = core::result::Result<T, GridError>;
