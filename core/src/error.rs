use sweeper_grid::{CellCount, Coord, Coord2, GridError};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: Coord, height: Coord },
    #[error("Too many mines, requested {mines} for a board of {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Mines were already placed for this game")]
    AlreadyInitialized,
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
    #[error("Mine placed twice at {0:?}")]
    DuplicateMine(Coord2),
    #[error("Expected {expected} mines but the layout has {actual}")]
    MineCountMismatch { expected: CellCount, actual: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type Result<T> = core::result::Result<T, GameError>;
