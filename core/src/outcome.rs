use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// Mines minus flags, negative when the player over-flags.
    pub mines_remaining_guess: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    pub x: Coord,
    pub y: Coord,
    pub is_mine: bool,
    pub adjacent_mines: u8,
}

impl RevealedCell {
    pub const fn new((x, y): Coord2, cell: Cell) -> Self {
        Self {
            x,
            y,
            is_mine: cell.is_mine,
            adjacent_mines: cell.adjacent_mines,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }
}

/// Whether a flag ended up on a mine, reported once the game is over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagVerdict {
    pub x: Coord,
    pub y: Coord,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub status: GameStatus,
    pub revealed_cells: Vec<RevealedCell>,
    pub flag_results: Option<Vec<FlagVerdict>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagResult {
    pub is_flagged_now: bool,
    pub status: GameStatus,
    /// Mines uncovered because this toggle completed the board with a wrong flag.
    pub revealed_cells: Vec<RevealedCell>,
    pub flag_results: Option<Vec<FlagVerdict>>,
}
