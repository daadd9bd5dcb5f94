use serde::{Deserialize, Serialize};

/// State of one board position.
///
/// `adjacent_mines` is fixed once mines are placed, and `is_revealed` never goes back to `false`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_flagged: bool,
    pub is_revealed: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    /// Neither revealed nor flagged.
    pub const fn is_hidden(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub const fn is_marked(self) -> bool {
        self.is_revealed || self.is_flagged
    }

    /// What a player may know about this cell.
    pub const fn view(self, game_over: bool) -> CellView {
        CellView {
            is_revealed: self.is_revealed,
            is_flagged: self.is_flagged,
            is_mine: if self.is_revealed || game_over {
                Some(self.is_mine)
            } else {
                None
            },
            adjacent_mines: if self.is_revealed {
                Some(self.adjacent_mines)
            } else {
                None
            },
        }
    }
}

/// Player-visible projection of a [`Cell`], safe to hand to a presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub is_mine: Option<bool>,
    pub adjacent_mines: Option<u8>,
}
