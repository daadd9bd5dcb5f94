use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// One of the eight compass directions. `y` grows towards the south.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// Clockwise from north, the order used for neighbor enumeration.
    pub const ALL: [Direction; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    pub const ORTHOGONALS: [Direction; 4] = [Self::N, Self::E, Self::S, Self::W];

    pub const DIAGONALS: [Direction; 4] = [Self::NW, Self::NE, Self::SE, Self::SW];

    /// The four straight lines through a cell, each as a pair of opposite directions.
    pub const AXES: [[Direction; 2]; 4] = [
        [Self::N, Self::S],
        [Self::E, Self::W],
        [Self::NE, Self::SW],
        [Self::NW, Self::SE],
    ];

    /// Unit displacement `(dx, dy)`. Compound directions are the sum of their two base vectors.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            N => (0, -1),
            E => (1, 0),
            S => (0, 1),
            W => (-1, 0),
            NE => (1, -1),
            SE => (1, 1),
            SW => (-1, 1),
            NW => (-1, -1),
        }
    }

    pub fn from_delta(delta: (i8, i8)) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.delta() == delta)
    }

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            N => S,
            NE => SW,
            E => W,
            SE => NW,
            S => N,
            SW => NE,
            W => E,
            NW => SE,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        use Direction::*;
        matches!(self, NE | SE | SW | NW)
    }

    pub const fn label(self) -> &'static str {
        use Direction::*;
        match self {
            N => "n",
            NE => "ne",
            E => "e",
            SE => "se",
            S => "s",
            SW => "sw",
            W => "w",
            NW => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a label such as `"ne"` by summing the base vector of every letter, so `"en"` is also north-east.
impl FromStr for Direction {
    type Err = GridError;

    fn from_str(label: &str) -> Result<Self> {
        let mut sum = (0i8, 0i8);
        for letter in label.chars() {
            let (dx, dy) = match letter.to_ascii_lowercase() {
                'n' => Direction::N.delta(),
                'e' => Direction::E.delta(),
                's' => Direction::S.delta(),
                'w' => Direction::W.delta(),
                _ => return Err(GridError::InvalidDirection),
            };
            sum = (sum.0.saturating_add(dx), sum.1.saturating_add(dy));
        }
        Self::from_delta(sum).ok_or(GridError::InvalidDirection)
    }
}
