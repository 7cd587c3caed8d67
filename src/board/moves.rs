use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{COLS, ROWS};
use crate::error::MoveError;

/// A cell address on the board. Construction through [`Coord::new`] keeps
/// both indices inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    /// Signed variant used when probing neighbours that may fall off the grid.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Self::new(row, col)
    }

    /// Same cell seen from the other side of the board.
    pub fn flipped(self) -> Self {
        Self { row: ROWS - 1 - self.row, col: self.col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Convenience constructor for tests and hand-written positions.
    /// Panics when either coordinate is off the board.
    pub fn from_indices(from: (usize, usize), to: (usize, usize)) -> Self {
        let at = |(row, col): (usize, usize)| {
            Coord::new(row, col).unwrap_or_else(|| panic!("coordinate ({row},{col}) is off the {ROWS}x{COLS} board"))
        };
        Self { from: at(from), to: at(to) }
    }

    pub fn flipped(self) -> Self {
        Self { from: self.from.flipped(), to: self.to.flipped() }
    }

    pub fn is_diagonal(self) -> bool {
        self.from.col != self.to.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveError;

    /// Accepts any four unsigned integers separated by non-digits:
    /// `1,2->2,3`, `1 2 2 3` and `(1,2) (2,3)` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nums: Vec<usize> = s
            .split(|ch: char| !ch.is_ascii_digit())
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<usize>())
            .collect::<Result<_, _>>()
            .map_err(|_| MoveError::Parse(s.to_string()))?;
        match nums.as_slice() {
            &[r1, c1, r2, c2] => {
                let from = Coord::new(r1, c1).ok_or_else(|| MoveError::Parse(s.to_string()))?;
                let to = Coord::new(r2, c2).ok_or_else(|| MoveError::Parse(s.to_string()))?;
                Ok(Move::new(from, to))
            }
            _ => Err(MoveError::Parse(s.to_string())),
        }
    }
}
