mod moves;

pub use moves::{Coord, Move};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Black => "Black",
            Side::White => "White",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Black,
    White,
    #[default]
    Empty,
}

impl Cell {
    /// Colour swap used by perspective inversion.
    pub fn swapped(self) -> Self {
        match self {
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
            Cell::Empty => Cell::Empty,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Black => 'B',
            Cell::White => 'W',
            Cell::Empty => '_',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'B' | 'b' => Some(Cell::Black),
            'W' | 'w' => Some(Cell::White),
            '_' | '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// A 6x6 snapshot. `Board` is `Copy`: every layer that edits a board edits
/// its own copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    pub fn empty() -> Self {
        Self { cells: [[Cell::Empty; COLS]; ROWS] }
    }

    /// Two Black rows on top, two empty rows, two White rows at the bottom.
    pub fn initial() -> Self {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for row in 0..2 {
            cells[row] = [Cell::Black; COLS];
            cells[ROWS - 1 - row] = [Cell::White; COLS];
        }
        Self { cells }
    }

    pub fn cell(&self, at: Coord) -> Cell {
        assert!(at.row < ROWS && at.col < COLS, "coordinate {at} is off the board");
        self.cells[at.row][at.col]
    }

    /// Writes a cell directly. Only for building positions; game moves go
    /// through [`Board::apply`].
    pub fn set(&mut self, at: Coord, cell: Cell) {
        assert!(at.row < ROWS && at.col < COLS, "coordinate {at} is off the board");
        self.cells[at.row][at.col] = cell;
    }

    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Row-major iteration over every cell.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().map(move |(col, &cell)| (Coord { row, col }, cell))
        })
    }

    pub fn pawns(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        let want = side.cell();
        self.iter().filter(move |&(_, c)| c == want).map(|(at, _)| at)
    }

    pub fn count(&self, side: Side) -> usize {
        self.pawns(side).count()
    }

    /// Rows reversed and colours swapped. Applying it twice is the identity.
    pub fn inverted(&self) -> Self {
        let mut out = *self;
        out.invert();
        out
    }

    pub fn invert(&mut self) {
        self.cells.reverse();
        for cell in self.cells.iter_mut().flatten() {
            *cell = cell.swapped();
        }
    }

    /// Moves a Black pawn on this working copy. Rejects anything the
    /// validity oracle rejects and leaves the board untouched in that case.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        if !crate::movegen::is_valid_move(self, mv) {
            return Err(MoveError::Illegal(mv));
        }
        self.play(mv);
        Ok(())
    }

    /// Snapshot variant of [`Board::apply`].
    pub fn with_move(&self, mv: Move) -> Result<Self, MoveError> {
        let mut out = *self;
        out.apply(mv)?;
        Ok(out)
    }

    // Generator output only: legality was established when the move was produced.
    pub(crate) fn play(&mut self, mv: Move) {
        self.cells[mv.from.row][mv.from.col] = Cell::Empty;
        self.cells[mv.to.row][mv.to.col] = Cell::Black;
    }

    pub fn to_compact(&self) -> String {
        let rows: Vec<String> = self.cells.iter().map(|line| line.iter().map(|c| c.to_char()).collect()).collect();
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Rows separated by `/` or newlines, cells `B`, `W` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .split(|ch| ch == '/' || ch == '\n')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() != ROWS {
            return Err(BoardError::RowCount { expected: ROWS, found: lines.len() });
        }
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if chars.len() != COLS {
                return Err(BoardError::RowLength { row, expected: COLS, found: chars.len() });
            }
            for (col, &ch) in chars.iter().enumerate() {
                cells[row][col] = Cell::from_char(ch).ok_or(BoardError::BadCell { row, col, ch })?;
            }
        }
        Ok(Self { cells })
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Board> for String {
    fn from(b: Board) -> Self {
        b.to_compact()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_compact())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!("+{}", "-----+".repeat(COLS));
        for line in &self.cells {
            writeln!(f, "{rule}")?;
            let cells: Vec<String> = line
                .iter()
                .map(|&c| if c == Cell::Empty { ' '.to_string() } else { c.to_char().to_string() })
                .collect();
            writeln!(f, "|  {}  |", cells.join("  |  "))?;
        }
        write!(f, "{rule}")
    }
}
