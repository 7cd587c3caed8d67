use thiserror::Error;

use crate::board::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} cells, found {found}")]
    RowLength { row: usize, expected: usize, found: usize },
    #[error("row {row}, col {col}: unknown cell '{ch}' (use B, W or _)")]
    BadCell { row: usize, col: usize, ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move {0} for the side to move")]
    Illegal(Move),
    #[error("cannot parse move '{0}': expected four coordinates like \"1,2 2,3\"")]
    Parse(String),
}
