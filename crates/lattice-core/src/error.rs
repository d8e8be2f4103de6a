use std::fmt;

use crate::geom::Point;

/// Errors raised while building or reading a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Input does not describe a non-empty rectangular grid.
    InvalidGrid(String),
    /// A character that is not a decimal digit was found while parsing.
    InvalidDigit { ch: char, pos: Point },
    /// A position lookup fell outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(reason) => write!(f, "invalid grid: {reason}"),
            Self::InvalidDigit { ch, pos } => {
                write!(f, "grid contains invalid digit '{ch}' at {pos}")
            }
            Self::OutOfBounds(p) => write!(f, "position {p} is out of bounds"),
        }
    }
}

impl std::error::Error for GridError {}
