use std::fmt;

use lattice_core::{GridError, Point};

/// Errors returned by the search algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The frontier was exhausted before the destination was reached.
    Unreachable { from: Point, to: Point },
    /// A grid lookup failed.
    Grid(GridError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { from, to } => write!(f, "no path from {from} to {to}"),
            Self::Grid(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Unreachable { .. } => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
