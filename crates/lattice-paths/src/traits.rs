use lattice_core::{GridError, Point};

/// Minimal search interface: provides neighbour enumeration.
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` may be part of a path at all. Flood fills do not start
    /// from cells that are not passable.
    fn passable(&self, _p: Point) -> bool {
        true
    }
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` into adjacent `to`.
    fn cost(&self, from: Point, to: Point) -> Result<u32, GridError>;
}
