//! A virtual enlargement of a [`Grid`] by tiling it with wrapped costs.
//!
//! The base grid is repeated `stretch` times along each axis. Every copy is
//! offset by `tile_row + tile_col`, and values above 9 wrap back to 1. Values
//! are derived on demand, nothing is materialised.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::grid::Grid;

/// Replication factor of the extended grid.
pub const STRETCH: u32 = 5;

/// Value of the infinitely tiled version of `base` at `p`.
///
/// Tiles have the base grid's dimensions. The tile at `(0, 0)` is the base
/// grid itself; any other tile maps a base value `v` to
/// `((v - 1 + tile_row + tile_col) mod 9) + 1`.
pub fn tiled_value(base: &Grid, p: Point) -> Result<u32, GridError> {
    if p.x < 0 || p.y < 0 {
        return Err(GridError::OutOfBounds(p));
    }
    let (w, h) = (base.width(), base.height());
    let tile_col = p.x / w;
    let tile_row = p.y / h;
    let v = base.at(Point::new(p.x % w, p.y % h))?;
    let offset = i64::from(tile_row) + i64::from(tile_col);
    if offset == 0 {
        return Ok(v);
    }
    Ok(((i64::from(v) - 1 + offset).rem_euclid(9) + 1) as u32)
}

/// A bounded view of `base` tiled `stretch` times in each direction.
#[derive(Debug, Clone, Copy)]
pub struct TiledGrid<'a> {
    base: &'a Grid,
    width: i32,
    height: i32,
}

impl<'a> TiledGrid<'a> {
    /// Fails with [`GridError::InvalidGrid`] if `stretch` is 0 or the
    /// stretched size does not fit in an `i32`.
    pub fn new(base: &'a Grid, stretch: u32) -> Result<Self, GridError> {
        if stretch == 0 {
            return Err(GridError::InvalidGrid(
                "stretch must be at least 1".to_string(),
            ));
        }
        let too_large = || {
            GridError::InvalidGrid(format!(
                "{}x{} grid tiled {stretch} times is too large",
                base.width(),
                base.height()
            ))
        };
        let factor = i32::try_from(stretch).map_err(|_| too_large())?;
        let width = base.width().checked_mul(factor).ok_or_else(too_large)?;
        let height = base.height().checked_mul(factor).ok_or_else(too_large)?;
        Ok(Self {
            base,
            width,
            height,
        })
    }

    /// The standard ×[`STRETCH`] extension.
    pub fn extended(base: &'a Grid) -> Result<Self, GridError> {
        Self::new(base, STRETCH)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> Range {
        Range::with_size(self.width(), self.height())
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Value at `p`, or [`GridError::OutOfBounds`] outside the stretched
    /// bounds.
    pub fn value(&self, p: Point) -> Result<u32, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        tiled_value(self.base, p)
    }

    /// In-bounds cardinal neighbours of `p`, in the order up, down, left,
    /// right.
    pub fn neighbors4(&self, p: Point) -> Vec<Point> {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.contains(n))
            .collect()
    }
}
