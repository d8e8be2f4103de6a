//! The [`Grid`] type: an immutable, rectangular 2D grid of integer cells.
//!
//! A grid is built once (from rows or from a block of digits) and is
//! read-only afterwards. Algorithms keep their own working state (cost
//! maps, labels) next to it and never write back into it.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A rectangular grid of non-negative integer values, indexed by
/// `(x = column, y = row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct Grid {
    cells: Vec<u32>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from rows of values.
    ///
    /// Fails with [`GridError::InvalidGrid`] if there are no rows, if the
    /// rows are empty, or if they do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::InvalidGrid("no rows".to_string()));
        };
        let width = first.len();
        if width == 0 {
            return Err(GridError::InvalidGrid("rows are empty".to_string()));
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::InvalidGrid(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse a block of single decimal digits, one row per line.
    ///
    /// Leading and trailing whitespace on each line is ignored, as are blank
    /// lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let y = rows.len() as i32;
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| {
                    ch.to_digit(10).ok_or(GridError::InvalidDigit {
                        ch,
                        pos: Point::new(x as i32, y),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width(), self.height())
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Value at `p`, or [`GridError::OutOfBounds`].
    pub fn at(&self, p: Point) -> Result<u32, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds(p))
    }

    /// In-bounds cardinal neighbours of `p`, in the order up, down, left,
    /// right.
    pub fn neighbors4(&self, p: Point) -> Vec<Point> {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Iterate over `(Point, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.width)
    }

    /// A new grid with the row order reversed.
    pub fn flip_vertical(&self) -> Grid {
        let cells = self.cells.chunks(self.width).rev().flatten().copied().collect();
        Grid {
            cells,
            width: self.width,
            height: self.height,
        }
    }

    /// Cells strictly lower than every in-bounds cardinal neighbour, in
    /// row-major order.
    pub fn low_points(&self) -> Vec<Point> {
        self.iter()
            .filter(|&(p, v)| {
                self.neighbors4(p)
                    .into_iter()
                    .all(|n| self.get(n).is_some_and(|nv| nv > v))
            })
            .map(|(p, _)| p)
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[u32]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for v in row {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHTS: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(HEIGHTS).unwrap();
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.at(Point::new(0, 0)), Ok(2));
        assert_eq!(g.at(Point::new(9, 4)), Ok(8));
        assert_eq!(g.get(Point::new(2, 1)), Some(8));
    }

    #[test]
    fn parse_ignores_blank_lines_and_indentation() {
        let g: Grid = "\n  12\n  34\n\n".parse().unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.to_string(), "12\n34");
    }

    #[test]
    fn parse_rejects_non_digits() {
        let err = Grid::parse("12\n3x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDigit {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn ragged_rows_are_invalid() {
        assert!(matches!(
            Grid::parse("123\n12"),
            Err(GridError::InvalidGrid(_))
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![1], vec![1, 2]]),
            Err(GridError::InvalidGrid(_))
        ));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(Grid::parse(""), Err(GridError::InvalidGrid(_))));
        assert!(matches!(
            Grid::from_rows(vec![vec![], vec![]]),
            Err(GridError::InvalidGrid(_))
        ));
    }

    #[test]
    fn at_reports_out_of_bounds() {
        let g = Grid::parse("12\n34").unwrap();
        assert_eq!(
            g.at(Point::new(2, 0)),
            Err(GridError::OutOfBounds(Point::new(2, 0)))
        );
        assert_eq!(g.get(Point::new(-1, 0)), None);
    }

    #[test]
    fn neighbors4_filters_bounds_in_fixed_order() {
        let g = Grid::parse("123\n456\n789").unwrap();
        assert_eq!(
            g.neighbors4(Point::new(1, 1)),
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
        assert_eq!(
            g.neighbors4(Point::new(0, 0)),
            vec![Point::new(0, 1), Point::new(1, 0)]
        );
        assert_eq!(
            g.neighbors4(Point::new(2, 2)),
            vec![Point::new(2, 1), Point::new(1, 2)]
        );
        let single = Grid::parse("5").unwrap();
        assert!(single.neighbors4(Point::ZERO).is_empty());
    }

    #[test]
    fn iter_and_rows() {
        let g = Grid::parse("12\n34").unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items[2], (Point::new(0, 1), 3));
        let rows: Vec<_> = g.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn flip_vertical_reverses_rows() {
        let g = Grid::parse("12\n34\n56").unwrap();
        assert_eq!(g.flip_vertical().to_string(), "56\n34\n12");
        assert_eq!(g.flip_vertical().flip_vertical(), g);
    }

    #[test]
    fn low_points_of_heightmap() {
        let g = Grid::parse(HEIGHTS).unwrap();
        let lows = g.low_points();
        assert_eq!(
            lows,
            vec![
                Point::new(1, 0),
                Point::new(9, 0),
                Point::new(2, 2),
                Point::new(6, 4),
            ]
        );
        let risk: u32 = lows.iter().map(|&p| g.get(p).unwrap() + 1).sum();
        assert_eq!(risk, 15);
    }

    #[test]
    fn plateau_has_no_low_points() {
        let g = Grid::parse("55\n55").unwrap();
        assert!(g.low_points().is_empty());
        // A lone cell has no neighbours, so it is trivially lowest.
        assert_eq!(Grid::parse("7").unwrap().low_points(), vec![Point::ZERO]);
    }

    #[test]
    fn rows_conversion() {
        let g = Grid::from_rows(vec![vec![10, 20], vec![30, 40]]).unwrap();
        assert_eq!(g.to_string(), "1020\n3040");
        let rows: Vec<Vec<u32>> = g.clone().into();
        assert_eq!(Grid::try_from(rows), Ok(g));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("12\n34").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn ragged_json_is_rejected() {
        let res: Result<Grid, _> = serde_json::from_str("[[1,2],[3]]");
        assert!(res.is_err());
    }
}
