//! Pathers where entering a cell costs its value, and the corner-to-corner
//! "lowest total risk" queries built on them.

use lattice_core::{Grid, GridError, Point, TiledGrid};

use crate::PathRange;
use crate::error::PathError;
use crate::traits::{Pather, WeightedPather};

/// Moves between cardinal neighbours of a [`Grid`]; entering a cell costs
/// its value.
#[derive(Debug, Clone, Copy)]
pub struct RiskPather<'a> {
    grid: &'a Grid,
}

impl<'a> RiskPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Pather for RiskPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.grid.neighbors4(p));
    }

    fn passable(&self, p: Point) -> bool {
        self.grid.contains(p)
    }
}

impl WeightedPather for RiskPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> Result<u32, GridError> {
        self.grid.at(to)
    }
}

/// Same as [`RiskPather`] over a [`TiledGrid`].
#[derive(Debug, Clone, Copy)]
pub struct TiledRiskPather<'a> {
    tiled: TiledGrid<'a>,
}

impl<'a> TiledRiskPather<'a> {
    pub fn new(tiled: TiledGrid<'a>) -> Self {
        Self { tiled }
    }
}

impl Pather for TiledRiskPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.tiled.neighbors4(p));
    }

    fn passable(&self, p: Point) -> bool {
        self.tiled.contains(p)
    }
}

impl WeightedPather for TiledRiskPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> Result<u32, GridError> {
        self.tiled.value(to)
    }
}

/// Minimum total risk from the top-left to the bottom-right cell of `grid`.
pub fn lowest_total_risk(grid: &Grid) -> Result<u64, PathError> {
    let mut pr = PathRange::new(grid.bounds());
    let to = Point::new(grid.width() - 1, grid.height() - 1);
    pr.shortest_path_cost(&RiskPather::new(grid), Point::ZERO, to)
}

/// Minimum total risk across `grid` tiled `stretch` times in each direction.
///
/// A `stretch` of 0, or one whose tiled size overflows, is rejected with
/// [`GridError::InvalidGrid`] before any search state is allocated.
pub fn lowest_total_risk_tiled(grid: &Grid, stretch: u32) -> Result<u64, PathError> {
    let tiled = TiledGrid::new(grid, stretch)?;
    let mut pr = PathRange::new(tiled.bounds());
    let to = Point::new(tiled.width() - 1, tiled.height() - 1);
    pr.shortest_path_cost(&TiledRiskPather::new(tiled), Point::ZERO, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::STRETCH;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const CAVERN: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

    fn random_grid(rng: &mut StdRng, w: usize, h: usize) -> Grid {
        let rows = (0..h)
            .map(|_| (0..w).map(|_| rng.random_range(1..10)).collect())
            .collect();
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn sample_cavern() {
        let grid = Grid::parse(CAVERN).unwrap();
        assert_eq!(lowest_total_risk(&grid), Ok(40));
    }

    #[test]
    fn sample_cavern_extended() {
        let grid = Grid::parse(CAVERN).unwrap();
        assert_eq!(lowest_total_risk_tiled(&grid, STRETCH), Ok(315));
    }

    #[test]
    fn stretch_one_matches_plain_grid() {
        let grid = Grid::parse(CAVERN).unwrap();
        assert_eq!(lowest_total_risk_tiled(&grid, 1), lowest_total_risk(&grid));
    }

    #[test]
    fn invalid_stretch_is_an_error() {
        let grid = Grid::parse(CAVERN).unwrap();
        assert_eq!(
            lowest_total_risk_tiled(&grid, 0),
            Err(PathError::Grid(GridError::InvalidGrid(
                "stretch must be at least 1".to_string()
            )))
        );
        assert!(matches!(
            lowest_total_risk_tiled(&grid, 3_000_000_000),
            Err(PathError::Grid(GridError::InvalidGrid(_)))
        ));
    }

    #[test]
    fn single_cell_costs_nothing() {
        for v in ["0", "5", "9"] {
            let grid = Grid::parse(v).unwrap();
            assert_eq!(lowest_total_risk(&grid), Ok(0));
        }
    }

    #[test]
    fn single_row_sums_everything_but_origin() {
        let grid = Grid::parse("91234").unwrap();
        assert_eq!(lowest_total_risk(&grid), Ok(10));
    }

    #[test]
    fn diagonal_costs_give_stable_result() {
        // Cost grows along each anti-diagonal; every monotone path costs
        // the same, so tie-breaking must not matter.
        let rows = (0..6)
            .map(|y| (0..6).map(|x| x + y + 1).collect())
            .collect();
        let grid = Grid::from_rows(rows).unwrap();
        let expected: u64 = (1..=10).map(|d| d + 1).sum();
        for _ in 0..3 {
            assert_eq!(lowest_total_risk(&grid), Ok(expected));
        }
        // Same answer when searching the other way round.
        let mut pr = PathRange::new(grid.bounds());
        let back = pr
            .shortest_path_cost(&RiskPather::new(&grid), Point::new(5, 5), Point::ZERO)
            .unwrap();
        assert_eq!(back, (0..10).map(|d| d + 1).sum::<u64>());
    }

    #[test]
    fn solver_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let grid = random_grid(&mut rng, 12, 9);
            let a = lowest_total_risk(&grid).unwrap();
            let b = lowest_total_risk(&grid).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn raising_a_cost_never_lowers_the_minimum() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let grid = random_grid(&mut rng, 8, 8);
            let base = lowest_total_risk(&grid).unwrap();
            let mut rows: Vec<Vec<u32>> = grid.clone().into();
            let (x, y) = (rng.random_range(0..8), rng.random_range(0..8));
            rows[y][x] += rng.random_range(1..5);
            let raised = Grid::from_rows(rows).unwrap();
            assert!(lowest_total_risk(&raised).unwrap() >= base);
        }
    }

    #[test]
    fn dijkstra_agrees_with_relaxation() {
        // Bellman-Ford style fixpoint as an independent reference.
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let grid = random_grid(&mut rng, 7, 5);
            let mut best = vec![u64::MAX; 35];
            best[0] = 0;
            let mut changed = true;
            while changed {
                changed = false;
                for (p, _) in grid.iter() {
                    let i = (p.y * 7 + p.x) as usize;
                    if best[i] == u64::MAX {
                        continue;
                    }
                    for n in grid.neighbors4(p) {
                        let j = (n.y * 7 + n.x) as usize;
                        let c = best[i] + u64::from(grid.get(n).unwrap());
                        if c < best[j] {
                            best[j] = c;
                            changed = true;
                        }
                    }
                }
            }
            assert_eq!(lowest_total_risk(&grid), Ok(best[34]));
        }
    }
}
