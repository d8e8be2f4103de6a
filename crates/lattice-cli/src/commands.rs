use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lattice_core::Grid;
use lattice_paths::{RegionMap, lowest_total_risk_tiled};

use crate::cli::{Command, stretch_factor};

/// Read and parse the digit grid at `path`.
pub fn read_grid(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    let grid = Grid::parse(&text)
        .with_context(|| format!("failed to parse grid from {}", path.display()))?;
    log::info!("read {}x{} grid from {}", grid.width(), grid.height(), path.display());
    Ok(grid)
}

/// Run `command` and return its answer.
pub fn run(command: &Command) -> Result<u64> {
    let grid = read_grid(command.input_path())?;
    match command {
        Command::Risk {
            extended, stretch, ..
        } => risk(&grid, stretch_factor(*extended, *stretch)),
        Command::LowPoints { .. } => Ok(low_point_risk(&grid)),
        Command::Basins { barrier, top, .. } => Ok(basin_product(&grid, *barrier, *top)),
    }
}

pub fn risk(grid: &Grid, stretch: u32) -> Result<u64> {
    let cost = lowest_total_risk_tiled(grid, stretch)
        .with_context(|| format!("no safe route through the grid tiled {stretch}x"))?;
    Ok(cost)
}

/// Sum of `height + 1` over all low points.
pub fn low_point_risk(grid: &Grid) -> u64 {
    grid.low_points()
        .into_iter()
        .filter_map(|p| grid.get(p))
        .map(|h| u64::from(h) + 1)
        .sum()
}

/// Product of the `top` largest region sizes; 0 if there are no regions.
pub fn basin_product(grid: &Grid, barrier: u32, top: usize) -> u64 {
    let regions = RegionMap::label(grid, barrier);
    if regions.is_empty() {
        log::warn!("grid has no regions outside barrier {barrier}");
        return 0;
    }
    let largest = regions.largest(top);
    log::info!("{} regions, largest {largest:?}", regions.len());
    largest.into_iter().map(|s| s as u64).product()
}
