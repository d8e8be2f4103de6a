//! Region labelling with deferred merging.
//!
//! A single raster scan hands out provisional labels from the left or upper
//! neighbour. Arms of one region that only meet further down (a U shape,
//! say) get different provisional labels; a second pass unions every pair of
//! adjacent labels in a [`DisjointSet`] and a third pass rewrites each cell
//! to its set's smallest label.

use std::collections::BTreeMap;

use lattice_core::{Grid, Point};

use crate::traits::Pather;
use crate::union_find::DisjointSet;

/// Cell value separating regions in height maps.
pub const DEFAULT_BARRIER: u32 = 9;

/// Connects cardinal neighbours whose value differs from the barrier.
#[derive(Debug, Clone, Copy)]
pub struct BarrierPather<'a> {
    grid: &'a Grid,
    barrier: u32,
}

impl<'a> BarrierPather<'a> {
    pub fn new(grid: &'a Grid, barrier: u32) -> Self {
        Self { grid, barrier }
    }
}

impl Pather for BarrierPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.passable(n)),
        );
    }

    fn passable(&self, p: Point) -> bool {
        self.grid.get(p).is_some_and(|v| v != self.barrier)
    }
}

/// Region label of every cell of a grid, plus the size of each region.
///
/// Two cells share a label iff they are joined by a chain of cardinally
/// adjacent non-barrier cells. Barrier cells carry no label. Each label is
/// the smallest provisional label of its region, so labels are stable but
/// not necessarily contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    labels: Vec<Option<u32>>,
    width: usize,
    sizes: BTreeMap<u32, usize>,
}

impl RegionMap {
    /// Label the regions of `grid` separated by cells equal to `barrier`.
    pub fn label(grid: &Grid, barrier: u32) -> Self {
        let width = grid.width() as usize;
        let mut labels: Vec<Option<u32>> = vec![None; grid.bounds().len()];
        let mut sets = DisjointSet::new();

        // Pass 1: provisional labels, left neighbour first, then above.
        for (i, (p, v)) in grid.iter().enumerate() {
            if v == barrier {
                continue;
            }
            let left = if p.x > 0 { labels[i - 1] } else { None };
            let above = if p.y > 0 { labels[i - width] } else { None };
            labels[i] = Some(left.or(above).unwrap_or_else(|| sets.make_set()));
        }

        // Pass 2: union labels that touch.
        let mut merges = 0;
        for (i, (p, _)) in grid.iter().enumerate() {
            let Some(a) = labels[i] else {
                continue;
            };
            let right = if (p.x as usize) + 1 < width { labels[i + 1] } else { None };
            let below = labels.get(i + width).copied().flatten();
            for b in [right, below].into_iter().flatten() {
                if a != b && sets.union(a, b) {
                    log::trace!("merging region {a} with {b} at {p}");
                    merges += 1;
                }
            }
        }

        // Pass 3: canonical labels and sizes.
        let mut sizes = BTreeMap::new();
        for label in labels.iter_mut().flatten() {
            *label = sets.find(*label);
            *sizes.entry(*label).or_insert(0) += 1;
        }

        log::debug!(
            "labelled {}x{} grid: {} provisional labels, {merges} merges, {} regions",
            grid.width(),
            grid.height(),
            sets.len(),
            sizes.len()
        );

        Self {
            labels,
            width,
            sizes,
        }
    }

    /// Label of the region containing `p`, or `None` for barrier cells and
    /// positions outside the grid.
    pub fn label_at(&self, p: Point) -> Option<u32> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width {
            return None;
        }
        self.labels
            .get(p.y as usize * self.width + p.x as usize)
            .copied()
            .flatten()
    }

    /// Whether `a` and `b` belong to the same region.
    pub fn same_region(&self, a: Point, b: Point) -> bool {
        match (self.label_at(a), self.label_at(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// Number of cells per region label.
    pub fn sizes(&self) -> &BTreeMap<u32, usize> {
        &self.sizes
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The `n` largest region sizes, largest first.
    pub fn largest(&self, n: usize) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.sizes.values().copied().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.truncate(n);
        sizes
    }

    /// Iterate over `(Point, label)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<u32>)> + '_ {
        self.labels.iter().enumerate().map(|(i, &l)| {
            let p = Point::new((i % self.width) as i32, (i / self.width) as i32);
            (p, l)
        })
    }
}
