//! Single-source, single-destination uniform-cost search.

use std::collections::BinaryHeap;

use lattice_core::{GridError, Point};

use crate::PathRange;
use crate::error::PathError;
use crate::pathrange::{NodeRef, Path, PathNode};
use crate::traits::WeightedPather;

impl PathRange {
    /// Minimum total cost of moving from `from` to `to`.
    ///
    /// Entering a cell costs `pather.cost(..)`; the cost of `from` itself is
    /// never counted, so `from == to` yields 0. Returns
    /// [`PathError::Unreachable`] if `to` cannot be reached and a grid error
    /// if either endpoint lies outside the range.
    pub fn shortest_path_cost<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<u64, PathError> {
        self.search(pather, from, to).map(|(_, cost)| cost)
    }

    /// Like [`shortest_path_cost`](Self::shortest_path_cost), but also
    /// returns one minimum-cost path, `from` first and `to` last.
    pub fn shortest_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Path, PathError> {
        let (goal, cost) = self.search(pather, from, to)?;
        let mut points = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            points.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        points.reverse();
        Ok(Path { cost, points })
    }

    /// Best known cost of `p` after the last search: final for settled
    /// positions, tentative for positions still on the frontier, `None` for
    /// positions never reached.
    pub fn cost_at(&self, p: Point) -> Option<u64> {
        if self.generation == 0 {
            return None;
        }
        let n = &self.nodes[self.idx(p)?];
        (n.generation == self.generation).then_some(n.cost)
    }

    /// Every position reached by the last search with its best known cost,
    /// in row-major order.
    pub fn cost_map(&self) -> Vec<PathNode> {
        if self.generation == 0 {
            return Vec::new();
        }
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.generation == self.generation)
            .map(|(i, n)| PathNode {
                pos: self.point(i),
                cost: n.cost,
            })
            .collect()
    }

    fn search<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<(usize, u64), PathError> {
        let si = self.idx(from).ok_or(GridError::OutOfBounds(from))?;
        let gi = self.idx(to).ok_or(GridError::OutOfBounds(to))?;

        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale generations could collide, start over.
            self.nodes.iter_mut().for_each(|n| n.generation = 0);
            self.generation = 1;
        }
        let cur_gen = self.generation;
        self.settled = 0;

        let n = &mut self.nodes[si];
        n.cost = 0;
        n.parent = usize::MAX;
        n.generation = cur_gen;
        n.settled = false;

        let mut frontier: BinaryHeap<NodeRef> = BinaryHeap::new();
        frontier.push(NodeRef { idx: si, cost: 0 });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let result = 'search: loop {
            let Some(current) = frontier.pop() else {
                break Err(PathError::Unreachable { from, to });
            };
            let ci = current.idx;
            let cn = &self.nodes[ci];
            // Stale entry left behind by a later decrease.
            if cn.settled || current.cost > cn.cost {
                continue;
            }
            if ci == gi {
                break Ok((ci, current.cost));
            }
            self.nodes[ci].settled = true;
            self.settled += 1;

            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let step = match pather.cost(cp, np) {
                    Ok(c) => c,
                    Err(e) => break 'search Err(e.into()),
                };
                let tentative = current.cost + u64::from(step);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.settled || tentative >= n.cost {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.settled = false;
                }

                n.cost = tentative;
                n.parent = ci;
                frontier.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
            }
        };

        self.nbuf = nbuf;

        match &result {
            Ok((_, cost)) => log::debug!(
                "shortest path {from} -> {to}: cost {cost}, {} settled",
                self.settled
            ),
            Err(e) => log::debug!("shortest path {from} -> {to} failed: {e}"),
        }
        result
    }
}
