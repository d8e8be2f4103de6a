//! Connected-component labelling by flood fill.

use lattice_core::Point;

use crate::PathRange;
use crate::traits::Pather;

impl PathRange {
    /// Label every passable cell in the range with a connected-component ID.
    ///
    /// Two cells belong to the same component if there is a path of
    /// neighbours (as defined by `pather`) between them. Cells for which
    /// [`Pather::passable`] is false are left unlabelled. After this call use
    /// [`cc_at`](Self::cc_at) to query the label of a given point.
    pub fn cc_map_all<P: Pather>(&mut self, pather: &P) {
        let len = self.rng.len();
        // Reset labels.
        for v in self.cc_labels.iter_mut() {
            *v = -1;
        }

        let mut label: i32 = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for start in 0..len {
            if self.cc_labels[start] >= 0 || !pather.passable(self.point(start)) {
                continue;
            }

            // Iterative DFS from `start`.
            self.cc_stack.clear();
            self.cc_stack.push(start);
            self.cc_labels[start] = label;

            while let Some(ci) = self.cc_stack.pop() {
                let cp = self.point(ci);
                nbuf.clear();
                pather.neighbors(cp, &mut nbuf);

                for &np in nbuf.iter() {
                    if let Some(ni) = self.idx(np) {
                        if self.cc_labels[ni] < 0 {
                            self.cc_labels[ni] = label;
                            self.cc_stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        self.cc_count = label as usize;
        self.nbuf = nbuf;
        log::debug!("flood fill found {label} components in {}", self.rng);
    }

    /// Number of components found by the last [`cc_map_all`](Self::cc_map_all).
    pub fn cc_count(&self) -> usize {
        self.cc_count
    }

    /// Query the connected-component label of a point.
    ///
    /// Returns `None` if the point is outside the range, is not passable, or
    /// `cc_map_all` has not been called yet.
    pub fn cc_at(&self, p: Point) -> Option<usize> {
        let i = self.idx(p)?;
        let label = self.cc_labels[i];
        if label < 0 { None } else { Some(label as usize) }
    }
}
