use lattice_core::{Point, Range};

/// A position with an associated total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: u64,
}

/// A minimum-cost path, origin first.
///
/// Several paths may share the minimum cost; which one is returned depends
/// on the tie-break order and only `cost` is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cost: u64,
    pub points: Vec<Point>,
}

// ---------------------------------------------------------------------------
// Internal node for the priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) cost: u64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) settled: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            cost: 0,
            parent: usize::MAX,
            generation: 0,
            settled: false,
        }
    }
}

/// Frontier entry, ordered for use in a `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the max-heap pops the smallest cost first, and among
        // equal costs the smallest (row-major) index.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Owner of the scratch space used by searches on a grid rectangle.
///
/// Buffers are allocated once; every query starts from a logically fresh
/// state (a generation counter invalidates the previous cost map), so the
/// result of a call never depends on earlier calls.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // shortest-path caches
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) settled: usize,
    // flood-fill caches
    pub(crate) cc_labels: Vec<i32>,
    pub(crate) cc_stack: Vec<usize>,
    pub(crate) cc_count: usize,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            generation: 0,
            settled: 0,
            cc_labels: vec![-1; len],
            cc_stack: Vec::new(),
            cc_count: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of positions settled by the last shortest-path search.
    #[inline]
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
