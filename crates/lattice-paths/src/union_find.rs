/// Disjoint-set forest over dense `u32` labels.
///
/// The root of every set is its numerically smallest member.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new singleton set and return its label. Labels are handed out
    /// as 0, 1, 2, … and never reused.
    pub fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    /// Number of labels created so far.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s set. Compresses paths by halving.
    ///
    /// # Panics
    ///
    /// If `x` was not created by [`make_set`](Self::make_set).
    pub fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grand = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grand;
            x = grand;
        }
        x
    }

    /// Merge the sets of `a` and `b`. Returns `false` if they were already
    /// the same set.
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[child as usize] = root;
        true
    }
}
