/// Append-only sequence of remaining level capacities supporting first-fit queries.
///
/// Realised as a segment tree over a power-of-two array of leaves, every internal node
/// holding the maximum of its subtree. Node 1 is the root, the children of node `n`
/// are `2n` and `2n + 1`, and leaf `i` lives at node `n_leaves + i`.
/// Unused leaves hold `-∞`, so they never satisfy a query.
///
/// | operation                    | complexity          |
/// |------------------------------|---------------------|
/// | [`push`](Self::push)         | amortized O(log n)  |
/// | [`decrease`](Self::decrease) | O(log n)            |
/// | [`first_fit`](Self::first_fit) | O(log n)          |
#[derive(Clone, Debug)]
pub struct FirstFitTree {
    /// Number of values stored
    len: usize,
    /// Number of leaves, always a power of two
    n_leaves: usize,
    /// Max-aggregate per node, index 0 is unused
    nodes: Vec<f64>,
}

impl FirstFitTree {
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let n_leaves = capacity.max(1).next_power_of_two();
        Self {
            len: 0,
            n_leaves,
            nodes: vec![f64::NEG_INFINITY; 2 * n_leaves],
        }
    }

    /// Creates a tree containing `len` copies of `value`
    pub fn from_elem(value: f64, len: usize) -> Self {
        let mut tree = Self::with_capacity(len);
        tree.nodes[tree.n_leaves..tree.n_leaves + len].fill(value);
        tree.len = len;
        tree.rebuild_internal_nodes();
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current value at `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        match index < self.len {
            true => Some(self.nodes[self.n_leaves + index]),
            false => None,
        }
    }

    /// Largest value stored, `None` if the tree is empty
    pub fn max(&self) -> Option<f64> {
        match self.is_empty() {
            true => None,
            false => Some(self.nodes[1]),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes[self.n_leaves..self.n_leaves + self.len]
            .iter()
            .copied()
    }

    /// Appends a new value, its index is [`len()`](Self::len) before the call.
    pub fn push(&mut self, value: f64) {
        if self.len == self.n_leaves {
            self.grow();
        }
        let index = self.len;
        self.len += 1;
        self.set(index, value);
    }

    /// Reduces the value at `index` by `delta`.
    pub fn decrease(&mut self, index: usize, delta: f64) {
        assert!(
            index < self.len,
            "index out of bounds: {index} >= {}",
            self.len
        );
        let value = self.nodes[self.n_leaves + index];
        self.set(index, value - delta);
    }

    /// Lowest index whose value is at least `threshold`, `None` if no value qualifies.
    pub fn first_fit(&self, threshold: f64) -> Option<usize> {
        // NaN thresholds never qualify
        self.first_fit_by(|value| value >= threshold)
    }

    /// Lowest index whose value satisfies `qualifies`, `None` if no value does.
    ///
    /// `qualifies` must be monotone: if it holds for a value, it holds for every larger value.
    /// It is evaluated on subtree maxima to steer the descent.
    pub fn first_fit_by(&self, qualifies: impl Fn(f64) -> bool) -> Option<usize> {
        if self.is_empty() || !qualifies(self.nodes[1]) {
            return None;
        }
        let mut node = 1;
        while node < self.n_leaves {
            let left = 2 * node;
            node = match qualifies(self.nodes[left]) {
                true => left,
                false => left + 1,
            };
        }
        let index = node - self.n_leaves;
        debug_assert!(index < self.len);
        Some(index)
    }

    fn set(&mut self, index: usize, value: f64) {
        let mut node = self.n_leaves + index;
        self.nodes[node] = value;
        while node > 1 {
            node /= 2;
            self.nodes[node] = f64::max(self.nodes[2 * node], self.nodes[2 * node + 1]);
        }
    }

    /// Doubles the number of leaves and rebuilds the aggregates
    fn grow(&mut self) {
        let n_leaves = self.n_leaves * 2;
        let mut nodes = vec![f64::NEG_INFINITY; 2 * n_leaves];
        nodes[n_leaves..n_leaves + self.len]
            .copy_from_slice(&self.nodes[self.n_leaves..self.n_leaves + self.len]);
        self.n_leaves = n_leaves;
        self.nodes = nodes;
        self.rebuild_internal_nodes();
    }

    fn rebuild_internal_nodes(&mut self) {
        for node in (1..self.n_leaves).rev() {
            self.nodes[node] = f64::max(self.nodes[2 * node], self.nodes[2 * node + 1]);
        }
    }

    /// Checks whether every internal node holds the maximum of its children
    pub fn aggregates_consistent(&self) -> bool {
        (1..self.n_leaves).all(|node| {
            let expected = f64::max(self.nodes[2 * node], self.nodes[2 * node + 1]);
            self.nodes[node] == expected
        })
    }
}

impl Default for FirstFitTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<f64> for FirstFitTree {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let values: Vec<f64> = iter.into_iter().collect();
        let mut tree = Self::with_capacity(values.len());
        tree.nodes[tree.n_leaves..tree.n_leaves + values.len()].copy_from_slice(&values);
        tree.len = values.len();
        tree.rebuild_internal_nodes();
        tree
    }
}
