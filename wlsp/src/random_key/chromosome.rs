use crate::entities::Solution;
use crate::heuristics::sort_permutation;
use rand::Rng;
use std::cmp::Ordering;

/// Random-key chromosome: one key in `[0, 1)` per item.
/// Sorting the item ids by ascending key yields the order in which a decoder visits them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chromosome(pub Vec<f64>);

impl Chromosome {
    /// Chromosome with `n` uniformly random keys
    pub fn random(n: usize, rng: &mut impl Rng) -> Self {
        Chromosome((0..n).map(|_| rng.random::<f64>()).collect())
    }

    /// Encodes a solution: items are assigned the strictly increasing keys `k / n` in the order
    /// they are visited, levels bottom-to-top and, within a level, in stored order.
    ///
    /// `n_items` is the length of the chromosome, the item count of the instance.
    pub fn encode(solution: &Solution, n_items: usize) -> Self {
        let mut keys = vec![0.0; n_items];
        for (k, i) in solution.items().enumerate() {
            keys[i] = k as f64 / n_items as f64;
        }
        Chromosome(keys)
    }

    /// Item ids sorted by ascending key, ties broken by id.
    pub fn permutation(&self) -> Vec<usize> {
        sort_permutation(self.len(), |i| TotalKey(self.0[i]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> &[f64] {
        &self.0
    }
}

/// Key compared using the IEEE total order, malformed keys never panic
#[derive(Debug, Clone, Copy, PartialEq)]
struct TotalKey(f64);

impl Eq for TotalKey {}

impl PartialOrd for TotalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
