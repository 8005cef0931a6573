use crate::entities::{Instance, Solution};
use crate::eval;
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

/// Every item id in `0..n_items` appears in exactly one level
pub fn solution_is_exact_cover(solution: &Solution, n_items: usize) -> bool {
    let mut seen = vec![false; n_items];
    for i in solution.items() {
        if i >= n_items || seen[i] {
            error!("item {i} is out of bounds or assigned more than once");
            return false;
        }
        seen[i] = true;
    }
    seen.iter().all(|s| *s)
}

/// The solution contains exactly the items of `permutation`, each once, and no empty level
pub fn solution_covers_permutation(solution: &Solution, permutation: &[usize]) -> bool {
    let placed = solution.items().sorted().collect_vec();
    let expected = permutation.iter().copied().sorted().collect_vec();
    placed == expected && solution.levels.iter().all(|l| !l.is_empty())
}

/// The solution is an exact cover of the instance's items and respects the level capacity
pub fn solution_is_valid(instance: &Instance, solution: &Solution) -> bool {
    solution_is_exact_cover(solution, instance.n_items()) && eval::is_feasible(instance, solution)
}

/// Both solutions assign the same items to the same levels, ignoring the order within a level
pub fn same_level_membership(a: &Solution, b: &Solution) -> bool {
    a.n_levels() == b.n_levels()
        && a.levels
            .iter()
            .zip(b.levels.iter())
            .all(|(la, lb)| la.iter().sorted().eq(lb.iter().sorted()))
}

/// Two costs are equal within floating point tolerance
pub fn costs_match(a: f64, b: f64) -> bool {
    approx_eq!(f64, a, b, epsilon = 1e-6 * f64::max(1.0, a.abs()))
}
