use crate::entities::{Instance, Solution};
use crate::util::FPA;

/// Computes the cost of a solution: the sum over all items of their weight
/// multiplied by the base height of the level containing them.
///
/// All items of a level share the same base height, the cost is thus independent
/// of the order of the items within a level.
pub fn cost(instance: &Instance, solution: &Solution) -> f64 {
    let mut total = 0.0;
    let mut base_height = 0.0;

    for level in &solution.levels {
        for &i in level {
            total += instance.rect(i).weight * base_height;
        }
        base_height += instance.level_height(level);
    }

    total
}

/// Whether an item of `length` fits in a level with `remaining` capacity.
///
/// Compared within [`FPA`] tolerance, so capacities that are filled exactly by
/// decimal lengths (e.g. `0.1 + 0.2 + 0.7` in a level of `1.0`) are accepted.
/// All heuristics and [`is_feasible`] decide capacity through this function.
pub fn fits(length: f64, remaining: f64) -> bool {
    FPA(length) <= FPA(remaining)
}

/// Checks whether the items of every level fit within the recipient length.
///
/// Items are admitted in level order, each one against the capacity left by its predecessors,
/// exactly as the heuristics build the level.
/// Exact cover of the items is a precondition, it is not verified here (see [`crate::util::assertions`]).
pub fn is_feasible(instance: &Instance, solution: &Solution) -> bool {
    solution.levels.iter().all(|level| {
        level
            .iter()
            .try_fold(instance.recipient_length, |remaining, &i| {
                let length = instance.rect(i).length;
                fits(length, remaining).then(|| remaining - length)
            })
            .is_some()
    })
}
