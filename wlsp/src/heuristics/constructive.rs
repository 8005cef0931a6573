use crate::entities::{Instance, Level, Solution};
use crate::eval;
use crate::index::FirstFitTree;
use crate::util::assertions;
use ordered_float::NotNan;
use std::collections::BTreeSet;

/// Places every item, in the order of `permutation`, on the current (topmost) level if it fits,
/// otherwise opens a new level for it. Earlier levels are never revisited.
///
/// Complexity: O(n).
pub fn next_fit(instance: &Instance, permutation: &[usize]) -> Solution {
    let mut levels: Vec<Level> = vec![];
    //capacity left on the current level
    let mut remaining = 0.0;

    for &i in permutation {
        let length = instance.rect(i).length;
        if let Some(level) = levels.last_mut() {
            if eval::fits(length, remaining) {
                level.push(i);
                remaining -= length;
                continue;
            }
        }
        //does not fit on the current level (or there is none yet), open a new one
        remaining = instance.recipient_length - length;
        levels.push(vec![i]);
    }

    let solution = Solution::new(levels);
    debug_assert!(assertions::solution_covers_permutation(&solution, permutation));
    solution
}

/// Places every item, in the order of `permutation`, on the lowest level with sufficient
/// remaining capacity ([`eval::fits`]), or on a new level if none exists.
///
/// Complexity: O(n log n).
pub fn first_fit(instance: &Instance, permutation: &[usize]) -> Solution {
    let capacity = instance.recipient_length;
    let mut levels: Vec<Level> = vec![vec![]];
    let mut remaining = FirstFitTree::from_elem(capacity, 1);

    for &i in permutation {
        let length = instance.rect(i).length;
        match remaining.first_fit_by(|r| eval::fits(length, r)) {
            Some(level) => {
                remaining.decrease(level, length);
                levels[level].push(i);
            }
            None => {
                remaining.push(capacity - length);
                levels.push(vec![i]);
            }
        }
    }
    debug_assert!(remaining.aggregates_consistent());

    let solution = without_empty_levels(levels);
    debug_assert!(assertions::solution_covers_permutation(&solution, permutation));
    solution
}

/// Places every item, in the order of `permutation`, on the level with the least remaining
/// capacity that still fits the item (a level fits if its remaining capacity is at least the
/// item's length, see [`eval::fits`]), or on a new level if none exists.
/// Among levels with equal remaining capacity, the one with the lowest index is chosen.
///
/// Complexity: O(n log n).
pub fn best_fit(instance: &Instance, permutation: &[usize]) -> Solution {
    let capacity = instance.recipient_length;
    let to_key = |c: f64| NotNan::new(c).expect("remaining capacity is NaN");

    let mut levels: Vec<Level> = vec![vec![]];
    //(remaining capacity, level index), ordered by capacity first
    let mut remaining: BTreeSet<(NotNan<f64>, usize)> = BTreeSet::from([(to_key(capacity), 0)]);

    for &i in permutation {
        let length = instance.rect(i).length;
        //levels left with marginally less than `length` still fit within tolerance and are the tightest
        let tightest = remaining
            .range(..(to_key(length), 0))
            .rev()
            .take_while(|(cap, _)| eval::fits(length, cap.into_inner()))
            .last()
            .or_else(|| remaining.range((to_key(length), 0)..).next())
            .copied();
        match tightest {
            Some(record) => {
                let (cap, level) = record;
                remaining.remove(&record);
                remaining.insert((to_key(cap.into_inner() - length), level));
                levels[level].push(i);
            }
            None => {
                remaining.insert((to_key(capacity - length), levels.len()));
                levels.push(vec![i]);
            }
        }
    }

    let solution = without_empty_levels(levels);
    debug_assert!(assertions::solution_covers_permutation(&solution, permutation));
    solution
}

/// Only the seeded bottom level can remain empty (e.g. for an empty instance)
fn without_empty_levels(mut levels: Vec<Level>) -> Solution {
    levels.retain(|level| !level.is_empty());
    Solution::new(levels)
}
