use crate::entities::Instance;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Ids of the items assigned to a single level.
/// The order of the items within a level is cosmetic, it has no influence on the cost.
pub type Level = Vec<usize>;

/// Ordered partition of the items of an [`Instance`] into levels, level 0 being the bottom one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub levels: Vec<Level>,
}

impl Solution {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn n_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn n_items(&self) -> usize {
        self.levels.iter().map(|l| l.len()).sum()
    }

    /// Items in the order they are visited: levels bottom-to-top, within a level in stored order.
    pub fn items(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels.iter().flatten().copied()
    }

    /// Height of every level: the height of its tallest item
    pub fn level_heights(&self, instance: &Instance) -> Vec<f64> {
        self.levels
            .iter()
            .map(|level| instance.level_height(level))
            .collect()
    }

    /// Base height of every level: the summed height of all levels below it
    pub fn base_heights(&self, instance: &Instance) -> Vec<f64> {
        self.level_heights(instance)
            .into_iter()
            .scan(0.0, |base, h| {
                let current = *base;
                *base += h;
                Some(current)
            })
            .collect()
    }

    pub fn total_height(&self, instance: &Instance) -> f64 {
        self.level_heights(instance).iter().sum()
    }

    /// Summed length of the items of every level
    pub fn level_lengths(&self, instance: &Instance) -> Vec<f64> {
        self.levels
            .iter()
            .map(|level| level.iter().map(|&i| instance.rect(i).length).sum())
            .collect()
    }

    /// Index of the level containing `item`, if any
    pub fn level_of(&self, item: usize) -> Option<usize> {
        self.levels.iter().position(|level| level.contains(&item))
    }

    /// Sorts the items of every level by descending height (ties by id).
    /// Does not change level membership, and therefore neither the cost.
    pub fn normalize(&mut self, instance: &Instance) {
        for level in self.levels.iter_mut() {
            level.sort_by_key(|&i| {
                let height = NotNan::new(instance.rect(i).height).expect("item height is NaN");
                (Reverse(height), i)
            });
        }
    }
}

/// Post-processing applied to a constructed solution, controlled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelOrder {
    /// Items remain in the order in which they were placed
    #[default]
    AsPlaced,
    /// Items of every level are sorted by descending height, see [`Solution::normalize`]
    HeightDescending,
}

impl LevelOrder {
    pub fn apply(self, instance: &Instance, solution: &mut Solution) {
        match self {
            LevelOrder::AsPlaced => {}
            LevelOrder::HeightDescending => solution.normalize(instance),
        }
    }
}
