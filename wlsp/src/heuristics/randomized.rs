use crate::entities::{Instance, Solution};
use crate::heuristics::{
    best_fit, decreasing_density_order, first_fit, increasing_height_order,
};
use rand::Rng;
use rand_distr::Distribution;

/// The item metric perturbed by a randomized heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Weight,
    Height,
}

/// Returns a copy of `instance` in which `metric` of every item is perturbed by an independent
/// draw from `noise`, clamped to be non-negative.
/// Draws happen in ascending item order, one per item.
pub fn perturbed(
    instance: &Instance,
    metric: Metric,
    rng: &mut impl Rng,
    noise: &impl Distribution<f64>,
) -> Instance {
    let mut perturbed = instance.clone();
    for rect in perturbed.rects.iter_mut() {
        let value = match metric {
            Metric::Weight => &mut rect.weight,
            Metric::Height => &mut rect.height,
        };
        *value = f64::max(0.0, *value + noise.sample(rng));
    }
    perturbed
}

/// Randomized first-fit in decreasing order of density (weight per unit of area).
///
/// Noise is added to the weight of the items before their density is computed,
/// the item lengths used for placement remain untouched.
///
/// Complexity: O(n log n).
pub fn randomized_first_fit_decreasing_density(
    instance: &Instance,
    rng: &mut impl Rng,
    noise: &impl Distribution<f64>,
) -> Solution {
    let noisy = perturbed(instance, Metric::Weight, rng, noise);
    let permutation = decreasing_density_order(&noisy);
    first_fit(instance, &permutation)
}

/// Randomized best-fit in increasing order of height.
/// Placing low items first keeps the bottom levels, which weigh the most on the cost, low.
///
/// Complexity: O(n log n).
pub fn randomized_best_fit_increasing_height(
    instance: &Instance,
    rng: &mut impl Rng,
    noise: &impl Distribution<f64>,
) -> Solution {
    let noisy = perturbed(instance, Metric::Height, rng, noise);
    let permutation = increasing_height_order(&noisy);
    best_fit(instance, &permutation)
}
