mod constructive;
mod randomized;

#[doc(inline)]
pub use constructive::best_fit;
#[doc(inline)]
pub use constructive::first_fit;
#[doc(inline)]
pub use constructive::next_fit;
#[doc(inline)]
pub use randomized::Metric;
#[doc(inline)]
pub use randomized::perturbed;
#[doc(inline)]
pub use randomized::randomized_best_fit_increasing_height;
#[doc(inline)]
pub use randomized::randomized_first_fit_decreasing_density;

use itertools::Itertools;
use ordered_float::NotNan;
use std::cmp::Reverse;

/// Item ids sorted by ascending `key`, ties broken by ascending id.
pub fn sort_permutation<K: Ord>(n: usize, key: impl Fn(usize) -> K) -> Vec<usize> {
    (0..n).sorted_by_cached_key(|&i| (key(i), i)).collect_vec()
}

/// Visitation order of the first-fit heuristic: decreasing density, see [`crate::entities::Rect::density`]
pub fn decreasing_density_order(instance: &crate::entities::Instance) -> Vec<usize> {
    sort_permutation(instance.n_items(), |i| {
        Reverse(NotNan::new(instance.rect(i).density()).expect("item density is NaN"))
    })
}

/// Visitation order of the best-fit heuristic: increasing height
pub fn increasing_height_order(instance: &crate::entities::Instance) -> Vec<usize> {
    sort_permutation(instance.n_items(), |i| {
        NotNan::new(instance.rect(i).height).expect("item height is NaN")
    })
}
