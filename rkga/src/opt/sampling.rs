use std::iter::repeat_n;

use itertools::Itertools;
use log::debug;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use rayon::prelude::*;
use wlsp::entities::{Instance, MetricStats, Solution};
use wlsp::eval;
use wlsp::heuristics::{
    randomized_best_fit_increasing_height, randomized_first_fit_decreasing_density,
};

use crate::config::RkgaConfig;

/// Randomized constructive heuristics sampled by the optimizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    FirstFitDecreasingDensity,
    BestFitIncreasingHeight,
}

#[derive(Debug, Clone)]
pub struct Sample {
    pub heuristic: Heuristic,
    pub solution: Solution,
    pub cost: f64,
}

/// Zero-mean normal noise with a standard deviation of `deviations` times the spread of the metric.
pub fn noise_distribution(deviations: f64, stats: MetricStats) -> Normal<f64> {
    let std_dev = deviations * stats.std_dev;
    Normal::new(0.0, std_dev)
        .unwrap_or_else(|_| panic!("invalid noise standard deviation: {std_dev}"))
}

/// Runs `config.ff_samples` randomized first-fit and `config.bf_samples` randomized best-fit constructions.
///
/// Every run gets its own [`SmallRng`], seeded sequentially from `rng`.
/// The runs themselves are executed in parallel, the result is ordered as the runs were seeded.
pub fn sample_constructive(
    instance: &Instance,
    config: &RkgaConfig,
    rng: &mut impl Rng,
) -> Vec<Sample> {
    let ff_noise = noise_distribution(config.ff_deviations, instance.weight_stats());
    let bf_noise = noise_distribution(config.bf_deviations, instance.height_stats());

    let runs = repeat_n(Heuristic::FirstFitDecreasingDensity, config.ff_samples)
        .chain(repeat_n(Heuristic::BestFitIncreasingHeight, config.bf_samples))
        .map(|heuristic| (heuristic, rng.random::<u64>()))
        .collect_vec();

    let samples: Vec<Sample> = runs
        .into_par_iter()
        .map(|(heuristic, seed)| {
            let mut run_rng = SmallRng::seed_from_u64(seed);
            let solution = match heuristic {
                Heuristic::FirstFitDecreasingDensity => {
                    randomized_first_fit_decreasing_density(instance, &mut run_rng, &ff_noise)
                }
                Heuristic::BestFitIncreasingHeight => {
                    randomized_best_fit_increasing_height(instance, &mut run_rng, &bf_noise)
                }
            };
            let cost = eval::cost(instance, &solution);
            Sample {
                heuristic,
                solution,
                cost,
            }
        })
        .collect();

    debug!("[SAMPLE] {} constructive samples evaluated", samples.len());
    samples
}

/// Cheapest sample, the earliest one on ties.
pub fn best_sample(samples: &[Sample]) -> Option<&Sample> {
    samples.iter().min_by(|a, b| a.cost.total_cmp(&b.cost))
}
