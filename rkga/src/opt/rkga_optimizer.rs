use std::time::Instant;

use log::info;
use rand::prelude::SmallRng;
use thousands::Separable;
use wlsp::entities::{Instance, Solution};
use wlsp::eval;
use wlsp::random_key::{Decoder, NextFitDecoder};
use wlsp::util::assertions;

use crate::config::RkgaConfig;
use crate::opt::brkga::Brkga;
use crate::opt::sampling::{Heuristic, Sample, best_sample, sample_constructive};

/// Optimizer for weighted level strip packing.
/// Samples randomized constructive heuristics and refines the best ones with a biased random-key genetic algorithm.
pub struct RkgaOptimizer {
    pub instance: Instance,
    pub config: RkgaConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub eval_counter: usize,
}

impl RkgaOptimizer {
    pub fn new(instance: Instance, config: RkgaConfig, rng: SmallRng) -> Self {
        assert!(
            config.ff_samples + config.bf_samples > 0 || config.brkga.is_some(),
            "nothing to optimize with: no samples and no genetic algorithm configured"
        );
        Self {
            instance,
            config,
            rng,
            eval_counter: 0,
        }
    }

    pub fn solve(&mut self) -> Solution {
        let start = Instant::now();

        if self.instance.is_empty() {
            info!("[RKGA] instance contains no items, returning the empty solution");
            return Solution::empty();
        }

        let samples = sample_constructive(&self.instance, &self.config, &mut self.rng);
        self.eval_counter += samples.len();

        let mut best = match best_sample(&samples) {
            Some(sample) => {
                info!(
                    "[RKGA] best constructive sample: {:.3} ({:?})",
                    sample.cost, sample.heuristic
                );
                log_sample_summary(&samples);
                Some((sample.solution.clone(), sample.cost))
            }
            None => None,
        };

        if let Some(brkga_config) = self.config.brkga {
            let decoder = NextFitDecoder::new(&self.instance);
            let mut ranked = samples.iter().collect::<Vec<_>>();
            ranked.sort_by(|a, b| a.cost.total_cmp(&b.cost));
            let seeds = ranked.iter().map(|s| decoder.encode(&s.solution));

            let mut brkga = Brkga::new(&decoder, brkga_config, seeds, &mut self.rng);
            let fittest = brkga.run(&mut self.rng);
            self.eval_counter += brkga.n_evaluations;

            let improves = best
                .as_ref()
                .is_none_or(|(_, best_cost)| fittest.fitness < *best_cost);
            if improves {
                best = Some((decoder.decode(&fittest.chromosome), fittest.fitness));
            }
        }

        let mut solution = match best {
            Some((solution, _)) => solution,
            None => unreachable!("either samples or the genetic algorithm produce a solution"),
        };
        self.config.level_order.apply(&self.instance, &mut solution);
        debug_assert!(assertions::solution_is_valid(&self.instance, &solution));

        info!(
            "[RKGA] optimization finished in {:.3}ms ({} evaluations)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.eval_counter.separate_with_commas()
        );
        info!(
            "[RKGA] solution has a cost of {:.3}, {} levels and a total height of {:.3}",
            eval::cost(&self.instance, &solution),
            solution.n_levels(),
            solution.total_height(&self.instance)
        );
        solution
    }
}

fn log_sample_summary(samples: &[Sample]) {
    for heuristic in [
        Heuristic::FirstFitDecreasingDensity,
        Heuristic::BestFitIncreasingHeight,
    ] {
        let costs = samples
            .iter()
            .filter(|s| s.heuristic == heuristic)
            .map(|s| s.cost);
        if let Some(min) = costs.clone().min_by(f64::total_cmp) {
            info!(
                "[SAMPLE] {:?}: {} samples, best cost {:.3}",
                heuristic,
                costs.count(),
                min
            );
        }
    }
}
