use crate::random_key::{Chromosome, Decoder};
use itertools::Itertools;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Outcome of shaking a set of populations.
#[derive(Debug, Clone, PartialEq)]
pub struct ShakeReport {
    /// Per-gene replacement probability used for this invocation
    pub probability: f64,
    /// Whether each individual was modified, indexed as `[population][individual]`
    pub changed: Vec<Vec<bool>>,
}

impl ShakeReport {
    pub fn n_changed(&self) -> usize {
        self.changed.iter().flatten().filter(|c| **c).count()
    }
}

/// Shakes a single chromosome, returns whether it was modified.
///
/// 1. the chromosome is decoded,
/// 2. the items within every level are shuffled (cost-neutral),
/// 3. the shuffled solution is re-encoded,
/// 4. every gene is independently replaced by a fresh uniform key with probability `p`.
///
/// If no gene is replaced, `chromosome` is left exactly as it was.
/// The shuffle draws from `rng` regardless of the outcome.
pub fn shake_chromosome(
    chromosome: &mut Chromosome,
    decoder: &impl Decoder,
    p: f64,
    rng: &mut impl Rng,
) -> bool {
    let mut solution = decoder.decode(chromosome);
    for level in solution.levels.iter_mut() {
        level.shuffle(rng);
    }
    let mut shaken = Chromosome::encode(&solution, decoder.chromosome_len());

    let mut changed = false;
    for key in shaken.0.iter_mut() {
        if rng.random::<f64>() < p {
            *key = rng.random::<f64>();
            changed = true;
        }
    }

    if changed {
        *chromosome = shaken;
    }
    changed
}

/// Shakes every chromosome of every population, sequentially.
/// The replacement probability is drawn once from `p_range` and shared by all individuals.
pub fn shake_populations(
    populations: &mut [Vec<Chromosome>],
    decoder: &impl Decoder,
    p_range: RangeInclusive<f64>,
    rng: &mut impl Rng,
) -> ShakeReport {
    let probability = sample_probability(p_range, rng);

    let mut changed = Vec::with_capacity(populations.len());
    for pop in populations.iter_mut() {
        let mut pop_changed = Vec::with_capacity(pop.len());
        for chromosome in pop.iter_mut() {
            pop_changed.push(shake_chromosome(chromosome, decoder, probability, rng));
        }
        changed.push(pop_changed);
    }

    ShakeReport {
        probability,
        changed,
    }
}

/// Parallel counterpart of [`shake_populations`].
/// Every individual gets its own generator, seeded sequentially from `rng` in population order,
/// the result is therefore deterministic for a given state of `rng`.
pub fn par_shake_populations(
    populations: &mut [Vec<Chromosome>],
    decoder: &impl Decoder,
    p_range: RangeInclusive<f64>,
    rng: &mut impl Rng,
) -> ShakeReport {
    let probability = sample_probability(p_range, rng);

    let mut seeds = Vec::with_capacity(populations.len());
    for pop in populations.iter() {
        seeds.push((0..pop.len()).map(|_| rng.random::<u64>()).collect_vec());
    }

    let changed = populations
        .iter_mut()
        .zip(seeds)
        .map(|(pop, pop_seeds)| {
            pop.par_iter_mut()
                .zip(pop_seeds)
                .map(|(chromosome, seed)| {
                    let mut ind_rng = SmallRng::seed_from_u64(seed);
                    shake_chromosome(chromosome, decoder, probability, &mut ind_rng)
                })
                .collect::<Vec<bool>>()
        })
        .collect_vec();

    ShakeReport {
        probability,
        changed,
    }
}

fn sample_probability(p_range: RangeInclusive<f64>, rng: &mut impl Rng) -> f64 {
    let (min, max) = p_range.into_inner();
    assert!(
        0.0 <= min && min <= max && max <= 1.0,
        "invalid shake probability range: [{min}, {max}]"
    );
    rng.random_range(min..=max)
}
