use std::time::{Duration, Instant};

use itertools::{Itertools, izip};
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;
use wlsp::random_key::{Chromosome, Decoder, par_shake_populations};
use wlsp::util::FPA;

use crate::config::BrkgaConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub chromosome: Chromosome,
    pub fitness: f64,
}

/// Biased random-key genetic algorithm evolving several independent populations.
///
/// Every population is kept sorted by ascending fitness, so its elites are always in front.
/// Periodically, the best individuals are exchanged among populations.
/// When no improvement was found for `stagnation_limit` generations, all populations are shaken.
pub struct Brkga<'a, D: Decoder> {
    decoder: &'a D,
    config: BrkgaConfig,
    chromosomes: Vec<Vec<Chromosome>>,
    fitness: Vec<Vec<f64>>,
    best: Individual,
    pub generation: usize,
    pub n_evaluations: usize,
    pub n_shakes: usize,
}

impl<'a, D: Decoder> Brkga<'a, D> {
    /// Creates the initial populations.
    /// The `seeds` are distributed round-robin over the populations, the remainder of every population is random.
    pub fn new(
        decoder: &'a D,
        config: BrkgaConfig,
        seeds: impl IntoIterator<Item = Chromosome>,
        rng: &mut impl Rng,
    ) -> Self {
        assert!(config.population_size >= 2 && config.n_populations >= 1);
        let n_genes = decoder.chromosome_len();

        let mut chromosomes = vec![Vec::with_capacity(config.population_size); config.n_populations];
        for (i, seed) in seeds.into_iter().enumerate() {
            assert_eq!(seed.len(), n_genes, "seed chromosome has wrong length");
            let pop = &mut chromosomes[i % config.n_populations];
            if pop.len() < config.population_size {
                pop.push(seed);
            }
        }
        for pop in chromosomes.iter_mut() {
            while pop.len() < config.population_size {
                pop.push(Chromosome::random(n_genes, rng));
            }
        }

        let mut brkga = Self {
            decoder,
            config,
            chromosomes: vec![],
            fitness: vec![],
            best: Individual {
                chromosome: Chromosome::default(),
                fitness: f64::INFINITY,
            },
            generation: 0,
            n_evaluations: 0,
            n_shakes: 0,
        };

        for pop in chromosomes {
            let fitness = brkga.evaluate(&pop);
            let (pop, fitness) = sorted_by_fitness(pop, fitness);
            brkga.chromosomes.push(pop);
            brkga.fitness.push(fitness);
        }
        brkga.best = Individual {
            chromosome: brkga.chromosomes[0][0].clone(),
            fitness: brkga.fitness[0][0],
        };
        brkga.update_best();

        brkga
    }

    /// Evolves the populations until `max_generations` is reached or the time limit expires.
    /// Returns the best individual ever encountered.
    pub fn run(&mut self, rng: &mut impl Rng) -> Individual {
        let start = Instant::now();
        let time_limit = self.config.time_limit_secs.map(Duration::from_secs_f64);
        let mut stagnation = 0;

        while self.generation < self.config.max_generations
            && time_limit.is_none_or(|limit| start.elapsed() < limit)
        {
            self.generation += 1;
            self.evolve(rng);

            if self.config.n_populations > 1
                && self.config.exchange_interval > 0
                && self.generation % self.config.exchange_interval == 0
            {
                self.exchange_elites();
            }

            match self.update_best() {
                true => {
                    stagnation = 0;
                    info!(
                        "[RKGA] gen {}: improved cost to {:.3}",
                        self.generation, self.best.fitness
                    );
                }
                false => stagnation += 1,
            }

            if stagnation >= self.config.stagnation_limit {
                self.shake(rng);
                if self.update_best() {
                    info!(
                        "[RKGA] gen {}: shaking improved cost to {:.3}",
                        self.generation, self.best.fitness
                    );
                }
                stagnation = 0;
            }
        }

        info!(
            "[RKGA] evolution stopped after {} generations ({} shakes), best cost: {:.3}",
            self.generation, self.n_shakes, self.best.fitness
        );
        self.best.clone()
    }

    /// Replaces every population by the next generation: its elites, fresh mutants and
    /// offspring of an elite and a non-elite parent.
    pub fn evolve(&mut self, rng: &mut impl Rng) {
        let pop_size = self.config.population_size;
        let n_elites = self.config.n_elites();
        let n_mutants = self.config.n_mutants();
        let n_genes = self.decoder.chromosome_len();

        for p in 0..self.config.n_populations {
            let pop = &self.chromosomes[p];
            let mut newcomers = Vec::with_capacity(pop_size - n_elites);
            for _ in 0..n_mutants {
                newcomers.push(Chromosome::random(n_genes, rng));
            }
            while n_elites + newcomers.len() < pop_size {
                let elite = &pop[rng.random_range(0..n_elites)];
                let non_elite = &pop[rng.random_range(n_elites..pop_size)];
                newcomers.push(crossover(elite, non_elite, self.config.elite_bias, rng));
            }
            let newcomer_fitness = self.evaluate(&newcomers);

            let chromosomes = self.chromosomes[p][..n_elites]
                .iter()
                .cloned()
                .chain(newcomers)
                .collect_vec();
            let fitness = self.fitness[p][..n_elites]
                .iter()
                .copied()
                .chain(newcomer_fitness)
                .collect_vec();

            (self.chromosomes[p], self.fitness[p]) = sorted_by_fitness(chromosomes, fitness);
        }
    }

    /// Every population receives the `n_exchanged` best individuals of every other population,
    /// replacing its worst individuals.
    pub fn exchange_elites(&mut self) {
        let pop_size = self.config.population_size;
        let n_migrants = self.config.n_exchanged.min(pop_size);

        let migrants = (0..self.config.n_populations)
            .map(|p| {
                izip!(&self.chromosomes[p], &self.fitness[p])
                    .take(n_migrants)
                    .map(|(c, f)| (c.clone(), *f))
                    .collect_vec()
            })
            .collect_vec();

        for p in 0..self.config.n_populations {
            let incoming = migrants
                .iter()
                .enumerate()
                .filter(|(q, _)| *q != p)
                .flat_map(|(_, m)| m.iter().cloned())
                .take(pop_size - 1)
                .collect_vec();
            let n_kept = pop_size - incoming.len();

            let (incoming_chromosomes, incoming_fitness): (Vec<_>, Vec<_>) =
                incoming.into_iter().unzip();
            let chromosomes = self.chromosomes[p][..n_kept]
                .iter()
                .cloned()
                .chain(incoming_chromosomes)
                .collect_vec();
            let fitness = self.fitness[p][..n_kept]
                .iter()
                .copied()
                .chain(incoming_fitness)
                .collect_vec();

            (self.chromosomes[p], self.fitness[p]) = sorted_by_fitness(chromosomes, fitness);
        }
        debug!("[RKGA] gen {}: exchanged elites", self.generation);
    }

    /// Shakes all populations and re-evaluates the individuals that were modified.
    pub fn shake(&mut self, rng: &mut impl Rng) {
        let (p_min, p_max) = self.config.shake_prob_range;
        let report = par_shake_populations(&mut self.chromosomes, self.decoder, p_min..=p_max, rng);
        self.n_shakes += 1;

        for p in 0..self.config.n_populations {
            let changed_ids = report.changed[p].iter().positions(|c| *c).collect_vec();
            let changed = changed_ids
                .iter()
                .map(|&i| self.chromosomes[p][i].clone())
                .collect_vec();
            for (i, f) in izip!(changed_ids, self.evaluate(&changed)) {
                self.fitness[p][i] = f;
            }
            let chromosomes = std::mem::take(&mut self.chromosomes[p]);
            let fitness = std::mem::take(&mut self.fitness[p]);
            (self.chromosomes[p], self.fitness[p]) = sorted_by_fitness(chromosomes, fitness);
        }

        debug!(
            "[RKGA] gen {}: shook populations with p = {:.3}, {} individuals changed",
            self.generation,
            report.probability,
            report.n_changed()
        );
    }

    pub fn best(&self) -> &Individual {
        &self.best
    }

    /// Individuals of population `p`, sorted by ascending fitness
    pub fn population(&self, p: usize) -> impl Iterator<Item = (&Chromosome, f64)> {
        izip!(&self.chromosomes[p], self.fitness[p].iter().copied())
    }

    /// Evaluates the chromosomes in parallel.
    fn evaluate(&mut self, chromosomes: &[Chromosome]) -> Vec<f64> {
        self.n_evaluations += chromosomes.len();
        let decoder = self.decoder;
        chromosomes
            .par_iter()
            .map(|c| decoder.fitness(c))
            .collect()
    }

    /// Returns whether a population holds an individual strictly better than the current best.
    fn update_best(&mut self) -> bool {
        let mut improved = false;
        for (pop, fitness) in izip!(&self.chromosomes, &self.fitness) {
            if FPA(fitness[0]) < FPA(self.best.fitness) {
                self.best = Individual {
                    chromosome: pop[0].clone(),
                    fitness: fitness[0],
                };
                improved = true;
            }
        }
        improved
    }
}

/// Offspring inherits every gene from the elite parent with probability `elite_bias`.
pub fn crossover(
    elite: &Chromosome,
    non_elite: &Chromosome,
    elite_bias: f64,
    rng: &mut impl Rng,
) -> Chromosome {
    debug_assert_eq!(elite.len(), non_elite.len());
    Chromosome(
        izip!(elite.keys(), non_elite.keys())
            .map(|(e, n)| match rng.random_bool(elite_bias) {
                true => *e,
                false => *n,
            })
            .collect(),
    )
}

fn sorted_by_fitness(
    chromosomes: Vec<Chromosome>,
    fitness: Vec<f64>,
) -> (Vec<Chromosome>, Vec<f64>) {
    izip!(chromosomes, fitness)
        .sorted_by(|(_, a), (_, b)| a.total_cmp(b))
        .unzip()
}
