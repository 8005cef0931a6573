use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use wlsp::entities::LevelOrder;
use wlsp::io::svg::SvgDrawOptions;

/// Configuration for the RKGA optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RkgaConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of samples of the randomized first-fit (decreasing density) heuristic
    pub ff_samples: usize,
    /// Standard deviation of the noise added to the item weights, relative to the standard deviation of the weights
    pub ff_deviations: f64,
    /// Number of samples of the randomized best-fit (increasing height) heuristic
    pub bf_samples: usize,
    /// Standard deviation of the noise added to the item heights, relative to the standard deviation of the heights
    pub bf_deviations: f64,
    /// Order of the items within the levels of the final solution
    #[serde(default)]
    pub level_order: LevelOrder,
    /// Configuration of the genetic algorithm. If undefined, only the constructive samples are used
    pub brkga: Option<BrkgaConfig>,
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl RkgaConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.ff_deviations.is_finite() && self.ff_deviations >= 0.0,
            "ff_deviations should be finite and non-negative"
        );
        ensure!(
            self.bf_deviations.is_finite() && self.bf_deviations >= 0.0,
            "bf_deviations should be finite and non-negative"
        );
        if let Some(brkga) = &self.brkga {
            brkga.validate()?;
        }
        Ok(())
    }
}

impl Default for RkgaConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            ff_samples: 500,
            ff_deviations: 0.25,
            bf_samples: 500,
            bf_deviations: 0.25,
            level_order: LevelOrder::AsPlaced,
            brkga: Some(BrkgaConfig::default()),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// Configuration of the biased random-key genetic algorithm
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BrkgaConfig {
    /// Number of individuals per population
    pub population_size: usize,
    /// Number of independent populations evolved in parallel
    pub n_populations: usize,
    /// Fraction of every population kept as elite
    pub elite_fraction: f64,
    /// Fraction of every population replaced by random individuals each generation
    pub mutant_fraction: f64,
    /// Probability of an offspring inheriting a gene from its elite parent
    pub elite_bias: f64,
    pub max_generations: usize,
    /// Wall clock limit in seconds, if undefined only `max_generations` applies
    pub time_limit_secs: Option<f64>,
    /// Number of generations without improvement after which all populations are shaken
    pub stagnation_limit: usize,
    /// Range from which the gene replacement probability of a shake is drawn
    pub shake_prob_range: (f64, f64),
    /// Number of generations between exchanges of elite individuals among populations
    pub exchange_interval: usize,
    /// Number of best individuals each population sends to the others
    pub n_exchanged: usize,
}

impl BrkgaConfig {
    pub fn n_elites(&self) -> usize {
        ((self.elite_fraction * self.population_size as f64).ceil() as usize).max(1)
    }

    pub fn n_mutants(&self) -> usize {
        (self.mutant_fraction * self.population_size as f64).floor() as usize
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.population_size >= 2, "population_size should be at least 2");
        ensure!(self.n_populations >= 1, "n_populations should be at least 1");
        ensure!(
            0.0 < self.elite_fraction && self.elite_fraction < 1.0,
            "elite_fraction should be in (0, 1)"
        );
        ensure!(
            0.0 <= self.mutant_fraction && self.mutant_fraction < 1.0,
            "mutant_fraction should be in [0, 1)"
        );
        ensure!(
            self.n_elites() + self.n_mutants() < self.population_size,
            "elites and mutants leave no room for offspring"
        );
        ensure!(
            (0.5..=1.0).contains(&self.elite_bias),
            "elite_bias should be in [0.5, 1]"
        );
        let (p_min, p_max) = self.shake_prob_range;
        ensure!(
            0.0 <= p_min && p_min <= p_max && p_max <= 1.0,
            "shake_prob_range should satisfy 0 <= min <= max <= 1"
        );
        if let Some(limit) = self.time_limit_secs {
            ensure!(limit.is_finite() && limit >= 0.0, "time_limit_secs should be non-negative");
        }
        Ok(())
    }
}

impl Default for BrkgaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            n_populations: 3,
            elite_fraction: 0.15,
            mutant_fraction: 0.15,
            elite_bias: 0.7,
            max_generations: 1000,
            time_limit_secs: Some(60.0),
            stagnation_limit: 50,
            shake_prob_range: (0.05, 0.2),
            exchange_interval: 100,
            n_exchanged: 2,
        }
    }
}
