use crate::entities::{Instance, Solution};
use crate::eval;
use crate::heuristics::next_fit;
use crate::random_key::Chromosome;

/// Maps random-key chromosomes to solutions and their fitness (lower is better).
///
/// Decoding must not mutate shared state: a search procedure is allowed to evaluate
/// distinct chromosomes concurrently.
pub trait Decoder: Sync {
    /// Number of keys a chromosome must have
    fn chromosome_len(&self) -> usize;

    fn decode(&self, chromosome: &Chromosome) -> Solution;

    fn fitness(&self, chromosome: &Chromosome) -> f64;
}

/// Decodes a chromosome by running [`next_fit`] on the permutation it encodes.
///
/// `decode(encode(s))` reproduces the level membership of `s` if `s` was produced by [`next_fit`].
/// No such guarantee exists for solutions of the other heuristics.
#[derive(Debug, Clone)]
pub struct NextFitDecoder<'a> {
    pub instance: &'a Instance,
}

impl<'a> NextFitDecoder<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn encode(&self, solution: &Solution) -> Chromosome {
        Chromosome::encode(solution, self.instance.n_items())
    }
}

impl Decoder for NextFitDecoder<'_> {
    fn chromosome_len(&self) -> usize {
        self.instance.n_items()
    }

    fn decode(&self, chromosome: &Chromosome) -> Solution {
        debug_assert_eq!(chromosome.len(), self.chromosome_len());
        next_fit(self.instance, &chromosome.permutation())
    }

    fn fitness(&self, chromosome: &Chromosome) -> f64 {
        eval::cost(self.instance, &self.decode(chromosome))
    }
}
