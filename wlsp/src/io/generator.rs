use crate::entities::{Instance, Rect};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ranges from which the properties of random instances are drawn uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of items (inclusive range)
    pub n_items: (usize, usize),
    pub recipient_length: (f64, f64),
    /// Range of both length and height of the items
    pub dimension: (f64, f64),
    pub weight: (f64, f64),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_items: (300, 500),
            recipient_length: (30.0, 50.0),
            dimension: (3.0, 10.0),
            weight: (0.0, 10.0),
        }
    }
}

/// Generates a random instance. Item lengths are capped at the recipient length,
/// so every item fits on an empty level.
pub fn generate_instance(rng: &mut impl Rng, config: &GeneratorConfig) -> Instance {
    let n_items = rng.random_range(config.n_items.0..=config.n_items.1);
    let recipient_length = sample(rng, config.recipient_length);

    let rects = (0..n_items)
        .map(|_| {
            let length = f64::min(sample(rng, config.dimension), recipient_length);
            let height = sample(rng, config.dimension);
            let weight = sample(rng, config.weight);
            Rect::new(length, height, weight)
        })
        .collect();

    Instance::new(rects, recipient_length)
}

fn sample(rng: &mut impl Rng, (min, max): (f64, f64)) -> f64 {
    match min < max {
        true => rng.random_range(min..max),
        false => min,
    }
}
