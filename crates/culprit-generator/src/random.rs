//! Coin-flip hidden-set generator

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use culprit_core::Item;

use crate::traits::{GeneratorError, GeneratorResult, HiddenSetGenerator};

/// Hides each universe item independently with a fixed probability, then
/// shuffles the hidden items so their order carries no information.
#[derive(Debug, Clone)]
pub struct CoinFlipGenerator {
    rng: ChaCha8Rng,
    probability: f64,
    shuffle: bool,
}

impl CoinFlipGenerator {
    /// Fair coin, shuffled output.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            probability: 0.5,
            shuffle: true,
        }
    }

    /// Set the per-item inclusion probability.
    pub fn with_probability(mut self, probability: f64) -> GeneratorResult<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneratorError::InvalidProbability(probability));
        }
        self.probability = probability;
        Ok(self)
    }

    /// Enable or disable shuffling of the hidden items.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// The per-item inclusion probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<T: Item> HiddenSetGenerator<T> for CoinFlipGenerator {
    fn generate(&mut self, universe: &[T]) -> Vec<T> {
        let mut hidden: Vec<T> = universe
            .iter()
            .filter(|_| self.rng.gen_bool(self.probability))
            .cloned()
            .collect();
        if self.shuffle {
            hidden.shuffle(&mut self.rng);
        }
        trace!(
            universe_size = universe.len(),
            hidden_size = hidden.len(),
            "Generated hidden set"
        );
        hidden
    }

    fn reset(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn name(&self) -> &str {
        "coin-flip"
    }
}
