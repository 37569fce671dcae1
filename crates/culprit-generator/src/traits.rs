//! Core generator trait and associated types

use culprit_core::{Item, Oracle, ValidationError};

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that can occur during generation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// The generated hidden set was rejected by the oracle
    #[error("invalid trial: {0}")]
    Validation(#[from] ValidationError),

    /// Inclusion probability outside `[0, 1]`
    #[error("configuration error: probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

/// Produces hidden sets for trials.
///
/// Generators must be deterministic given the same seed, so a failing
/// trial can be replayed by resetting to the seed it ran with.
pub trait HiddenSetGenerator<T: Item>: Send {
    /// Draw a hidden subset of `universe`.
    fn generate(&mut self, universe: &[T]) -> Vec<T>;

    /// Reinitialize the random state.
    fn reset(&mut self, seed: u64);

    /// Get the name of this generator for debugging/logging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Draw a hidden subset and wrap it in a fresh oracle.
    fn oracle(&mut self, universe: Vec<T>) -> GeneratorResult<Oracle<T>> {
        let hidden = self.generate(&universe);
        Ok(Oracle::new(universe, hidden)?)
    }
}
