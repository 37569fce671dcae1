//! Error types for the minimizer module.

use thiserror::Error;

/// Errors that can occur while recovering a hidden set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinimizerError {
    /// The configured guess budget ran out before the search finished.
    #[error("Guess budget of {0} exhausted before minimization finished")]
    GuessBudgetExhausted(usize),

    /// The starting query does not satisfy the oracle, so there is nothing
    /// to minimize.
    #[error("Starting query ({targets} targets, {forced} forced) does not satisfy the oracle")]
    PreconditionFailed { targets: usize, forced: usize },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A strategy name did not match any known strategy.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type alias for minimizer operations.
pub type Result<T> = std::result::Result<T, MinimizerError>;
