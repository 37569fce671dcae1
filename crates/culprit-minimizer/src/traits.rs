//! Core traits and configuration for hidden-set minimization.

use serde::{Deserialize, Serialize};

use culprit_core::{ContainmentOracle, Item};

use crate::error::MinimizerError;
use crate::result::MinimizedSet;

/// Configuration shared by every strategy.
///
/// The defaults add no guesses of their own, so a default-configured
/// strategy issues exactly the queries its algorithm describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimizerConfig {
    /// Maximum number of guesses one minimization may issue.
    pub max_guesses: Option<usize>,

    /// Spend one extra guess on entry to confirm the starting query
    /// satisfies the oracle.
    pub check_precondition: bool,

    /// Emit a trace event for every guess.
    pub verbose: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            max_guesses: None,
            check_precondition: false,
            verbose: false,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of guesses per minimization.
    pub fn with_max_guesses(mut self, max: usize) -> Self {
        self.max_guesses = Some(max);
        self
    }

    /// Enable or disable the entry precondition check.
    pub fn with_check_precondition(mut self, enabled: bool) -> Self {
        self.check_precondition = enabled;
        self
    }

    /// Enable or disable per-guess trace logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), MinimizerError> {
        if self.max_guesses == Some(0) {
            return Err(MinimizerError::InvalidConfig(
                "max_guesses must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A strategy that recovers an oracle's hidden set.
///
/// Every implementation starts from the oracle's whole universe, which
/// always satisfies the oracle, and must return a set equal to the hidden
/// set. Strategies differ only in how many guesses they spend.
///
/// # Example
///
/// ```rust
/// use culprit_core::Oracle;
/// use culprit_minimizer::{Bisector, Minimizer, MinimizerConfig};
///
/// let mut oracle = Oracle::new(vec![1, 2, 3, 4], vec![3])?;
/// let result = Bisector::new(MinimizerConfig::default()).minimize(&mut oracle)?;
///
/// assert_eq!(result.items, vec![3]);
/// oracle.verify(&result.items)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Minimizer<T: Item>: Send + Sync {
    /// Recover the hidden set of `oracle`.
    ///
    /// # Errors
    ///
    /// * `MinimizerError::GuessBudgetExhausted` - `max_guesses` was reached.
    /// * `MinimizerError::PreconditionFailed` - the universe does not satisfy
    ///   the oracle (only reported when `check_precondition` is set).
    /// * `MinimizerError::InvalidConfig` - the configuration is invalid.
    fn minimize(
        &self,
        oracle: &mut dyn ContainmentOracle<T>,
    ) -> Result<MinimizedSet<T>, MinimizerError>;

    /// Get the name of this minimizer for logging purposes.
    fn name(&self) -> &str;

    /// Get a description of the minimization strategy.
    fn description(&self) -> &str {
        "No description available"
    }
}
