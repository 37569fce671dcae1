//! Report data types.

use serde::{Deserialize, Serialize};

use culprit_minimizer::StrategyKind;

use crate::error::ReportError;
use crate::summary::GuessSummary;

/// Guess statistics for one strategy at one universe size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    /// The strategy measured.
    pub strategy: StrategyKind,
    /// Guess counts across trials.
    pub summary: GuessSummary,
}

/// Results for one universe size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeReport {
    /// Number of items in the universe.
    pub universe_size: usize,
    /// Trials run per strategy.
    pub trials: usize,
    /// Bisector guesses when nothing is hidden.
    pub empty_hidden_guesses: usize,
    /// Bisector guesses when everything is hidden.
    pub full_hidden_guesses: usize,
    /// Per-strategy statistics, in the order the strategies were run.
    pub strategies: Vec<StrategyReport>,
}

impl SizeReport {
    /// Start a report for `universe_size` items.
    pub fn new(universe_size: usize, trials: usize) -> Self {
        Self {
            universe_size,
            trials,
            empty_hidden_guesses: 0,
            full_hidden_guesses: 0,
            strategies: Vec::new(),
        }
    }

    /// Record the Bisector boundary runs.
    pub fn with_boundaries(mut self, empty: usize, full: usize) -> Self {
        self.empty_hidden_guesses = empty;
        self.full_hidden_guesses = full;
        self
    }

    /// Summarize and append one strategy's guess counts.
    pub fn push_samples(
        &mut self,
        strategy: StrategyKind,
        samples: &[usize],
    ) -> Result<(), ReportError> {
        self.strategies.push(StrategyReport {
            strategy,
            summary: GuessSummary::from_samples(samples)?,
        });
        Ok(())
    }

    /// Look up one strategy's statistics.
    pub fn strategy(&self, kind: StrategyKind) -> Option<&GuessSummary> {
        self.strategies
            .iter()
            .find(|report| report.strategy == kind)
            .map(|report| &report.summary)
    }
}

/// A complete comparison run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// Base seed the trials were derived from.
    pub seed: u64,
    /// Probability each item was hidden.
    pub probability: f64,
    /// One entry per universe size, smallest first.
    pub sizes: Vec<SizeReport>,
}

impl BenchReport {
    /// Create an empty report.
    pub fn new(seed: u64, probability: f64) -> Self {
        Self {
            seed,
            probability,
            sizes: Vec::new(),
        }
    }
}
