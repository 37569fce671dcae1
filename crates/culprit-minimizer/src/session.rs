//! Per-run bookkeeping shared by the strategies.
//!
//! A [`Session`] wraps the oracle for the duration of one minimization. All
//! guesses go through it so the guess budget and the per-run statistics are
//! enforced in one place.

use std::time::Instant;

use tracing::{trace, warn};

use culprit_core::ContainmentOracle;

use crate::error::MinimizerError;
use crate::result::{MinimizationStats, MinimizedSet};
use crate::traits::MinimizerConfig;

pub(crate) struct Session<'o, T> {
    oracle: &'o mut dyn ContainmentOracle<T>,
    config: &'o MinimizerConfig,
    baseline: usize,
    started: Instant,
    pub(crate) stats: MinimizationStats,
}

impl<'o, T> Session<'o, T> {
    pub(crate) fn new(
        oracle: &'o mut dyn ContainmentOracle<T>,
        config: &'o MinimizerConfig,
        stats: MinimizationStats,
    ) -> Result<Self, MinimizerError> {
        config.validate()?;
        let baseline = oracle.guesses();
        Ok(Self {
            oracle,
            config,
            baseline,
            started: Instant::now(),
            stats,
        })
    }

    /// Guesses issued since the session started.
    pub(crate) fn issued(&self) -> usize {
        self.oracle.guesses().saturating_sub(self.baseline)
    }

    pub(crate) fn guess(&mut self, query: &[&T]) -> Result<bool, MinimizerError> {
        if let Some(max) = self.config.max_guesses {
            if self.issued() >= max {
                warn!(
                    strategy = %self.stats.strategy,
                    max_guesses = max,
                    "Guess budget exhausted"
                );
                return Err(MinimizerError::GuessBudgetExhausted(max));
            }
        }

        let answer = self.oracle.guess(query);
        if self.config.verbose {
            trace!(
                strategy = %self.stats.strategy,
                query_size = query.len(),
                answer,
                guess = self.issued(),
                "Guess"
            );
        }
        Ok(answer)
    }

    /// Spend one guess confirming the starting query satisfies the oracle,
    /// if the configuration asks for it.
    pub(crate) fn check_precondition(
        &mut self,
        targets: &[&T],
        forced: &[&T],
    ) -> Result<(), MinimizerError> {
        if !self.config.check_precondition {
            return Ok(());
        }
        let query: Vec<&T> = targets.iter().chain(forced).copied().collect();
        if self.guess(&query)? {
            Ok(())
        } else {
            Err(MinimizerError::PreconditionFailed {
                targets: targets.len(),
                forced: forced.len(),
            })
        }
    }

    pub(crate) fn finish(mut self, items: Vec<T>) -> MinimizedSet<T> {
        self.stats.result_size = items.len();
        self.stats.guesses = self.issued();
        self.stats.duration = Some(self.started.elapsed());
        MinimizedSet::new(items, self.stats)
    }
}
