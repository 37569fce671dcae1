//! Linear elimination baseline.
//!
//! Walks the universe once and tries leaving out each item in turn. Under
//! a monotone containment oracle an item can be left out iff it is not
//! hidden, so one pass recovers the hidden set in exactly `|U|` guesses.

use serde::{Deserialize, Serialize};
use tracing::debug;

use culprit_core::{ContainmentOracle, Item};

use crate::error::MinimizerError;
use crate::result::{MinimizationStats, MinimizedSet};
use crate::session::Session;
use crate::traits::{Minimizer, MinimizerConfig};

/// How removal of each item is tested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EliminationMode {
    /// Test against the items retained so far; once an item is dropped it
    /// stays out of every later query. The retained set is correct after
    /// every step.
    #[default]
    Cumulative,

    /// Test each removal against the full universe and filter the removed
    /// items out at the end.
    Independent,
}

/// Baseline strategy issuing one guess per universe item.
pub struct LinearEliminator {
    config: MinimizerConfig,
    mode: EliminationMode,
}

impl LinearEliminator {
    /// Create a cumulative eliminator with the given configuration.
    pub fn new(config: MinimizerConfig) -> Self {
        Self {
            config,
            mode: EliminationMode::Cumulative,
        }
    }

    /// Create a cumulative eliminator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MinimizerConfig::default())
    }

    /// Select the elimination mode.
    pub fn with_mode(mut self, mode: EliminationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The configured elimination mode.
    pub fn mode(&self) -> EliminationMode {
        self.mode
    }

    fn eliminate<T: Item>(
        &self,
        session: &mut Session<'_, T>,
        universe: &[T],
    ) -> Result<Vec<T>, MinimizerError> {
        // `keep[i]` is whether universe[i] is part of the next query.
        let mut keep = vec![true; universe.len()];
        let mut removed = vec![false; universe.len()];

        for i in 0..universe.len() {
            keep[i] = false;
            let candidate: Vec<&T> = universe
                .iter()
                .zip(&keep)
                .filter(|(_, kept)| **kept)
                .map(|(item, _)| item)
                .collect();

            let droppable = session.guess(&candidate)?;
            if droppable {
                session.stats.record_removal();
                removed[i] = true;
            }

            keep[i] = match self.mode {
                EliminationMode::Cumulative => !droppable,
                EliminationMode::Independent => true,
            };
        }

        Ok(universe
            .iter()
            .zip(&removed)
            .filter(|(_, gone)| !**gone)
            .map(|(item, _)| item.clone())
            .collect())
    }
}

impl<T: Item> Minimizer<T> for LinearEliminator {
    fn minimize(
        &self,
        oracle: &mut dyn ContainmentOracle<T>,
    ) -> Result<MinimizedSet<T>, MinimizerError> {
        let universe = oracle.universe().to_vec();
        let stats = MinimizationStats::new(<Self as Minimizer<T>>::name(self), universe.len());
        let mut session = Session::new(oracle, &self.config, stats)?;

        let all: Vec<&T> = universe.iter().collect();
        session.check_precondition(&all, &[])?;

        debug!(
            universe_size = universe.len(),
            mode = ?self.mode,
            "Starting linear elimination"
        );

        let items = self.eliminate(&mut session, &universe)?;
        let result = session.finish(items);

        debug!(
            universe_size = universe.len(),
            result_size = result.len(),
            guesses = result.guesses(),
            duration = ?result.stats.duration,
            "Linear elimination complete"
        );

        Ok(result)
    }

    fn name(&self) -> &str {
        match self.mode {
            EliminationMode::Cumulative => "linear",
            EliminationMode::Independent => "linear-independent",
        }
    }

    fn description(&self) -> &str {
        match self.mode {
            EliminationMode::Cumulative => {
                "Drops each universe item in turn from a shrinking retained set"
            }
            EliminationMode::Independent => {
                "Tests each universe item's removal against the full universe"
            }
        }
    }
}
