//! Bisection with short-circuits.
//!
//! Before searching both halves of a split, [`GreedyBisector`] asks whether
//! one half alone (plus the forced context) already satisfies the oracle.
//! If it does, the other half is dropped from the search entirely. Only
//! when neither half suffices does it fall back to the cross-dependent
//! recursion of [`Bisector`](crate::Bisector).
//!
//! Every recursive call below the entry point holds the invariant
//! `guess(targets ∪ forced)` and `!guess(forced)`, so the forced-only check
//! is issued once, on entry.

use tracing::{debug, trace};

use culprit_core::{ContainmentOracle, Item};

use crate::error::MinimizerError;
use crate::result::{MinimizationStats, MinimizedSet};
use crate::session::Session;
use crate::traits::{Minimizer, MinimizerConfig};

/// Bisection minimizer that short-circuits when one half suffices.
pub struct GreedyBisector {
    config: MinimizerConfig,
}

impl GreedyBisector {
    /// Create a greedy bisector with the given configuration.
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    /// Create a greedy bisector with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MinimizerConfig::default())
    }

    /// Minimize `targets` given items already committed in `forced`.
    ///
    /// Same contract as [`Bisector::minimize_from`](crate::Bisector::minimize_from).
    pub fn minimize_from<T: Item>(
        &self,
        oracle: &mut dyn ContainmentOracle<T>,
        targets: &[T],
        forced: &[T],
    ) -> Result<MinimizedSet<T>, MinimizerError> {
        let stats = MinimizationStats::new(<Self as Minimizer<T>>::name(self), targets.len());
        let mut session = Session::new(oracle, &self.config, stats)?;

        let forced: Vec<&T> = forced.iter().collect();
        let all: Vec<&T> = targets.iter().collect();
        session.check_precondition(&all, &forced)?;

        debug!(
            targets = targets.len(),
            forced = forced.len(),
            "Starting greedy bisection"
        );

        let found = if targets.is_empty() || session.guess(&forced)? {
            Vec::new()
        } else {
            narrow(&mut session, targets, &forced, 0)?
        };
        let result = session.finish(found.into_iter().cloned().collect());

        debug!(
            targets = targets.len(),
            result_size = result.len(),
            guesses = result.guesses(),
            short_circuits = result.stats.short_circuits,
            fallbacks = result.stats.fallbacks,
            duration = ?result.stats.duration,
            "Greedy bisection complete"
        );

        Ok(result)
    }
}

/// Requires `targets` non-empty, `targets ∪ forced` satisfying and
/// `forced` alone failing.
fn narrow<'u, T>(
    session: &mut Session<'_, T>,
    targets: &'u [T],
    forced: &[&'u T],
    depth: usize,
) -> Result<Vec<&'u T>, MinimizerError> {
    session.stats.record_depth(depth);

    if let [only] = targets {
        return Ok(vec![only]);
    }

    let (left, right) = targets.split_at(targets.len() / 2);

    let with_left: Vec<&T> = forced.iter().copied().chain(left).collect();
    if session.guess(&with_left)? {
        session.stats.record_short_circuit();
        trace!(depth, kept = left.len(), dropped = right.len(), "Left half suffices");
        return narrow(session, left, forced, depth + 1);
    }

    let with_right: Vec<&T> = forced.iter().copied().chain(right).collect();
    if session.guess(&with_right)? {
        session.stats.record_short_circuit();
        trace!(depth, kept = right.len(), dropped = left.len(), "Right half suffices");
        return narrow(session, right, forced, depth + 1);
    }

    session.stats.record_fallback();
    trace!(depth, targets = targets.len(), "Both halves needed");

    // `forced ∪ right` failed above, so the left half is needed.
    let left_context: Vec<&T> = right.iter().chain(forced.iter().copied()).collect();
    let mut found = narrow(session, left, &left_context, depth + 1)?;

    // `forced ∪ left` failed above, and `found` is a subset of left.
    let right_context: Vec<&T> = forced.iter().chain(&found).copied().collect();
    let right_found = narrow(session, right, &right_context, depth + 1)?;

    found.extend(right_found);
    Ok(found)
}

impl<T: Item> Minimizer<T> for GreedyBisector {
    fn minimize(
        &self,
        oracle: &mut dyn ContainmentOracle<T>,
    ) -> Result<MinimizedSet<T>, MinimizerError> {
        let universe = oracle.universe().to_vec();
        self.minimize_from(oracle, &universe, &[])
    }

    fn name(&self) -> &str {
        "greedy"
    }

    fn description(&self) -> &str {
        "Recursive bisection that drops a half whenever the other suffices alone"
    }
}
