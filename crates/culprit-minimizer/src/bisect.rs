//! Divide-and-conquer bisection minimizer.
//!
//! Splits the targets in half and minimizes each half in the context of
//! everything that may still be needed: the left half is minimized with the
//! whole right half forced in, then the right half with only the left
//! half's result forced in. Each leaf is kept only when the forced context
//! alone fails the oracle, which under exact containment happens only for
//! hidden items.

use tracing::debug;

use culprit_core::{ContainmentOracle, Item};

use crate::error::MinimizerError;
use crate::result::{MinimizationStats, MinimizedSet};
use crate::session::Session;
use crate::traits::{Minimizer, MinimizerConfig};

/// Bisection minimizer without short-circuits.
pub struct Bisector {
    config: MinimizerConfig,
}

impl Bisector {
    /// Create a bisector with the given configuration.
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    /// Create a bisector with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MinimizerConfig::default())
    }

    /// Minimize `targets` given items already committed in `forced`.
    ///
    /// Returns the smallest subset of `targets` that, together with
    /// `forced`, satisfies the oracle. Assumes `targets ∪ forced` already
    /// does; set `check_precondition` to have that confirmed.
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
            "Starting bisection"
        );

        let found = bisect(&mut session, targets, &forced, 0)?;
        let result = session.finish(found.into_iter().cloned().collect());

        debug!(
            targets = targets.len(),
            result_size = result.len(),
            guesses = result.guesses(),
            max_depth = result.stats.max_depth,
            duration = ?result.stats.duration,
            "Bisection complete"
        );

        Ok(result)
    }
}

fn bisect<'u, T>(
    session: &mut Session<'_, T>,
    targets: &'u [T],
    forced: &[&'u T],
    depth: usize,
) -> Result<Vec<&'u T>, MinimizerError> {
    session.stats.record_depth(depth);

    if targets.is_empty() || session.guess(forced)? {
        return Ok(Vec::new());
    }
    // The forced context alone failed, so a lone target is needed.
    if let [only] = targets {
        return Ok(vec![only]);
    }

    let (left, right) = targets.split_at(targets.len() / 2);

    let left_context: Vec<&T> = right.iter().chain(forced.iter().copied()).collect();
    let mut found = bisect(session, left, &left_context, depth + 1)?;

    let right_context: Vec<&T> = forced.iter().chain(&found).copied().collect();
    let right_found = bisect(session, right, &right_context, depth + 1)?;

    found.extend(right_found);
    Ok(found)
}

impl<T: Item> Minimizer<T> for Bisector {
    fn minimize(
        &self,
        oracle: &mut dyn ContainmentOracle<T>,
    ) -> Result<MinimizedSet<T>, MinimizerError> {
        let universe = oracle.universe().to_vec();
        self.minimize_from(oracle, &universe, &[])
    }

    fn name(&self) -> &str {
        "bisect"
    }

    fn description(&self) -> &str {
        "Recursive bisection minimizing each half against its sibling's context"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use culprit_core::Oracle;

    fn letters(s: &str) -> Vec<String> {
        s.chars().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_recovers_every_hidden_set() {
        let bisector = Bisector::with_defaults();
        for n in 0..=7u32 {
            for mask in 0u32..(1 << n) {
                let universe: Vec<u32> = (0..n).collect();
                let hidden: Vec<u32> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
                let mut oracle = Oracle::new(universe, hidden.clone()).unwrap();

                let result = bisector.minimize(&mut oracle).unwrap();
                oracle.verify(&result.items).unwrap();
                assert_eq!(result.items, hidden, "n = {n}, mask = {mask:b}");
                if n > 0 {
                    assert!(oracle.guesses() >= 1);
                }
            }
        }
    }

    #[test]
    fn test_empty_universe_issues_no_guesses() {
        let mut oracle = Oracle::<u32>::new(vec![], vec![]).unwrap();
        let result = Bisector::with_defaults().minimize(&mut oracle).unwrap();
        assert!(result.is_empty());
        assert_eq!(oracle.guesses(), 0);
        assert_eq!(result.stats.guesses, 0);
    }

    #[test]
    fn test_empty_hidden_set_costs_one_guess() {
        let mut oracle = Oracle::new(letters("abcdefgh"), vec![]).unwrap();
        let result = Bisector::with_defaults().minimize(&mut oracle).unwrap();
        assert!(result.is_empty());
        assert_eq!(oracle.guesses(), 1);
    }

    #[test]
    fn test_singleton_universe_costs_one_guess() {
        let mut oracle = Oracle::new(letters("a"), letters("a")).unwrap();
        let result = Bisector::with_defaults().minimize(&mut oracle).unwrap();
        assert_eq!(result.items, letters("a"));
        assert_eq!(oracle.guesses(), 1);
    }

    #[test]
    fn test_guess_count_is_bounded() {
        // Full hidden sets are the worst case: every node is visited.
        let bisector = Bisector::with_defaults();
        for n in [2usize, 4, 8, 16, 32, 64] {
            let universe: Vec<usize> = (0..n).collect();
            let mut oracle = Oracle::new(universe.clone(), universe).unwrap();
            bisector.minimize(&mut oracle).unwrap();

            let log = (n as f64).log2().ceil() as usize;
            assert!(oracle.guesses() <= 2 * n * (log + 1), "n = {n}");
        }
    }

    #[test]
    fn test_full_hidden_set_visits_every_node() {
        // One guess per recursion node: 2n - 1 nodes for a full binary split.
        let universe: Vec<u8> = (0..8).collect();
        let mut oracle = Oracle::new(universe.clone(), universe).unwrap();
        let result = Bisector::with_defaults().minimize(&mut oracle).unwrap();
        assert_eq!(result.len(), 8);
        assert_eq!(oracle.guesses(), 15);
        assert_eq!(result.stats.max_depth, 3);
    }

    #[test]
    fn test_minimize_from_with_forced_context() {
        // "c" is supplied by the caller, so only "a" must be found.
        let mut oracle = Oracle::new(letters("abcd"), letters("ac")).unwrap();
        let result = Bisector::with_defaults()
            .minimize_from(&mut oracle, &letters("abd"), &letters("c"))
            .unwrap();
        assert_eq!(result.items, letters("a"));
    }

    #[test]
    fn test_minimize_from_nothing_needed() {
        let mut oracle = Oracle::new(letters("abcd"), letters("b")).unwrap();
        let result = Bisector::with_defaults()
            .minimize_from(&mut oracle, &letters("acd"), &letters("b"))
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(oracle.guesses(), 1);
    }

    #[test]
    fn test_precondition_check() {
        let mut oracle = Oracle::new(letters("abcd"), letters("d")).unwrap();
        let bisector = Bisector::new(MinimizerConfig::new().with_check_precondition(true));
        let err = bisector
            .minimize_from(&mut oracle, &letters("abc"), &[])
            .unwrap_err();
        assert_eq!(
            err,
            MinimizerError::PreconditionFailed {
                targets: 3,
                forced: 0
            }
        );
    }

    #[test]
    fn test_precondition_check_adds_one_guess() {
        let mut oracle = Oracle::new(letters("abcd"), vec![]).unwrap();
        let bisector = Bisector::new(MinimizerConfig::new().with_check_precondition(true));
        bisector.minimize(&mut oracle).unwrap();
        assert_eq!(oracle.guesses(), 2);
    }
}
