//! Result types for minimization runs.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The outcome of a successful minimization.
#[derive(Debug, Clone)]
pub struct MinimizedSet<T> {
    /// The recovered items, in the order they appear among the targets.
    pub items: Vec<T>,

    /// Statistics about the run.
    pub stats: MinimizationStats,
}

impl<T> MinimizedSet<T> {
    /// Create a new result.
    pub fn new(items: Vec<T>, stats: MinimizationStats) -> Self {
        Self { items, stats }
    }

    /// Number of recovered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was recovered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Guesses issued during the run.
    pub fn guesses(&self) -> usize {
        self.stats.guesses
    }

    /// Consume the result, keeping only the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: fmt::Debug> fmt::Display for MinimizedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MinimizedSet {{ {:?} from {} items, {} guesses",
            self.items, self.stats.target_size, self.stats.guesses
        )?;
        if let Some(duration) = self.stats.duration {
            write!(f, ", {:?}", duration)?;
        }
        write!(f, " }}")
    }
}

/// Statistics about a minimization run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimizationStats {
    /// Name of the strategy that produced the result.
    pub strategy: String,

    /// Number of targets the run started from.
    pub target_size: usize,

    /// Number of items recovered.
    pub result_size: usize,

    /// Guesses issued by this run.
    pub guesses: usize,

    /// Items the linear strategies proved unnecessary.
    pub removals: usize,

    /// Splits where one half alone satisfied the oracle.
    pub short_circuits: usize,

    /// Splits where both halves had to be searched.
    pub fallbacks: usize,

    /// Deepest recursion level reached.
    pub max_depth: usize,

    /// Time taken.
    #[serde(skip)]
    pub duration: Option<Duration>,
}

impl MinimizationStats {
    /// Create stats for a run of `strategy` over `target_size` targets.
    pub fn new(strategy: impl Into<String>, target_size: usize) -> Self {
        Self {
            strategy: strategy.into(),
            target_size,
            ..Default::default()
        }
    }

    /// Record an item proven unnecessary.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Record a split resolved by one half alone.
    pub fn record_short_circuit(&mut self) {
        self.short_circuits += 1;
    }

    /// Record a split that searched both halves.
    pub fn record_fallback(&mut self) {
        self.fallbacks += 1;
    }

    /// Record reaching recursion level `depth`.
    pub fn record_depth(&mut self, depth: usize) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Fraction of splits that short-circuited.
    pub fn short_circuit_rate(&self) -> f64 {
        let splits = self.short_circuits + self.fallbacks;
        if splits == 0 {
            0.0
        } else {
            self.short_circuits as f64 / splits as f64
        }
    }
}

impl fmt::Display for MinimizationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ {}: {}/{} items kept, {} guesses",
            self.strategy, self.result_size, self.target_size, self.guesses
        )?;
        if self.short_circuits + self.fallbacks > 0 {
            write!(
                f,
                ", {:.1}% short-circuited",
                self.short_circuit_rate() * 100.0
            )?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimized_set_accessors() {
        let mut stats = MinimizationStats::new("bisect", 8);
        stats.guesses = 5;
        stats.result_size = 2;
        let result = MinimizedSet::new(vec!['a', 'b'], stats);

        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.guesses(), 5);
        assert_eq!(result.into_items(), vec!['a', 'b']);
    }

    #[test]
    fn test_short_circuit_rate() {
        let mut stats = MinimizationStats::new("greedy", 16);
        assert_eq!(stats.short_circuit_rate(), 0.0);

        stats.record_short_circuit();
        stats.record_short_circuit();
        stats.record_short_circuit();
        stats.record_fallback();
        assert!((stats.short_circuit_rate() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_record_depth_keeps_maximum() {
        let mut stats = MinimizationStats::default();
        stats.record_depth(3);
        stats.record_depth(1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = MinimizationStats::new("greedy", 4);
        stats.result_size = 1;
        stats.guesses = 3;
        stats.record_short_circuit();
        assert_eq!(
            stats.to_string(),
            "Stats { greedy: 1/4 items kept, 3 guesses, 100.0% short-circuited }"
        );
    }
}
