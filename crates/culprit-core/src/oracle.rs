//! The containment oracle and the trait minimizers query it through.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;

use crate::error::{ValidationError, VerificationError};

/// Bounds every universe item must satisfy.
///
/// Items are compared by value and hashed when a query is evaluated; the
/// `Debug` form is used in error messages.
pub trait Item: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Item for T {}

/// A monotone containment predicate with an invocation counter.
///
/// Minimizers are written against this trait rather than [`Oracle`] so the
/// same strategy code can drive any predicate of the form "hidden ⊆ query".
/// Implementations must count every call to [`guess`](Self::guess).
pub trait ContainmentOracle<T> {
    /// Returns `true` iff every hidden item occurs in `query`.
    ///
    /// Order and duplicates in `query` are irrelevant.
    fn guess(&mut self, query: &[&T]) -> bool;

    /// Number of times [`guess`](Self::guess) has been called.
    fn guesses(&self) -> usize;

    /// The ordered universe the hidden set was drawn from.
    fn universe(&self) -> &[T];
}

/// Oracle over a fixed universe with a hidden subset.
///
/// The universe and hidden set are shared between clones; only the guess
/// counter is per instance. [`Clone`] deliberately produces an oracle whose
/// counter starts at zero, so several strategies can be run against the
/// same hidden answer without their counts mixing.
pub struct Oracle<T> {
    universe: Arc<[T]>,
    hidden: Arc<[T]>,
    guesses: usize,
}

impl<T: Item> Oracle<T> {
    /// Create an oracle.
    ///
    /// Repeated hidden items are collapsed, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// * `ValidationError::DuplicateUniverseItem` - the universe is not a set.
    /// * `ValidationError::HiddenItemNotInUniverse` - a hidden item is unknown.
    pub fn new(universe: Vec<T>, hidden: Vec<T>) -> Result<Self, ValidationError> {
        let mut members: HashSet<&T> = HashSet::with_capacity(universe.len());
        for item in &universe {
            if !members.insert(item) {
                return Err(ValidationError::duplicate(item));
            }
        }

        let mut seen: HashSet<&T> = HashSet::with_capacity(hidden.len());
        let mut unique = Vec::with_capacity(hidden.len());
        for item in &hidden {
            if !members.contains(item) {
                return Err(ValidationError::hidden_not_in_universe(item));
            }
            if seen.insert(item) {
                unique.push(item.clone());
            }
        }

        debug!(
            universe_size = universe.len(),
            hidden_size = unique.len(),
            "Oracle constructed"
        );

        Ok(Self {
            universe: universe.into(),
            hidden: unique.into(),
            guesses: 0,
        })
    }

    /// Ask whether `items` contains the whole hidden set.
    ///
    /// Counts as one guess.
    pub fn query<'a, I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.guesses += 1;
        if self.hidden.is_empty() {
            return true;
        }
        let query: HashSet<&T> = items.into_iter().collect();
        self.hidden.iter().all(|h| query.contains(h))
    }

    /// Check that `candidate` equals the hidden set, ignoring order and
    /// duplicates. Does not count as a guess.
    pub fn verify(&self, candidate: &[T]) -> Result<(), VerificationError> {
        let candidate_set: HashSet<&T> = candidate.iter().collect();
        let hidden_set: HashSet<&T> = self.hidden.iter().collect();

        let missing: Vec<String> = self
            .hidden
            .iter()
            .filter(|h| !candidate_set.contains(h))
            .map(|h| format!("{:?}", h))
            .collect();

        let mut reported = HashSet::new();
        let unexpected: Vec<String> = candidate
            .iter()
            .filter(|c| !hidden_set.contains(c) && reported.insert(*c))
            .map(|c| format!("{:?}", c))
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(VerificationError::Mismatch {
                missing,
                unexpected,
            })
        }
    }

    /// Number of guesses issued so far.
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    /// The ordered universe.
    pub fn universe(&self) -> &[T] {
        &self.universe
    }

    /// Size of the hidden set. Exposed for reporting only.
    pub fn hidden_len(&self) -> usize {
        self.hidden.len()
    }
}

impl<T> Clone for Oracle<T> {
    fn clone(&self) -> Self {
        Self {
            universe: Arc::clone(&self.universe),
            hidden: Arc::clone(&self.hidden),
            guesses: 0,
        }
    }
}

impl<T: Item> ContainmentOracle<T> for Oracle<T> {
    fn guess(&mut self, query: &[&T]) -> bool {
        self.query(query.iter().copied())
    }

    fn guesses(&self) -> usize {
        self.guesses
    }

    fn universe(&self) -> &[T] {
        &self.universe
    }
}

impl<T: fmt::Debug> fmt::Debug for Oracle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Oracle")
            .field("universe_size", &self.universe.len())
            .field("hidden_size", &self.hidden.len())
            .field("guesses", &self.guesses)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Oracle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hidden: \"")?;
        for (i, item) in self.hidden.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "\"")
    }
}
