//! # culprit-minimizer
//!
//! Strategies for recovering the hidden subset behind a
//! [`ContainmentOracle`](culprit_core::ContainmentOracle) using as few
//! guesses as possible.
//!
//! ## Algorithms
//!
//! - **LinearEliminator**: tries dropping each universe item once; exactly
//!   `|U|` guesses. Cumulative by default, with an independent variant.
//! - **Bisector**: recursive halving, minimizing each half in the context
//!   of its sibling. Θ(n log n) guesses in the worst case.
//! - **GreedyBisector**: recursive halving that first checks whether either
//!   half suffices alone, which pays off when hidden items are sparse or
//!   clustered.
//!
//! ## Example
//!
//! ```rust
//! use culprit_core::Oracle;
//! use culprit_minimizer::{Minimizer, MinimizerConfig, StrategyKind};
//!
//! let oracle = Oracle::new((0..16).collect::<Vec<u32>>(), vec![2, 9])?;
//!
//! for kind in StrategyKind::ALL {
//!     let mut run = oracle.clone();
//!     let result = kind.build::<u32>(MinimizerConfig::default()).minimize(&mut run)?;
//!     run.verify(&result.items)?;
//!     println!("{kind}: {} guesses", run.guesses());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use culprit_minimizer::MinimizerConfig;
//!
//! let config = MinimizerConfig::new()
//!     .with_max_guesses(500)          // Abort runaway searches
//!     .with_check_precondition(true)  // Confirm the start satisfies the oracle
//!     .with_verbose(true);            // Trace every guess
//! ```

pub mod bisect;
pub mod error;
pub mod greedy;
pub mod linear;
pub mod result;
mod session;
pub mod strategy;
pub mod traits;

// Re-export main types for convenient access
pub use bisect::Bisector;
pub use error::{MinimizerError, Result};
pub use greedy::GreedyBisector;
pub use linear::{EliminationMode, LinearEliminator};
pub use result::{MinimizationStats, MinimizedSet};
pub use strategy::StrategyKind;
pub use traits::{Minimizer, MinimizerConfig};
