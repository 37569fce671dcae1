//! # culprit-generator
//!
//! Trial inputs for culprit: seedable hidden-set generators and universes
//! that double in size.
//!
//! The minimizers never depend on this crate. It exists so trial harnesses
//! can draw reproducible hidden sets.
//!
//! ## Example
//!
//! ```rust
//! use culprit_generator::{CoinFlipGenerator, DoublingUniverses, HiddenSetGenerator};
//!
//! let mut generator = CoinFlipGenerator::new(42);
//! for universe in DoublingUniverses::new("a").take(4) {
//!     let oracle = generator.oracle(universe)?;
//!     assert_eq!(oracle.guesses(), 0);
//! }
//! # Ok::<(), culprit_generator::GeneratorError>(())
//! ```

pub mod random;
pub mod traits;
pub mod universe;

pub use random::CoinFlipGenerator;
pub use traits::{GeneratorError, GeneratorResult, HiddenSetGenerator};
pub use universe::{DoublingUniverses, MAX_DISTINCT_ROUNDS};
