//! # culprit-core
//!
//! The containment oracle at the heart of culprit.
//!
//! An [`Oracle`] owns a fixed, ordered universe of items and a hidden subset
//! of it. It answers a single monotone question, "does this query contain
//! every hidden item?", and counts how many times it has been asked. The
//! minimization strategies in `culprit-minimizer` recover the hidden subset
//! using nothing but that question, and the count is the metric they are
//! compared on.
//!
//! ## Example
//!
//! ```rust
//! use culprit_core::Oracle;
//!
//! let mut oracle = Oracle::new(vec!["add", "cos", "div"], vec!["cos"])?;
//!
//! assert!(oracle.query(["add", "cos"].iter()));
//! assert!(!oracle.query(["add", "div"].iter()));
//! assert_eq!(oracle.guesses(), 2);
//!
//! // Clones share the hidden set but start counting from zero.
//! let fresh = oracle.clone();
//! assert_eq!(fresh.guesses(), 0);
//!
//! oracle.verify(&["cos"])?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod oracle;

pub use error::{ValidationError, VerificationError};
pub use oracle::{ContainmentOracle, Item, Oracle};
