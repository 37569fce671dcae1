//! # culprit-report
//!
//! Aggregation and rendering of strategy comparison runs.
//!
//! A [`BenchReport`] holds one [`SizeReport`] per universe size, each with a
//! [`GuessSummary`] (mean, population standard deviation, worst and best
//! case) per strategy. [`TextRenderer`] prints the familiar block-per-size
//! layout; [`JsonRenderer`] emits the same data as JSON.
//!
//! ## Example
//!
//! ```rust
//! use culprit_minimizer::StrategyKind;
//! use culprit_report::{BenchReport, ReportRenderer, SizeReport, TextRenderer};
//!
//! let mut size = SizeReport::new(8, 3).with_boundaries(1, 15);
//! size.push_samples(StrategyKind::Bisect, &[9, 11, 13])?;
//!
//! let mut report = BenchReport::new(42, 0.5);
//! report.sizes.push(size);
//!
//! let text = TextRenderer::new().render(&report)?;
//! assert!(text.contains("Average guesses: 11.00"));
//! # Ok::<(), culprit_report::ReportError>(())
//! ```

pub mod error;
pub mod render;
pub mod summary;
pub mod types;

pub use error::ReportError;
pub use render::{JsonRenderer, ReportRenderer, TextRenderer};
pub use summary::GuessSummary;
pub use types::{BenchReport, SizeReport, StrategyReport};
