//! Error types for report generation.

use thiserror::Error;

/// Errors that can occur while building or rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A summary was requested over zero trials.
    #[error("cannot summarize an empty set of guess counts")]
    NoSamples,

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
