//! Aggregate statistics over per-trial guess counts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Mean, spread and extremes of a set of guess counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessSummary {
    /// Number of trials aggregated.
    pub samples: usize,
    /// Mean guesses per trial.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Largest guess count observed.
    pub worst: usize,
    /// Smallest guess count observed.
    pub best: usize,
}

impl GuessSummary {
    /// Summarize `samples`.
    ///
    /// # Errors
    ///
    /// * `ReportError::NoSamples` - `samples` is empty.
    pub fn from_samples(samples: &[usize]) -> Result<Self, ReportError> {
        let (&first, rest) = samples.split_first().ok_or(ReportError::NoSamples)?;

        let (sum, worst, best) = rest
            .iter()
            .fold((first as f64, first, first), |(sum, worst, best), &s| {
                (sum + s as f64, worst.max(s), best.min(s))
            });

        let count = samples.len() as f64;
        let mean = sum / count;
        let variance = samples
            .iter()
            .map(|&s| {
                let delta = s as f64 - mean;
                delta * delta
            })
            .sum::<f64>()
            / count;

        Ok(Self {
            samples: samples.len(),
            mean,
            std_dev: variance.sqrt(),
            worst,
            best,
        })
    }
}

impl fmt::Display for GuessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average guesses: {}, Standard Deviation: {}, Worst Case: {}, Best Case: {}",
            significant(self.mean, 4),
            significant(self.std_dev, 4),
            self.worst,
            self.best
        )
    }
}

/// Format `value` with `digits` significant digits.
pub(crate) fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", digits.saturating_sub(1), value);
    }
    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, value)
}
