//! Report renderers.

use culprit_minimizer::StrategyKind;

use crate::error::ReportError;
use crate::types::BenchReport;

/// Turns a [`BenchReport`] into text.
pub trait ReportRenderer {
    /// Render the report.
    fn render(&self, report: &BenchReport) -> Result<String, ReportError>;
}

/// Plain-text renderer, one block per universe size.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer.
    pub fn new() -> Self {
        Self
    }

    fn label(kind: StrategyKind) -> &'static str {
        match kind {
            StrategyKind::Linear => "Linear",
            StrategyKind::LinearIndependent => "Linear (independent)",
            StrategyKind::Bisect => "Bisect",
            StrategyKind::Greedy => "Greedy bisect",
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &BenchReport) -> Result<String, ReportError> {
        let mut out = String::new();
        for size in &report.sizes {
            out.push_str(&format!("Universe Size: {}\n", size.universe_size));
            out.push_str(&format!(
                "Empty Hidden Guesses: {}\n",
                size.empty_hidden_guesses
            ));
            out.push_str(&format!(
                "Full Hidden Guesses: {}\n",
                size.full_hidden_guesses
            ));
            for strategy in &size.strategies {
                out.push_str(&format!("{}:\n", Self::label(strategy.strategy)));
                out.push_str(&format!("{}\n", strategy.summary));
            }
        }
        Ok(out)
    }
}

/// Pretty-printed JSON renderer.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    compact: bool,
}

impl JsonRenderer {
    /// Create a new pretty-printing JSON renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit single-line JSON instead.
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &BenchReport) -> Result<String, ReportError> {
        let json = if self.compact {
            serde_json::to_string(report)?
        } else {
            serde_json::to_string_pretty(report)?
        };
        Ok(json)
    }
}
