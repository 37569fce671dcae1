//! Strategy selection by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use culprit_core::Item;

use crate::bisect::Bisector;
use crate::error::MinimizerError;
use crate::greedy::GreedyBisector;
use crate::linear::{EliminationMode, LinearEliminator};
use crate::traits::{Minimizer, MinimizerConfig};

/// The available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// [`LinearEliminator`] in cumulative mode.
    Linear,
    /// [`LinearEliminator`] in independent mode.
    LinearIndependent,
    /// [`Bisector`].
    Bisect,
    /// [`GreedyBisector`].
    Greedy,
}

impl StrategyKind {
    /// Every strategy, baseline first.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Linear,
        StrategyKind::LinearIndependent,
        StrategyKind::Bisect,
        StrategyKind::Greedy,
    ];

    /// The name used on the command line and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Linear => "linear",
            StrategyKind::LinearIndependent => "linear-independent",
            StrategyKind::Bisect => "bisect",
            StrategyKind::Greedy => "greedy",
        }
    }

    /// Build the strategy.
    pub fn build<T: Item>(self, config: MinimizerConfig) -> Box<dyn Minimizer<T>> {
        match self {
            StrategyKind::Linear => Box::new(LinearEliminator::new(config)),
            StrategyKind::LinearIndependent => Box::new(
                LinearEliminator::new(config).with_mode(EliminationMode::Independent),
            ),
            StrategyKind::Bisect => Box::new(Bisector::new(config)),
            StrategyKind::Greedy => Box::new(GreedyBisector::new(config)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = MinimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| MinimizerError::UnknownStrategy(s.to_string()))
    }
}
