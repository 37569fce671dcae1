//! Trial execution.
//!
//! Each trial draws a hidden set, then runs every configured strategy
//! against its own clone of the trial's oracle and verifies the result.
//! Trials are independent and run on a rayon pool; each derives its seed
//! from the base seed, the universe size and its index, so results do not
//! depend on the number of threads.

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, error, info};

use culprit_core::Oracle;
use culprit_generator::{CoinFlipGenerator, HiddenSetGenerator};
use culprit_minimizer::{Bisector, Minimizer, MinimizerConfig, StrategyKind};
use culprit_report::SizeReport;

use crate::config::BenchConfig;

/// Runs trials for one configuration.
pub struct TrialRunner {
    strategies: Vec<(StrategyKind, Box<dyn Minimizer<String>>)>,
    seed: u64,
    probability: f64,
    shuffle: bool,
}

impl TrialRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: &BenchConfig, seed: u64) -> Self {
        let strategies = config
            .trials
            .strategies
            .iter()
            .map(|&kind| (kind, kind.build::<String>(config.minimizer.clone())))
            .collect();

        Self::with_strategies(config, seed, strategies)
    }

    /// Build a runner around already constructed strategies.
    pub(crate) fn with_strategies(
        config: &BenchConfig,
        seed: u64,
        strategies: Vec<(StrategyKind, Box<dyn Minimizer<String>>)>,
    ) -> Self {
        Self {
            strategies,
            seed,
            probability: config.generator.probability,
            shuffle: config.generator.shuffle,
        }
    }

    /// Run `trials` trials over `universe` and summarize them.
    pub fn run_size(&self, universe: &[String], trials: usize) -> Result<SizeReport> {
        info!(universe_size = universe.len(), trials, "Running trials");

        let per_trial: Vec<Vec<usize>> = (0..trials)
            .into_par_iter()
            .map(|trial| self.run_trial(universe, trial))
            .collect::<Result<_>>()?;

        let (empty, full) = self.boundaries(universe)?;
        let mut report = SizeReport::new(universe.len(), trials).with_boundaries(empty, full);

        for (index, (kind, _)) in self.strategies.iter().enumerate() {
            let samples: Vec<usize> = per_trial.iter().map(|counts| counts[index]).collect();
            report
                .push_samples(*kind, &samples)
                .with_context(|| format!("Failed to summarize {kind}"))?;
        }

        if let Some(greedy) = report.strategy(StrategyKind::Greedy) {
            info!(
                universe_size = universe.len(),
                greedy_mean = greedy.mean,
                "Size complete"
            );
        }

        Ok(report)
    }

    /// Guess counts of one trial, one per strategy.
    fn run_trial(&self, universe: &[String], trial: usize) -> Result<Vec<usize>> {
        let seed = trial_seed(self.seed, universe.len(), trial);
        let mut generator = CoinFlipGenerator::new(seed)
            .with_probability(self.probability)?
            .with_shuffle(self.shuffle);
        let oracle = generator
            .oracle(universe.to_vec())
            .context("Generated an invalid trial")?;

        let mut counts = Vec::with_capacity(self.strategies.len());
        for (kind, minimizer) in &self.strategies {
            let mut run = oracle.clone();
            let result = minimizer
                .minimize(&mut run)
                .with_context(|| format!("{kind} failed on trial {trial} (seed {seed})"))?;

            if let Err(e) = run.verify(&result.items) {
                error!(
                    strategy = %kind,
                    trial,
                    seed,
                    error = %e,
                    "Strategy returned the wrong set"
                );
                return Err(e).with_context(|| {
                    format!("{kind} failed verification on trial {trial} (seed {seed}): {run}")
                });
            }

            debug!(strategy = %kind, trial, guesses = run.guesses(), "Trial run complete");
            counts.push(run.guesses());
        }

        Ok(counts)
    }

    /// Bisector guesses with nothing hidden and with everything hidden.
    ///
    /// Always measured with the default configuration, so the figures are
    /// the bare algorithm's and ignore budgets and precondition guesses.
    fn boundaries(&self, universe: &[String]) -> Result<(usize, usize)> {
        let bisector = Bisector::new(MinimizerConfig::default());

        let mut empty = Oracle::new(universe.to_vec(), Vec::new())?;
        bisector.minimize(&mut empty)?;

        let mut full = Oracle::new(universe.to_vec(), universe.to_vec())?;
        bisector.minimize(&mut full)?;

        Ok((empty.guesses(), full.guesses()))
    }
}

/// Seed for one trial, independent of scheduling.
pub fn trial_seed(base: u64, universe_size: usize, trial: usize) -> u64 {
    base ^ (universe_size as u64).rotate_left(32)
        ^ (trial as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use culprit_core::ContainmentOracle;
    use culprit_generator::DoublingUniverses;
    use culprit_minimizer::{MinimizationStats, MinimizedSet, MinimizerError};

    /// Spends one guess and claims nothing is hidden.
    struct GivesUp;

    impl Minimizer<String> for GivesUp {
        fn minimize(
            &self,
            oracle: &mut dyn ContainmentOracle<String>,
        ) -> std::result::Result<MinimizedSet<String>, MinimizerError> {
            oracle.guess(&[]);
            let stats = MinimizationStats::new("gives-up", oracle.universe().len());
            Ok(MinimizedSet::new(Vec::new(), stats))
        }

        fn name(&self) -> &str {
            "gives-up"
        }
    }

    fn config(trials: usize) -> BenchConfig {
        let mut config = BenchConfig::default();
        config.trials.trials_per_size = trials;
        config.trials.strategies = StrategyKind::ALL.to_vec();
        config
    }

    #[test]
    fn test_run_size_reports_every_strategy() {
        let runner = TrialRunner::new(&config(50), 11);
        let universe = DoublingUniverses::new("a").nth(4).unwrap();
        let report = runner.run_size(&universe, 50).unwrap();

        assert_eq!(report.universe_size, 16);
        assert_eq!(report.trials, 50);
        assert_eq!(report.strategies.len(), StrategyKind::ALL.len());
        assert_eq!(report.empty_hidden_guesses, 1);
        assert_eq!(report.full_hidden_guesses, 31);

        for kind in [StrategyKind::Linear, StrategyKind::LinearIndependent] {
            let linear = report.strategy(kind).unwrap();
            assert_eq!((linear.best, linear.worst), (16, 16));
        }
        for kind in [StrategyKind::Bisect, StrategyKind::Greedy] {
            assert!(report.strategy(kind).unwrap().best >= 1);
        }
    }

    #[test]
    fn test_results_are_reproducible() {
        let universe = DoublingUniverses::new("a").nth(5).unwrap();
        let first = TrialRunner::new(&config(20), 3).run_size(&universe, 20).unwrap();
        let second = TrialRunner::new(&config(20), 3).run_size(&universe, 20).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_budget_failure_is_reported() {
        let mut config = config(5);
        config.minimizer.max_guesses = Some(2);
        let runner = TrialRunner::new(&config, 1);
        let universe = DoublingUniverses::new("a").nth(3).unwrap();

        let err = runner.run_size(&universe, 5).unwrap_err();
        assert!(format!("{err:#}").contains("Guess budget of 2 exhausted"));
    }

    #[test]
    fn test_trial_seeds_differ() {
        assert_ne!(trial_seed(0, 8, 0), trial_seed(0, 8, 1));
        assert_ne!(trial_seed(0, 8, 0), trial_seed(0, 16, 0));
        assert_eq!(trial_seed(5, 8, 3), trial_seed(5, 8, 3));
    }

    #[test]
    fn test_boundaries_ignore_precondition_check() {
        let mut config = config(4);
        config.minimizer.check_precondition = true;
        let runner = TrialRunner::new(&config, 2);
        let universe = DoublingUniverses::new("a").nth(4).unwrap();

        let report = runner.run_size(&universe, 4).unwrap();
        assert_eq!(report.empty_hidden_guesses, 1);
        assert_eq!(report.full_hidden_guesses, 31);

        // The strategies themselves still pay for the check.
        let linear = report.strategy(StrategyKind::Linear).unwrap();
        assert_eq!((linear.best, linear.worst), (17, 17));
    }

    #[test]
    fn test_wrong_result_aborts_the_run() {
        let mut config = config(3);
        config.generator.probability = 1.0;
        let strategies: Vec<(StrategyKind, Box<dyn Minimizer<String>>)> =
            vec![(StrategyKind::Greedy, Box::new(GivesUp))];
        let runner = TrialRunner::with_strategies(&config, 9, strategies);
        let universe = DoublingUniverses::new("a").nth(2).unwrap();

        let err = runner.run_size(&universe, 3).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("greedy failed verification on trial"));
        assert!(message.contains("(seed "));
        assert!(message.contains("candidate does not match hidden set"));
    }
}
