//! Bench configuration.
//!
//! Configuration is loaded from an optional TOML file, then overridden by
//! CLI arguments.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use culprit_generator::MAX_DISTINCT_ROUNDS;
use culprit_minimizer::{MinimizerConfig, StrategyKind};

/// Bench configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Trial loop configuration.
    pub trials: TrialConfig,

    /// Hidden-set generation.
    pub generator: GeneratorConfig,

    /// Settings passed to every strategy.
    pub minimizer: MinimizerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Report output configuration.
    pub output: OutputConfig,
}

/// Trial loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialConfig {
    /// Trials per universe size.
    pub trials_per_size: usize,

    /// Number of universe sizes, starting from one item and doubling.
    pub rounds: usize,

    /// Name of the single item in the smallest universe.
    pub root_item: String,

    /// Strategies to compare, in report order.
    pub strategies: Vec<StrategyKind>,

    /// Worker threads (unset uses one per core).
    pub threads: Option<usize>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials_per_size: 10_000,
            rounds: 8,
            root_item: "a".to_string(),
            strategies: vec![
                StrategyKind::Linear,
                StrategyKind::Bisect,
                StrategyKind::Greedy,
            ],
            threads: None,
        }
    }
}

/// Hidden-set generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base seed; a random one is drawn when unset.
    pub seed: Option<u64>,

    /// Probability that each universe item is hidden.
    pub probability: f64,

    /// Shuffle hidden items after drawing them.
    pub shuffle: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            probability: 0.5,
            shuffle: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Log format (pretty, json, compact).
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format (text, json).
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl BenchConfig {
    /// Loads configuration from a file.
    pub fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_cli_args(&mut self, args: &super::CliArgs) -> anyhow::Result<()> {
        if let Some(trials) = args.trials {
            self.trials.trials_per_size = trials;
        }

        if let Some(rounds) = args.rounds {
            self.trials.rounds = rounds;
        }

        if let Some(ref strategies) = args.strategies {
            self.trials.strategies = strategies
                .iter()
                .map(|name| name.parse::<StrategyKind>())
                .collect::<Result<Vec<_>, _>>()?;
        }

        if let Some(threads) = args.threads {
            self.trials.threads = Some(threads);
        }

        if let Some(seed) = args.seed {
            self.generator.seed = Some(seed);
        }

        if let Some(probability) = args.probability {
            self.generator.probability = probability;
        }

        if let Some(max_guesses) = args.max_guesses {
            self.minimizer.max_guesses = Some(max_guesses);
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }

        if let Some(ref format) = args.format {
            self.output.format = format.clone();
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.trials.trials_per_size == 0 {
            anyhow::bail!("trials_per_size must be at least 1");
        }

        if self.trials.rounds == 0 || self.trials.rounds > MAX_DISTINCT_ROUNDS {
            anyhow::bail!(
                "rounds must be between 1 and {}, got {}",
                MAX_DISTINCT_ROUNDS,
                self.trials.rounds
            );
        }

        if self.trials.root_item.is_empty() {
            anyhow::bail!("root_item must not be empty");
        }

        if self.trials.strategies.is_empty() {
            anyhow::bail!("at least one strategy is required");
        }

        if self.trials.threads == Some(0) {
            anyhow::bail!("threads must be at least 1");
        }

        if !(0.0..=1.0).contains(&self.generator.probability) {
            anyhow::bail!(
                "probability must be within [0, 1], got {}",
                self.generator.probability
            );
        }

        self.minimizer.validate()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.to_lowercase().as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        let valid_outputs = ["text", "json"];
        if !valid_outputs.contains(&self.output.format.to_lowercase().as_str()) {
            anyhow::bail!("Invalid output format: {}", self.output.format);
        }

        Ok(())
    }

    /// Returns the configured seed, drawing a random one if unset.
    pub fn seed(&self) -> u64 {
        self.generator.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();

        assert_eq!(config.trials.trials_per_size, 10_000);
        assert_eq!(config.trials.rounds, 8);
        assert_eq!(config.trials.root_item, "a");
        assert_eq!(
            config.trials.strategies,
            vec![StrategyKind::Linear, StrategyKind::Bisect, StrategyKind::Greedy]
        );
        assert_eq!(config.generator.probability, 0.5);
        assert!(config.generator.seed.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = BenchConfig::default();

        config.trials.rounds = MAX_DISTINCT_ROUNDS + 1;
        assert!(config.validate().is_err());
        config.trials.rounds = 8;

        config.trials.trials_per_size = 0;
        assert!(config.validate().is_err());
        config.trials.trials_per_size = 10;

        config.trials.strategies.clear();
        assert!(config.validate().is_err());
        config.trials.strategies.push(StrategyKind::Greedy);

        config.generator.probability = -0.1;
        assert!(config.validate().is_err());
        config.generator.probability = 0.25;

        config.minimizer.max_guesses = Some(0);
        assert!(config.validate().is_err());
        config.minimizer.max_guesses = None;

        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());
        config.logging.level = "debug".to_string();

        config.output.format = "yaml".to_string();
        assert!(config.validate().is_err());
        config.output.format = "json".to_string();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fixed_seed_is_used() {
        let mut config = BenchConfig::default();
        config.generator.seed = Some(1234);
        assert_eq!(config.seed(), 1234);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = BenchConfig::default();
        config.generator.seed = Some(7);
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: BenchConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.generator.seed, Some(7));
        assert_eq!(parsed.trials.strategies, config.trials.strategies);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: BenchConfig = toml::from_str(
            r#"
            [trials]
            rounds = 4
            strategies = ["greedy", "linear-independent"]

            [minimizer]
            max_guesses = 1000
            "#,
        )
        .unwrap();

        assert_eq!(parsed.trials.rounds, 4);
        assert_eq!(parsed.trials.trials_per_size, 10_000);
        assert_eq!(
            parsed.trials.strategies,
            vec![StrategyKind::Greedy, StrategyKind::LinearIndependent]
        );
        assert_eq!(parsed.minimizer.max_guesses, Some(1000));
        assert_eq!(parsed.generator.probability, 0.5);
    }
}
