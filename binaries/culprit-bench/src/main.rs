//! culprit-bench - compare hidden-set recovery strategies.
//!
//! Runs many randomized trials per universe size against each configured
//! strategy, verifies every result against the oracle, and prints summary
//! statistics of the guesses each strategy needed.
//!
//! # Usage
//!
//! ```bash
//! # 10 000 trials for universes of 1 to 128 items
//! culprit-bench
//!
//! # Start from a configuration file
//! culprit-bench --config /path/to/bench.toml
//!
//! # Override specific options
//! culprit-bench --trials 1000 --rounds 10 --seed 42 --strategies bisect,greedy --format json
//! ```

mod config;
mod trial;

use anyhow::{Context, Result};
use clap::Parser;
use config::BenchConfig;
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use culprit_generator::DoublingUniverses;
use culprit_report::{BenchReport, JsonRenderer, ReportRenderer, TextRenderer};
use trial::TrialRunner;

/// CLI arguments for culprit-bench.
#[derive(Parser, Debug)]
#[command(
    name = "culprit-bench",
    about = "Compare strategies for recovering a hidden subset from a containment oracle",
    version
)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Trials per universe size.
    #[arg(short, long, value_name = "N")]
    trials: Option<usize>,

    /// Number of universe sizes (1, 2, 4, ... items).
    #[arg(short, long, value_name = "N")]
    rounds: Option<usize>,

    /// Base seed for hidden-set generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Probability that each item is hidden.
    #[arg(short, long, value_name = "P")]
    probability: Option<f64>,

    /// Comma-separated strategies (linear, linear-independent, bisect, greedy).
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    strategies: Option<Vec<String>>,

    /// Guess budget per minimization.
    #[arg(long, value_name = "N")]
    max_guesses: Option<usize>,

    /// Worker threads.
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Report format (text, json).
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Enable JSON log output.
    #[arg(long)]
    json_logs: bool,

    /// Print the default configuration and exit.
    #[arg(long)]
    print_config: bool,
}

/// Initialize tracing/logging.
fn init_tracing(config: &config::LoggingConfig, json_logs: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .context("Failed to parse log filter")?;

    let format = if json_logs || config.format == "json" {
        "json"
    } else {
        &config.format
    };

    // Logs go to stderr so the report on stdout stays machine-readable.
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;
        }
    }

    Ok(())
}

/// Run every universe size and collect the report.
fn run(config: &BenchConfig) -> Result<BenchReport> {
    let seed = config.seed();
    info!(
        seed,
        probability = config.generator.probability,
        trials = config.trials.trials_per_size,
        rounds = config.trials.rounds,
        "Starting trials"
    );

    let mut builder = ThreadPoolBuilder::new();
    if let Some(threads) = config.trials.threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build().context("Failed to build thread pool")?;

    let runner = TrialRunner::new(config, seed);
    let mut report = BenchReport::new(seed, config.generator.probability);

    let universes =
        DoublingUniverses::new(config.trials.root_item.clone()).take(config.trials.rounds);
    for universe in universes {
        let size = pool.install(|| runner.run_size(&universe, config.trials.trials_per_size))?;
        report.sizes.push(size);
    }

    Ok(report)
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Handle --print-config
    if args.print_config {
        let config = BenchConfig::default();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // Load configuration
    let mut config = if let Some(ref config_path) = args.config {
        BenchConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        BenchConfig::default()
    };

    // Merge CLI arguments
    config.merge_cli_args(&args).context("Invalid arguments")?;

    // Validate configuration
    config.validate().context("Invalid configuration")?;

    // Initialize tracing
    init_tracing(&config.logging, args.json_logs)?;

    info!(version = env!("CARGO_PKG_VERSION"), "culprit-bench starting");

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Trials failed");
            return Err(e);
        }
    };

    let rendered = match config.output.format.to_lowercase().as_str() {
        "json" => JsonRenderer::new().render(&report)?,
        _ => TextRenderer::new().render(&report)?,
    };
    print!("{}", rendered);

    info!("culprit-bench finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use culprit_minimizer::StrategyKind;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::parse_from(["culprit-bench"]);
        assert!(args.config.is_none());
        assert!(args.trials.is_none());
        assert!(args.strategies.is_none());
        assert!(!args.json_logs);
        assert!(!args.print_config);
    }

    #[test]
    fn test_cli_args_with_options() {
        let args = CliArgs::parse_from([
            "culprit-bench",
            "--trials",
            "100",
            "--rounds",
            "5",
            "--seed",
            "42",
            "--strategies",
            "bisect,greedy",
            "-j",
            "2",
            "--format",
            "json",
            "--log-level",
            "debug",
            "--json-logs",
        ]);

        assert_eq!(args.trials, Some(100));
        assert_eq!(args.rounds, Some(5));
        assert_eq!(args.seed, Some(42));
        assert_eq!(
            args.strategies,
            Some(vec!["bisect".to_string(), "greedy".to_string()])
        );
        assert_eq!(args.threads, Some(2));
        assert_eq!(args.format, Some("json".to_string()));
        assert_eq!(args.log_level, Some("debug".to_string()));
        assert!(args.json_logs);
    }

    #[test]
    fn test_config_merge() {
        let mut config = BenchConfig::default();
        let args = CliArgs::parse_from([
            "culprit-bench",
            "--strategies",
            "linear-independent,greedy",
            "--probability",
            "0.1",
            "--max-guesses",
            "500",
        ]);

        config.merge_cli_args(&args).unwrap();

        assert_eq!(
            config.trials.strategies,
            vec![StrategyKind::LinearIndependent, StrategyKind::Greedy]
        );
        assert_eq!(config.generator.probability, 0.1);
        assert_eq!(config.minimizer.max_guesses, Some(500));
    }

    #[test]
    fn test_config_merge_rejects_unknown_strategy() {
        let mut config = BenchConfig::default();
        let args = CliArgs::parse_from(["culprit-bench", "--strategies", "ddmin"]);
        assert!(config.merge_cli_args(&args).is_err());
    }

    #[test]
    fn test_run_small_configuration() {
        let mut config = BenchConfig::default();
        config.trials.trials_per_size = 25;
        config.trials.rounds = 4;
        config.trials.threads = Some(2);
        config.generator.seed = Some(8);

        let report = run(&config).unwrap();
        let sizes: Vec<usize> = report.sizes.iter().map(|s| s.universe_size).collect();
        assert_eq!(sizes, vec![1, 2, 4, 8]);
        assert_eq!(report.seed, 8);

        // Full hidden sets visit every bisection node.
        let full: Vec<usize> = report.sizes.iter().map(|s| s.full_hidden_guesses).collect();
        assert_eq!(full, vec![1, 3, 7, 15]);
    }
}
