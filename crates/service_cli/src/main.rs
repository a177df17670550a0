//! econsim - scenario simulation and risk analysis from the command line
//!
//! # Commands
//!
//! - `econsim simulate --scenario realistic` - Simulate one scenario
//! - `econsim compare` - Simulate and compare the active catalog
//! - `econsim stress --preset gfc` - Stress-test the base plan
//! - `econsim paths --paths 1000` - Distribution of final balances
//! - `econsim check` - Verify configuration and catalog
//!
//! # Architecture
//!
//! As the service layer, this crate wires configuration, logging and
//! output formats around `econ_risk`, which in turn drives `econ_models`
//! on top of `econ_core`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use econ_core::types::BaseSimulationInput;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::compare::CorrelationArg;
use commands::stress::RecoveryArg;
use config::{CliConfig, OutputFormat};

/// Economic scenario simulator
#[derive(Parser)]
#[command(name = "econsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "econsim.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Contribution plan shared by the simulation commands.
#[derive(Args, Debug, Clone, Copy)]
struct PlanArgs {
    /// Initial investment
    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,

    /// Monthly contribution from the second month on
    #[arg(long, default_value_t = 500.0)]
    monthly: f64,

    /// Horizon in months
    #[arg(long, default_value_t = 12)]
    months: u32,

    /// Random seed (defaults to the configured seed)
    #[arg(long)]
    seed: Option<u64>,
}

impl PlanArgs {
    fn base(&self) -> BaseSimulationInput {
        BaseSimulationInput::new(self.initial, self.monthly, self.months)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single scenario
    Simulate {
        #[command(flatten)]
        plan: PlanArgs,

        /// Scenario id or kind (optimistic, realistic, pessimistic, custom)
        #[arg(short, long, default_value = "realistic")]
        scenario: String,

        /// Scenario catalog (JSON array); defaults to the presets
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Simulate and compare all active scenarios
    Compare {
        #[command(flatten)]
        plan: PlanArgs,

        /// Scenario catalog (JSON array); defaults to the presets
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Correlation matrix method
        #[arg(long, value_enum, default_value_t = CorrelationArg::Placeholder)]
        correlation: CorrelationArg,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Apply shocks to the base plan
    Stress {
        #[command(flatten)]
        plan: PlanArgs,

        /// Preset shock bundle (gfc, stagflation, rate_spike, currency_crisis, pandemic)
        #[arg(short, long)]
        preset: Option<String>,

        /// Extra shock as kind:magnitude:duration[:shape]; repeatable
        #[arg(long = "shock")]
        shocks: Vec<String>,

        /// Recovery pattern override
        #[arg(long, value_enum)]
        recovery: Option<RecoveryArg>,

        /// Share of the loss regained by an L recovery (%)
        #[arg(long)]
        floor: Option<f64>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Distribution of final balances over many seeded paths
    Paths {
        #[command(flatten)]
        plan: PlanArgs,

        /// Scenario id or kind
        #[arg(short, long, default_value = "realistic")]
        scenario: String,

        /// Scenario catalog (JSON array); defaults to the presets
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of paths (defaults to the configured count)
        #[arg(short = 'n', long)]
        paths: Option<usize>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check configuration and that every catalog scenario simulates
    Check {
        /// Scenario catalog (JSON array); defaults to the presets
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool, config: &CliConfig) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .context("invalid log filter")?
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    init_tracing(cli.verbose, &config)?;

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "configuration loaded");

    let seed = |plan: &PlanArgs| plan.seed.unwrap_or(config.seed);
    let output_format = |requested: Option<OutputFormat>| requested.unwrap_or(config.output_format);

    match cli.command {
        Commands::Simulate {
            plan,
            scenario,
            catalog,
            format,
        } => commands::simulate::run(
            &config,
            &plan.base(),
            seed(&plan),
            &scenario,
            catalog.as_deref(),
            output_format(format),
        )?,
        Commands::Compare {
            plan,
            catalog,
            correlation,
            format,
        } => commands::compare::run(
            &config,
            &plan.base(),
            seed(&plan),
            catalog.as_deref(),
            correlation,
            output_format(format),
        )?,
        Commands::Stress {
            plan,
            preset,
            shocks,
            recovery,
            floor,
            format,
        } => commands::stress::run(
            &plan.base(),
            preset.as_deref(),
            &shocks,
            recovery,
            floor,
            output_format(format),
        )?,
        Commands::Paths {
            plan,
            scenario,
            catalog,
            paths,
            format,
        } => commands::paths::run(
            &config,
            &plan.base(),
            seed(&plan),
            &scenario,
            catalog.as_deref(),
            paths,
            output_format(format),
        )?,
        Commands::Check { catalog } => commands::check::run(&config, catalog.as_deref())?,
    }
    Ok(())
}
