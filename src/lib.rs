pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod services;
pub mod table;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, cmd_init, cmd_preprocess, cmd_report};
pub use config::Config;
pub use error::{EdaError, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so report tables on
/// stdout stay clean.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;
    init_tracing(&config.general.log_level)?;

    match cli.command {
        Commands::Preprocess => cmd_preprocess(&config),

        Commands::Report {
            report,
            output_dir,
            data,
            ratings,
        } => cmd_report(&config, report, output_dir, data, ratings),

        Commands::Init => cmd_init(),
    }
}
