//! Miryoku Kanata - generate Kanata keymaps for every Miryoku variant
//!
//! # Usage
//!
//! ```bash
//! # Write all 135 configurations below ./out
//! miryoku-kanata generate --out-dir out
//!
//! # Only macOS, no flipped thumbs
//! miryoku-kanata generate --platform mac --no-flip
//!
//! # Print one configuration
//! miryoku-kanata show --alpha qwerty --nav vi --platform win
//! ```

use clap::{Parser, Subcommand};
use miryoku_kanata::cli::{
    CheckArgs, CliError, CliResult, ExitCode, GenerateArgs, ListArgs, ShowArgs,
};
use miryoku_kanata::config::Config;
use miryoku_kanata::constants::{APP_BINARY_NAME, APP_NAME};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Miryoku Kanata - configuration generator for 36-key split keyboards
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Registry TOML replacing the built-in layouts
    #[arg(long, global = true, value_name = "FILE")]
    registry: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the configuration matrix
    Generate(GenerateArgs),
    /// Print one configuration
    Show(ShowArgs),
    /// List variants and their output paths
    List(ListArgs),
    /// Validate registry data
    Check(CheckArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Loads the configuration file and applies global overrides.
fn load_config(cli: &Cli) -> CliResult<Config> {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = loaded.map_err(|e| {
        if e.downcast_ref::<toml::de::Error>().is_some() {
            CliError::validation(format!("{e:#}"))
        } else {
            CliError::io(format!("{e:#}"))
        }
    })?;

    if let Some(registry) = &cli.registry {
        config.paths.registry = Some(registry.clone());
    }
    Ok(config)
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = load_config(cli)?;
    debug!(?config, "{APP_NAME} configuration loaded");

    match &cli.command {
        Command::Generate(args) => args.execute(&config),
        Command::Show(args) => args.execute(&config),
        Command::List(args) => args.execute(&config),
        Command::Check(args) => args.execute(&config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(error) => {
            eprintln!("Error: {error}");
            error.exit_code()
        }
    };

    std::process::exit(code.code());
}
