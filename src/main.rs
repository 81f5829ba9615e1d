use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use simplecalc::config::Config;
use simplecalc::shell::{OutputMode, Shell};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simplecalc")]
#[command(about = "A four-function keypad calculator", long_about = None)]
struct Cli {
    /// Key sequence to run, e.g. "5+3=". Starts an interactive shell if omitted.
    keys: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON object per key
    #[arg(long, conflicts_with = "trace")]
    json: bool,

    /// Print the display after every key
    #[arg(long)]
    trace: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match cli.config.or_else(Config::default_path) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    tracing::debug!(?config, "loaded config");

    let mut shell = Shell::new(&config);

    match cli.keys {
        Some(keys) => {
            let mode = if cli.json {
                OutputMode::Json
            } else if cli.trace {
                OutputMode::Trace
            } else {
                OutputMode::Final
            };
            shell
                .run_batch(&keys, mode, &mut io::stdout().lock())
                .context("Failed to run key sequence")?;
        }
        None => {
            shell
                .run_interactive(
                    io::stdin().lock(),
                    &mut io::stdout().lock(),
                    &mut io::stderr().lock(),
                )
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}
