//! c-arcade — interactive shell for the C learning stations.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use arcade_core::console::StdConsole;
use arcade_stations::StationRegistry;

mod commands;
mod config;
mod session;
mod shell;

#[derive(Parser)]
#[command(
    name = "c-arcade",
    version,
    about = "Station-based C learning game played from an interactive shell"
)]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Log directive used when `RUST_LOG` is unset: the library crates and this binary.
const DEFAULT_LOG_FILTER: &str = "arcade=warn,c_arcade=warn";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;

    let registry = match &config.content_dir {
        Some(dir) => StationRegistry::with_overrides(dir)?,
        None => StationRegistry::builtin()?,
    };
    tracing::debug!(stations = registry.entries().len(), "registry ready");

    let mut console = StdConsole::stdio();
    let mut shell = shell::Shell::new(&mut console, registry, config);
    shell.run();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_this_binary() {
        let targets: Vec<&str> = DEFAULT_LOG_FILTER
            .split(',')
            .filter_map(|directive| directive.split('=').next())
            .collect();
        assert!(targets.iter().any(|t| module_path!().starts_with(t)));
        assert!(targets.iter().any(|t| "arcade_core::engine".starts_with(t)));
    }
}
