use anyhow::Result;
use clap::Parser;
use opcalc_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Warnings are shown unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().execute()
}
