//! Development tasks for the combat resolver
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Batch, Simulate};

/// Development tasks for the combat resolver
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for combat simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run one seeded combat and print its replay
    Simulate(Simulate),

    /// Run many seeded combats and report win rates
    Batch(Batch),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(cmd) => cmd.execute(),
        Command::Batch(cmd) => cmd.execute(),
    }
}
