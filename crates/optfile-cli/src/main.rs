//! optfile CLI
//!
//! Loads a directive file against a TOML option schema and reports the
//! resulting values.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Verbose forces DEBUG, otherwise RUST_LOG decides
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    match cli.command {
        Commands::Show { load, json } => commands::run_show(&load, json),
        Commands::Get { load, key, json } => commands::run_get(&load, &key, json),
    }
}
