//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// optfile - Inspect how a directive file loads into a typed option schema
#[derive(Parser, Debug)]
#[command(name = "optfile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Schema and directive file shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LoadArgs {
    /// TOML schema declaring options and aliases
    #[arg(short, long, env = "OPTFILE_SCHEMA")]
    pub schema: PathBuf,

    /// Directive file to load
    pub file: PathBuf,

    /// Longest physical line read in one piece
    #[arg(long, default_value_t = optfile_source::config::DEFAULT_MAX_LINE_LEN)]
    pub max_line_len: usize,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load a directive file and show every option
    ///
    /// Examples:
    ///   optfile show -s schema.toml dns.conf
    ///   optfile show -s schema.toml dns.conf --json
    Show {
        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Load a directive file and print one option's value
    ///
    /// Aliases are resolved, so either name works.
    Get {
        #[command(flatten)]
        load: LoadArgs,

        /// Option name or alias
        key: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
