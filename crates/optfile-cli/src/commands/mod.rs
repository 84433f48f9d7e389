//! Command implementations for optfile-cli

pub mod get;
pub mod show;

pub use get::run_get;
pub use show::run_show;

use optfile_core::{OptionRegistry, Schema};
use optfile_source::LineSourceConfig;

use crate::cli::LoadArgs;
use crate::error::Result;

/// Build the registry from the schema and load the directive file into it.
///
/// Returns the loaded registry and the number of directives applied.
pub fn load_registry(args: &LoadArgs) -> Result<(OptionRegistry, usize)> {
    let schema = Schema::load(&args.schema)?;
    let mut registry = schema.build()?;

    let config = LineSourceConfig {
        max_line_len: args.max_line_len,
        ..Default::default()
    };
    let applied = registry.load_file(&args.file, &config)?;
    tracing::debug!(applied, file = ?args.file, "Directive file loaded");

    Ok((registry, applied))
}
