//! Get command implementation

use optfile_core::{Error, OptionValue};

use super::load_registry;
use crate::cli::LoadArgs;
use crate::error::{CliError, Result};

/// Run the get command
pub fn run_get(args: &LoadArgs, key: &str, json: bool) -> Result<()> {
    let (registry, _) = load_registry(args)?;

    let resolved = registry.resolve(key).map_err(|e| match e {
        Error::NotFound { .. } => CliError::user(format!("Unknown option: {}", key)),
        other => CliError::Core(other),
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(resolved.entry.value())?);
        return Ok(());
    }

    for line in render_value(resolved.entry.value()) {
        println!("{}", line);
    }
    Ok(())
}

/// One output line per list element, a single line otherwise.
fn render_value(value: &OptionValue) -> Vec<String> {
    match value {
        OptionValue::Strings(list) => list.iter().map(str::to_string).collect(),
        other => vec![other.to_string()],
    }
}
