//! Show command implementation
//!
//! Loads a directive file and lists every option with its merge state.

use colored::Colorize;
use optfile_core::{OptionSnapshot, Status};
use serde::Serialize;
use std::collections::BTreeMap;

use super::load_registry;
use crate::cli::LoadArgs;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct ShowReport<'a> {
    file: String,
    applied: usize,
    options: &'a BTreeMap<String, OptionSnapshot>,
}

/// Run the show command
pub fn run_show(args: &LoadArgs, json: bool) -> Result<()> {
    let (registry, applied) = load_registry(args)?;
    let snapshot = registry.snapshot();

    if json {
        let report = ShowReport {
            file: args.file.display().to_string(),
            applied,
            options: &snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Applied {} directive(s) from {}",
        applied.to_string().cyan(),
        args.file.display()
    );
    println!();

    let width = snapshot.keys().map(String::len).max().unwrap_or(0);
    for (key, option) in &snapshot {
        println!("  {}", format_line(key, option, width));
    }

    Ok(())
}

fn format_line(key: &str, option: &OptionSnapshot, width: usize) -> String {
    // Pad before colouring so escape codes do not count toward the width
    let status = match option.status {
        Status::Specialized => format!("{:<7}", "set").green(),
        Status::DefaultValue => format!("{:<7}", "default").dimmed(),
    };
    format!(
        "{}  {:<8} {}  {}",
        format!("{:<width$}", key, width = width).bold(),
        option.kind.to_string(),
        status,
        option.value
    )
}
