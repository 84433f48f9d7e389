//! Directive reader: the load loop
//!
//! Each logical line is `key<sep>value`, where `<sep>` is the first space,
//! tab or `=`. Lines without a separator and lines naming unknown keys are
//! skipped silently; a malformed line never stops the load.

use std::path::Path;

use optfile_source::{ConfigFile, LineSource, LineSourceConfig, Tail};

use crate::entry::{Entry, OptionEntry};
use crate::parse::{apply_boolean, apply_integer, apply_strings};
use crate::path::trim_path;
use crate::registry::OptionRegistry;
use crate::value::OptionType;
use crate::{Error, Result};

const KEY_SEPARATORS: [char; 3] = [' ', '\t', '='];

/// Split a directive line into key and value.
///
/// The key ends at the first space, tab or `=`, and the value starts at the
/// first non-blank character after that separator.
///
/// One tolerance goes beyond that rule: when the separator was a blank and
/// the value then opens with `=`, the `=` and the blanks after it are
/// skipped too. Without it `foo = "/etc/x"` would hand `= "/etc/x"` to the
/// path trimmer.
///
/// ```
/// use optfile_core::reader::split_directive;
///
/// assert_eq!(split_directive("name=value"), Some(("name", "value")));
/// assert_eq!(split_directive("name==value"), Some(("name", "=value")));
/// assert_eq!(split_directive("name = value"), Some(("name", "value")));
/// assert_eq!(split_directive("orphan"), None);
/// ```
pub fn split_directive(line: &str) -> Option<(&str, &str)> {
    let sep = line.find(KEY_SEPARATORS)?;
    let key = &line[..sep];
    let mut value = line[sep + 1..].trim_start_matches([' ', '\t']);

    if !line[sep..].starts_with('=') {
        if let Some(rest) = value.strip_prefix('=') {
            value = rest.trim_start_matches([' ', '\t']);
        }
    }

    Some((key, value))
}

impl OptionRegistry {
    /// Apply every directive from `source` until end of input.
    ///
    /// Returns the number of lines dispatched to a registered option. A line
    /// counts even when its value turned out malformed and changed nothing.
    pub fn load<S>(&mut self, source: &mut S) -> usize
    where
        S: LineSource + ?Sized,
    {
        let mut applied = 0;
        tracing::debug!(options = self.len(), "Loading directives");

        loop {
            let Some((line, tail)) = source.read_line().into_parts() else {
                break;
            };

            let Some((key, value)) = split_directive(&line) else {
                skip_rest_of_line(tail, source);
                continue;
            };

            let (canonical, prepend) = match self.resolve_key(key) {
                Ok((canonical, prepend)) => (canonical.to_string(), prepend.map(str::to_string)),
                Err(Error::AliasCycle { .. }) => {
                    tracing::warn!(key, "Alias cycle, skipping directive");
                    skip_rest_of_line(tail, source);
                    continue;
                }
                Err(_) => {
                    tracing::debug!(key, "Unknown key, skipping directive");
                    skip_rest_of_line(tail, source);
                    continue;
                }
            };

            let Some(Entry::Option(entry)) = self.entries.get_mut(&canonical) else {
                skip_rest_of_line(tail, source);
                continue;
            };

            tracing::trace!(key, option = %canonical, value, ?tail, "Applying directive");

            if let Some(prepend) = prepend {
                apply_prepend(entry, &prepend, source);
            }
            apply_value(entry, &canonical, value, tail, source);

            applied += 1;
        }

        tracing::debug!(applied, "Finished loading directives");
        applied
    }

    /// Open `path`, load every directive from it and close it again.
    pub fn load_file(&mut self, path: impl AsRef<Path>, config: &LineSourceConfig) -> Result<usize> {
        config.validate()?;
        let file = ConfigFile::open(path)?;
        tracing::debug!(path = ?file.path(), "Opened directive file");

        let mut source = file.into_line_source(*config);
        Ok(self.load(&mut source))
    }
}

/// Discard the pieces of a physical line cut at the read limit.
fn skip_rest_of_line<S>(mut tail: Tail, source: &mut S)
where
    S: LineSource + ?Sized,
{
    while tail == Tail::SameLine {
        match source.read_line().into_parts() {
            Some((_, next)) => tail = next,
            None => break,
        }
    }
}

/// Alias prepend text: no trimming and never any continuation lines.
fn apply_prepend<S>(entry: &mut OptionEntry, prepend: &str, source: &mut S)
where
    S: LineSource + ?Sized,
{
    match entry.kind {
        OptionType::Integer => apply_integer(entry, prepend),
        OptionType::Boolean => apply_boolean(entry, prepend),
        OptionType::StringList | OptionType::Path => {
            apply_strings(entry, prepend, Tail::Done, false, source)
        }
    }
}

fn apply_value<S>(entry: &mut OptionEntry, name: &str, value: &str, tail: Tail, source: &mut S)
where
    S: LineSource + ?Sized,
{
    match entry.kind {
        OptionType::Integer => {
            apply_integer(entry, value);
            skip_rest_of_line(tail, source);
        }
        OptionType::Boolean => {
            apply_boolean(entry, value);
            skip_rest_of_line(tail, source);
        }
        OptionType::Path => {
            if tail != Tail::Done {
                tracing::debug!(option = name, "Path spans several reads, dropped");
                skip_rest_of_line(tail, source);
                return;
            }
            let Some(path) = trim_path(value) else {
                tracing::debug!(option = name, value, "Path is not quoted, dropped");
                return;
            };
            let expanded = optfile_source::expand_path(path);
            apply_strings(entry, &expanded, Tail::Done, true, source);
        }
        OptionType::StringList => apply_strings(entry, value, tail, true, source),
    }
}
