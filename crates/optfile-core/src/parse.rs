//! Per-type value parsers and the merge-strategy state machine
//!
//! Every parser first asks the entry's strategy whether the new value
//! replaces or combines with the current one, then marks the entry
//! `Specialized`. Combining means a sum for integers, a logical OR for
//! booleans and an ordered append for string lists.

use optfile_source::{LineSource, Tail};

use crate::entry::OptionEntry;
use crate::value::{OptionValue, Status, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    Replace,
    Combine,
}

/// Advance the strategy for one directive.
///
/// `AppendDiscardDefault` on an untouched entry becomes `Append` for good
/// and replaces the default this one time.
fn begin_merge(entry: &mut OptionEntry) -> Merge {
    match entry.strategy {
        Strategy::Default | Strategy::Replace => Merge::Replace,
        Strategy::Append => Merge::Combine,
        Strategy::AppendDiscardDefault => {
            if entry.status == Status::DefaultValue {
                entry.strategy = Strategy::Append;
                Merge::Replace
            } else {
                Merge::Combine
            }
        }
    }
}

/// Leading optionally-signed decimal integer, after leading whitespace.
///
/// Returns `None` when there is no such integer or it does not fit `i32`.
pub fn leading_integer(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// Interpret free text as a boolean.
///
/// A leading digit decides on its own (`0` is false). Otherwise the first
/// seven characters, lowercased, are searched for `false`, `true`, `no` and
/// `yes` in that order. Anything else is false.
pub fn parse_boolean(text: &str) -> bool {
    if let Some(first) = text.chars().next().filter(char::is_ascii_digit) {
        return first != '0';
    }

    let prefix: String = text.chars().take(7).collect::<String>().to_lowercase();
    if prefix.contains("false") {
        false
    } else if prefix.contains("true") {
        true
    } else if prefix.contains("no") {
        false
    } else {
        prefix.contains("yes")
    }
}

/// Apply an integer directive.
///
/// Text without a leading integer leaves the value untouched, yet the entry
/// is still marked `Specialized` and its strategy still advances.
pub(crate) fn apply_integer(entry: &mut OptionEntry, text: &str) {
    let merge = begin_merge(entry);
    if let (Some(parsed), OptionValue::Integer(current)) = (leading_integer(text), &mut entry.value)
    {
        *current = match merge {
            Merge::Replace => parsed,
            Merge::Combine => current.saturating_add(parsed),
        };
    }
    entry.mark_specialized();
}

pub(crate) fn apply_boolean(entry: &mut OptionEntry, text: &str) {
    let merge = begin_merge(entry);
    let parsed = parse_boolean(text);
    if let OptionValue::Boolean(current) = &mut entry.value {
        *current = match merge {
            Merge::Replace => parsed,
            Merge::Combine => *current || parsed,
        };
    }
    entry.mark_specialized();
}

/// Apply a string-list directive.
///
/// Until `tail` is [`Tail::Done`], further reads are pulled from `source`
/// and appended with the entry's delimiters, whatever the strategy. Pieces
/// of one physical line cut at the read limit are joined before splitting,
/// so a token straddling a cut stays whole. `trim` strips whitespace from
/// every element once the value is assembled.
pub(crate) fn apply_strings<S>(
    entry: &mut OptionEntry,
    text: &str,
    mut tail: Tail,
    trim: bool,
    source: &mut S,
) where
    S: LineSource + ?Sized,
{
    let merge = begin_merge(entry);
    let OptionValue::Strings(list) = &mut entry.value else {
        return;
    };

    if merge == Merge::Replace {
        list.clear();
    }
    entry.status = Status::Specialized;

    let mut line = text.to_string();
    while tail != Tail::Done {
        let Some((next, next_tail)) = source.read_line().into_parts() else {
            break;
        };
        if tail == Tail::NextLine {
            list.add(&line, &entry.delimiters);
            line.clear();
        }
        line.push_str(&next);
        tail = next_tail;
    }
    list.add(&line, &entry.delimiters);

    if trim {
        list.trim_all();
    }
}
