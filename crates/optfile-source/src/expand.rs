//! String helpers used by the directive loader

use std::path::Path;

/// Split `text` on any character of `delimiters`, skipping empty segments.
///
/// An empty delimiter set yields the whole text as a single segment.
///
/// ```
/// use optfile_source::split_delimited;
///
/// let parts: Vec<&str> = split_delimited("a,b;;c", ",;").collect();
/// assert_eq!(parts, vec!["a", "b", "c"]);
/// ```
pub fn split_delimited<'a>(text: &'a str, delimiters: &'a str) -> impl Iterator<Item = &'a str> {
    text.split(move |c: char| delimiters.contains(c))
        .filter(|segment| !segment.is_empty())
}

/// Expand a leading `~` to the home directory and `$NAME` / `${NAME}`
/// references from the process environment.
///
/// Unset variables and an unknown home directory leave the text verbatim.
pub fn expand_path(raw: &str) -> String {
    let home = dirs::home_dir();
    expand_path_with(raw, home.as_deref(), |name| std::env::var(name).ok())
}

/// [`expand_path`] with explicit home directory and variable lookup.
pub fn expand_path_with<F>(raw: &str, home: Option<&Path>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let homed = match (raw.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            format!("{}{}", home.display(), rest)
        }
        _ => raw.to_string(),
    };

    expand_variables(&homed, lookup)
}

fn expand_variables<F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    let name = &braced[..end];
                    match lookup(name) {
                        Some(value) if !name.is_empty() => out.push_str(&value),
                        _ => out.push_str(&rest[pos..pos + 1 + 1 + end + 1]),
                    }
                    rest = &braced[end + 1..];
                }
                None => {
                    out.push_str(&rest[pos..]);
                    rest = "";
                }
            }
            continue;
        }

        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];
        match lookup(name) {
            Some(value) if !name.is_empty() => out.push_str(&value),
            _ => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    out.push_str(rest);
    out
}
