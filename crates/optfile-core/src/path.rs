//! Quote trimming for path values
//!
//! Path directives carry a single double-quoted value on one physical line:
//!
//! ```text
//! HostsFile "~/hosts.txt"
//! ```

/// Extract the path between the leading quote and the last quote of `value`.
///
/// Anything after the last quote is discarded, as are leading quotes and
/// blanks. Returns `None` when there is no quote or nothing is left between
/// the quotes.
///
/// ```
/// use optfile_core::path::trim_path;
///
/// assert_eq!(trim_path("\"/etc/hosts\""), Some("/etc/hosts"));
/// assert_eq!(trim_path("\"/etc/hosts"), None);
/// ```
pub fn trim_path(value: &str) -> Option<&str> {
    let last_quote = value.rfind('"')?;
    let path = value[..last_quote].trim_start_matches(['"', ' ', '\t']);
    if path.is_empty() { None } else { Some(path) }
}
