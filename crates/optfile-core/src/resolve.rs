//! Alias resolution
//!
//! Aliases may point at other aliases. Resolution walks the chain until it
//! reaches a concrete option, keeping the prepend text of the last alias
//! hop before it. Revisiting a key fails with `AliasCycle`.

use std::collections::HashSet;

use crate::entry::{Entry, OptionEntry};
use crate::registry::OptionRegistry;
use crate::{Error, Result};

/// A key resolved to its concrete option.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// Name of the concrete option.
    pub key: &'a str,
    pub entry: &'a OptionEntry,
    /// Prepend text of the alias closest to the option, if any.
    pub prepend: Option<&'a str>,
}

impl OptionRegistry {
    /// Follow aliases from `key` to a concrete option.
    pub fn resolve(&self, key: &str) -> Result<Resolved<'_>> {
        let (canonical, prepend) = self.resolve_key(key)?;
        match self.entries.get(canonical) {
            Some(Entry::Option(entry)) => Ok(Resolved {
                key: canonical,
                entry,
                prepend,
            }),
            _ => Err(Error::NotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Resolve to the canonical key name and collected prepend text.
    pub(crate) fn resolve_key<'a>(&'a self, key: &str) -> Result<(&'a str, Option<&'a str>)> {
        let mut current = key;
        let mut prepend = None;
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(current) {
                return Err(Error::AliasCycle {
                    key: key.to_string(),
                });
            }

            match self.entries.get_key_value(current) {
                None => {
                    return Err(Error::NotFound {
                        key: key.to_string(),
                    });
                }
                Some((_, Entry::Alias(alias))) => {
                    // Each hop overwrites, so the hop nearest the option wins
                    prepend = alias.prepend.as_deref();
                    current = alias.target.as_str();
                }
                Some((name, Entry::Option(_))) => return Ok((name.as_str(), prepend)),
            }
        }
    }

    pub(crate) fn resolve_mut(&mut self, key: &str) -> Result<&mut OptionEntry> {
        let canonical = self.resolve_key(key)?.0.to_string();
        match self.entries.get_mut(&canonical) {
            Some(Entry::Option(entry)) => Ok(entry),
            _ => Err(Error::NotFound {
                key: key.to_string(),
            }),
        }
    }
}
