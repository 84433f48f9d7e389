//! Option registry and registration API
//!
//! The registry maps key names to concrete options or aliases. Keys are
//! matched exactly; there are no wildcards.

use serde::Serialize;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BTreeMap, HashMap};

use crate::entry::{AliasEntry, Entry, OptionEntry};
use crate::value::{InitialValue, OptionType, OptionValue, Status, Strategy};
use crate::{Error, Result};

/// Registry of typed options and aliases.
///
/// Lifecycle is explicit: register options, load one or more directive
/// files, then query. Loading mutates entries in place and assumes a single
/// writer; queries are only meaningful after loading has finished.
///
/// # Example
///
/// ```
/// use optfile_core::{OptionRegistry, Strategy};
/// use optfile_source::ScriptedLineSource;
///
/// let mut registry = OptionRegistry::new();
/// registry.add_integer("UDPPort", Strategy::Replace, 53).unwrap();
/// registry.add_alias("Port", "UDPPort", None).unwrap();
///
/// let mut source = ScriptedLineSource::from_lines(["Port 5353"]);
/// assert_eq!(registry.load(&mut source), 1);
/// assert_eq!(registry.get_integer("UDPPort"), 5353);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    pub(crate) entries: HashMap<String, Entry>,
}

impl OptionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn insert(&mut self, key: &str, entry: Entry) -> Result<()> {
        match self.entries.entry(key.to_string()) {
            MapEntry::Occupied(_) => Err(Error::DuplicateKey {
                key: key.to_string(),
            }),
            MapEntry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Register a concrete option.
    ///
    /// String and path defaults are split on `","`. The strategy of a path
    /// option is always `Replace`, whatever is requested.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `initial` does not fit `kind`, `DuplicateKey` if the
    /// key is already taken.
    pub fn add_option(
        &mut self,
        key: &str,
        strategy: Strategy,
        kind: OptionType,
        initial: impl Into<InitialValue>,
    ) -> Result<()> {
        let initial = initial.into();
        if !initial.fits(kind) {
            return Err(Error::TypeMismatch {
                key: key.to_string(),
                kind,
            });
        }

        tracing::trace!(key, %kind, ?strategy, "Registering option");
        self.insert(key, Entry::Option(OptionEntry::new(kind, strategy, initial)))
    }

    pub fn add_integer(&mut self, key: &str, strategy: Strategy, initial: i32) -> Result<()> {
        self.add_option(key, strategy, OptionType::Integer, initial)
    }

    pub fn add_boolean(&mut self, key: &str, strategy: Strategy, initial: bool) -> Result<()> {
        self.add_option(key, strategy, OptionType::Boolean, initial)
    }

    pub fn add_string(
        &mut self,
        key: &str,
        strategy: Strategy,
        initial: Option<&str>,
    ) -> Result<()> {
        self.add_option(key, strategy, OptionType::StringList, initial)
    }

    /// Register a path option. Paths always use `Strategy::Replace`.
    pub fn add_path(&mut self, key: &str, initial: Option<&str>) -> Result<()> {
        self.add_option(key, Strategy::Replace, OptionType::Path, initial)
    }

    /// Register `key` as an alias of `target`.
    ///
    /// `target` does not need to exist yet; it is resolved lazily. A
    /// non-empty `prepend` is applied as a synthetic value ahead of every
    /// directive that uses this alias name.
    pub fn add_alias(&mut self, key: &str, target: &str, prepend: Option<&str>) -> Result<()> {
        tracing::trace!(key, target, "Registering alias");
        self.insert(key, Entry::Alias(AliasEntry::new(target, prepend)))
    }

    /// Replace the delimiter set of the option `key` resolves to.
    pub fn set_delimiters(&mut self, key: &str, delimiters: &str) -> Result<()> {
        let entry = self.resolve_mut(key)?;
        entry.delimiters = delimiters.to_string();
        Ok(())
    }

    /// Get the raw entry stored under `key`, without alias resolution.
    pub fn raw_entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// All registered keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of registered keys, aliases included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializable view of every concrete option, keyed by name.
    pub fn snapshot(&self) -> BTreeMap<String, OptionSnapshot> {
        self.entries
            .iter()
            .filter_map(|(key, entry)| match entry {
                Entry::Option(option) => Some((key.clone(), OptionSnapshot::from(option))),
                Entry::Alias(_) => None,
            })
            .collect()
    }
}

/// Point-in-time copy of one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSnapshot {
    #[serde(rename = "type")]
    pub kind: OptionType,
    pub strategy: Strategy,
    pub status: Status,
    pub value: OptionValue,
}

impl From<&OptionEntry> for OptionSnapshot {
    fn from(entry: &OptionEntry) -> Self {
        Self {
            kind: entry.kind(),
            strategy: entry.strategy(),
            status: entry.status(),
            value: entry.value().clone(),
        }
    }
}
