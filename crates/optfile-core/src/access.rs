//! Typed getters and setters
//!
//! Every accessor resolves aliases first, so an alias and its canonical
//! name are interchangeable. Unknown keys read as absent or zero.

use crate::entry::OptionEntry;
use crate::registry::OptionRegistry;
use crate::value::{InitialValue, OptionValue, StringList};
use crate::{Error, Result};

impl OptionRegistry {
    /// The concrete option `key` resolves to.
    pub fn entry(&self, key: &str) -> Option<&OptionEntry> {
        self.resolve(key).ok().map(|resolved| resolved.entry)
    }

    pub fn get_value(&self, key: &str) -> Option<&OptionValue> {
        self.entry(key).map(OptionEntry::value)
    }

    /// First element of a string or path option.
    pub fn get_raw_string(&self, key: &str) -> Option<&str> {
        self.get_value(key)?.as_strings()?.first()
    }

    /// Full list of a string or path option, `None` when empty.
    pub fn get_string_list(&self, key: &str) -> Option<&StringList> {
        self.get_value(key)?
            .as_strings()
            .filter(|list| !list.is_empty())
    }

    pub fn get_string_count(&self, key: &str) -> usize {
        self.get_value(key)
            .and_then(OptionValue::as_strings)
            .map_or(0, StringList::len)
    }

    pub fn get_integer(&self, key: &str) -> i32 {
        self.get_value(key)
            .and_then(OptionValue::as_integer)
            .unwrap_or(0)
    }

    pub fn get_boolean(&self, key: &str) -> bool {
        self.get_value(key)
            .and_then(OptionValue::as_boolean)
            .unwrap_or(false)
    }

    /// Overwrite the stored value without touching status or strategy.
    ///
    /// Meant for adjusting compiled-in defaults before a load; merge
    /// behaviour stays as registered.
    pub fn set_default(&mut self, key: &str, value: impl Into<InitialValue>) -> Result<()> {
        let value = value.into();
        let entry = self.resolve_mut(key)?;
        if !value.fits(entry.kind) {
            return Err(Error::TypeMismatch {
                key: key.to_string(),
                kind: entry.kind,
            });
        }

        entry.value = value.into_value(&entry.delimiters);
        Ok(())
    }
}
