//! Registry entries: concrete options and aliases

use crate::value::{InitialValue, OptionType, OptionValue, Status, Strategy};

/// Delimiter set every entry starts with.
pub const DEFAULT_DELIMITERS: &str = ",";

/// A concrete, typed option.
///
/// The strategy is mutable state: `AppendDiscardDefault` turns into
/// `Append` after the first directive, which makes a registry sensitive
/// to load order and not reusable for a second independent load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub(crate) kind: OptionType,
    pub(crate) strategy: Strategy,
    pub(crate) status: Status,
    pub(crate) value: OptionValue,
    pub(crate) delimiters: String,
}

impl OptionEntry {
    /// Build an entry holding its default value.
    ///
    /// Path entries always get `Strategy::Replace`.
    pub(crate) fn new(kind: OptionType, strategy: Strategy, initial: InitialValue) -> Self {
        let strategy = match kind {
            OptionType::Path => Strategy::Replace,
            _ => strategy,
        };

        Self {
            kind,
            strategy,
            status: Status::DefaultValue,
            value: initial.into_value(DEFAULT_DELIMITERS),
            delimiters: DEFAULT_DELIMITERS.to_string(),
        }
    }

    pub fn kind(&self) -> OptionType {
        self.kind
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    pub fn delimiters(&self) -> &str {
        &self.delimiters
    }

    pub(crate) fn mark_specialized(&mut self) {
        self.status = Status::Specialized;
    }
}

/// A key that redirects to another key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub(crate) target: String,
    pub(crate) prepend: Option<String>,
}

impl AliasEntry {
    /// Empty prepend text means none.
    pub(crate) fn new(target: impl Into<String>, prepend: Option<&str>) -> Self {
        Self {
            target: target.into(),
            prepend: prepend.filter(|p| !p.is_empty()).map(str::to_string),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn prepend(&self) -> Option<&str> {
        self.prepend.as_deref()
    }
}

/// Anything stored under a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Option(OptionEntry),
    Alias(AliasEntry),
}
