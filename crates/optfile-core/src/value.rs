//! Value model for registered options

use serde::{Deserialize, Serialize};
use std::fmt;

use optfile_source::split_delimited;

/// Declared type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Integer,
    Boolean,
    #[serde(rename = "string")]
    StringList,
    /// A string list whose value is a single quoted path.
    Path,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Integer => write!(f, "integer"),
            OptionType::Boolean => write!(f, "boolean"),
            OptionType::StringList => write!(f, "string"),
            OptionType::Path => write!(f, "path"),
        }
    }
}

/// How repeated directives for one key combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Default,
    Replace,
    Append,
    /// The first directive discards the default, later ones append.
    AppendDiscardDefault,
}

/// Whether an option still holds its compiled-in default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    DefaultValue,
    Specialized,
}

/// Ordered sequence of strings, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringList {
    items: Vec<String>,
}

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list by splitting `text` on any of `delimiters`.
    pub fn split(text: &str, delimiters: &str) -> Self {
        let mut list = Self::new();
        list.add(text, delimiters);
        list
    }

    /// Split `text` on `delimiters` and append every segment in order.
    pub fn add(&mut self, text: &str, delimiters: &str) {
        self.items
            .extend(split_delimited(text, delimiters).map(str::to_string));
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Strip surrounding whitespace from every element.
    ///
    /// Elements that were all whitespace stay in place as empty strings.
    pub fn trim_all(&mut self) {
        for item in &mut self.items {
            let trimmed = item.trim();
            if trimmed.len() != item.len() {
                *item = trimmed.to_string();
            }
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Join the elements with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Stored value of a concrete option.
///
/// Path options share the `Strings` variant with string lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i32),
    Boolean(bool),
    Strings(StringList),
}

impl OptionValue {
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            OptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            OptionValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&StringList> {
        match self {
            OptionValue::Strings(list) => Some(list),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Integer(value) => write!(f, "{}", value),
            OptionValue::Boolean(value) => write!(f, "{}", value),
            OptionValue::Strings(list) => write!(f, "[{}]", list.join(", ")),
        }
    }
}

/// Default value supplied at registration or through `set_default`.
///
/// Text is split on the entry's delimiters; `None` means an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialValue {
    Integer(i32),
    Boolean(bool),
    Text(Option<String>),
}

impl InitialValue {
    /// Zero value for a declared type.
    pub fn zero(kind: OptionType) -> Self {
        match kind {
            OptionType::Integer => InitialValue::Integer(0),
            OptionType::Boolean => InitialValue::Boolean(false),
            OptionType::StringList | OptionType::Path => InitialValue::Text(None),
        }
    }

    /// Whether this value can initialize an option of `kind`.
    pub fn fits(&self, kind: OptionType) -> bool {
        matches!(
            (self, kind),
            (InitialValue::Integer(_), OptionType::Integer)
                | (InitialValue::Boolean(_), OptionType::Boolean)
                | (
                    InitialValue::Text(_),
                    OptionType::StringList | OptionType::Path
                )
        )
    }

    pub(crate) fn into_value(self, delimiters: &str) -> OptionValue {
        match self {
            InitialValue::Integer(value) => OptionValue::Integer(value),
            InitialValue::Boolean(value) => OptionValue::Boolean(value),
            InitialValue::Text(text) => OptionValue::Strings(
                text.map(|t| StringList::split(&t, delimiters))
                    .unwrap_or_default(),
            ),
        }
    }
}

impl From<i32> for InitialValue {
    fn from(value: i32) -> Self {
        InitialValue::Integer(value)
    }
}

impl From<bool> for InitialValue {
    fn from(value: bool) -> Self {
        InitialValue::Boolean(value)
    }
}

impl From<&str> for InitialValue {
    fn from(value: &str) -> Self {
        InitialValue::Text(Some(value.to_string()))
    }
}

impl From<String> for InitialValue {
    fn from(value: String) -> Self {
        InitialValue::Text(Some(value))
    }
}

impl From<Option<&str>> for InitialValue {
    fn from(value: Option<&str>) -> Self {
        InitialValue::Text(value.map(str::to_string))
    }
}
