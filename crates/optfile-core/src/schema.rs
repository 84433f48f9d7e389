//! Declarative option schema, loaded from TOML
//!
//! Lets a host describe its options in a file instead of code.
//!
//! # Example TOML
//!
//! ```toml
//! [[option]]
//! key = "UDPServer"
//! type = "string"
//! strategy = "append-discard-default"
//! default = "1.2.4.8,114.114.114.114"
//! delimiters = ",;"
//!
//! [[option]]
//! key = "HostsFile"
//! type = "path"
//!
//! [[alias]]
//! key = "UDPGroup"
//! target = "UDPServer"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::registry::OptionRegistry;
use crate::value::{InitialValue, OptionType, Strategy};
use crate::{Error, Result};

/// Complete schema: options first, then aliases.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Schema {
    #[serde(default, rename = "option")]
    pub options: Vec<OptionSpec>,
    #[serde(default, rename = "alias")]
    pub aliases: Vec<AliasSpec>,
}

/// One concrete option.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OptionSpec {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: OptionType,
    #[serde(default)]
    pub strategy: Strategy,
    /// Integer, boolean or string, matching `type`. Zero value when absent.
    #[serde(default)]
    pub default: Option<toml::Value>,
    /// Replaces the `","` delimiter set.
    #[serde(default)]
    pub delimiters: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AliasSpec {
    pub key: String,
    pub target: String,
    #[serde(default)]
    pub prepend: Option<String>,
}

impl OptionSpec {
    fn initial_value(&self) -> Result<InitialValue> {
        let mismatch = || Error::TypeMismatch {
            key: self.key.clone(),
            kind: self.kind,
        };

        let Some(default) = &self.default else {
            return Ok(InitialValue::zero(self.kind));
        };

        match (self.kind, default) {
            (OptionType::Integer, toml::Value::Integer(value)) => i32::try_from(*value)
                .map(InitialValue::Integer)
                .map_err(|_| Error::Schema {
                    message: format!("default for {} does not fit in 32 bits", self.key),
                }),
            (OptionType::Boolean, toml::Value::Boolean(value)) => Ok(InitialValue::Boolean(*value)),
            (OptionType::StringList | OptionType::Path, toml::Value::String(value)) => {
                Ok(InitialValue::from(value.as_str()))
            }
            _ => Err(mismatch()),
        }
    }
}

impl Schema {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Schema {
            message: e.to_string(),
        })
    }

    /// Read and parse a schema file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| optfile_source::Error::file_open(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Schema { message } => Error::Schema {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }

    /// Register every option and alias into a fresh registry.
    pub fn build(&self) -> Result<OptionRegistry> {
        let mut registry = OptionRegistry::new();

        for option in &self.options {
            registry.add_option(
                &option.key,
                option.strategy,
                option.kind,
                option.initial_value()?,
            )?;
            if let Some(delimiters) = &option.delimiters {
                registry.set_delimiters(&option.key, delimiters)?;
                if let Some(toml::Value::String(text)) = &option.default {
                    // Re-split the default with the custom delimiters
                    registry.set_default(&option.key, text.as_str())?;
                }
            }
        }

        for alias in &self.aliases {
            registry.add_alias(&alias.key, &alias.target, alias.prepend.as_deref())?;
        }

        tracing::debug!(
            options = self.options.len(),
            aliases = self.aliases.len(),
            "Built registry from schema"
        );
        Ok(registry)
    }
}
