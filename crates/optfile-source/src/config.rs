//! Line source configuration

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default physical line length, in bytes, before a line is split into chunks.
pub const DEFAULT_MAX_LINE_LEN: usize = 2048;

/// Default character that marks a physical line as continued on the next one.
pub const DEFAULT_CONTINUATION: char = '\\';

/// Settings for [`TextLineSource`](crate::TextLineSource).
///
/// Hosts can embed this in their own TOML configuration:
///
/// ```toml
/// max_line_len = 4096
/// continuation = "\\"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSourceConfig {
    /// Longest physical line delivered in one read. Longer lines are
    /// delivered as several chunks flagged as needing continuation.
    pub max_line_len: usize,

    /// Trailing character that joins a physical line with the next one.
    /// `None` disables explicit continuation.
    pub continuation: Option<char>,
}

impl Default for LineSourceConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            continuation: Some(DEFAULT_CONTINUATION),
        }
    }
}

impl LineSourceConfig {
    /// Reject settings the reader cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.max_line_len == 0 {
            return Err(Error::InvalidConfig {
                message: "max_line_len must be greater than zero".into(),
            });
        }
        if matches!(self.continuation, Some('\n' | '\r')) {
            return Err(Error::InvalidConfig {
                message: "continuation cannot be a line terminator".into(),
            });
        }
        Ok(())
    }
}
