//! Line sources and string utilities for optfile directive files
//!
//! Provides the physical-line reader that feeds the directive loader,
//! its configuration, and the small string helpers (delimiter splitting,
//! path expansion) the loader delegates to.

pub mod config;
pub mod error;
pub mod expand;
pub mod line;

pub use config::LineSourceConfig;
pub use error::{Error, Result};
pub use expand::{expand_path, split_delimited};
pub use line::{ConfigFile, LineRead, LineSource, ScriptedLineSource, Tail, TextLineSource};
