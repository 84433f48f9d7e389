//! Typed option registry and directive loader for optfile.
//!
//! Hosts register typed options (integer, boolean, string list, path) and
//! aliases, then load a line-oriented directive file into them. Each option
//! has a merge [`Strategy`] deciding whether a repeated directive replaces,
//! accumulates into, or first discards the default and then accumulates.
//!
//! ```text
//! UDPPort 5353
//! UDPServer = 1.1.1.1, 8.8.8.8
//! HostsFile "~/hosts.txt"
//! ```
//!
//! Loading is lenient: unknown keys and malformed values never abort a
//! load. Only setup operations (registration, opening files) return errors.

pub mod access;
pub mod entry;
pub mod error;
pub mod parse;
pub mod path;
pub mod reader;
pub mod registry;
pub mod resolve;
pub mod schema;
pub mod value;

pub use entry::{AliasEntry, Entry, OptionEntry, DEFAULT_DELIMITERS};
pub use error::{Error, Result};
pub use parse::{leading_integer, parse_boolean};
pub use registry::{OptionRegistry, OptionSnapshot};
pub use resolve::Resolved;
pub use schema::{AliasSpec, OptionSpec, Schema};
pub use value::{InitialValue, OptionType, OptionValue, Status, Strategy, StringList};
