//! Configuration types
//!
//! Board-agnostic configuration structures and the parser for the TOML
//! subset used by `watch.toml`.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
