//! Configuration types
//!
//! Board-agnostic configuration for the status panel, parsed from the
//! embedded `keyboard.toml`.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
