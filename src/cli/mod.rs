//! CLI module
//!
//! Command-line interface over the registry.
//!
//! # Commands
//!
//! - `get` - Fetch one record by id
//! - `list` - Stream every record of a kind
//! - `count` - Show the total for a kind
//! - `kinds` - List known resource kinds

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
