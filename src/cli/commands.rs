//! CLI commands and argument parsing

use crate::types::{ResourceId, ResourceKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the Star Wars API catalog
#[derive(Parser, Debug)]
#[command(name = "swapi-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API root URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one record by id
    Get {
        /// Resource kind (people, films, planets)
        kind: ResourceKind,
        /// Record id
        id: ResourceId,
    },

    /// Print every record of a kind, fetching pages as needed
    List {
        /// Resource kind (people, films, planets)
        kind: ResourceKind,

        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the total number of records of a kind
    Count {
        /// Resource kind (people, films, planets)
        kind: ResourceKind,
    },

    /// List the resource kinds this client knows
    Kinds,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Human-readable output
    Pretty,
}
