//! CLI command runner

use super::commands::{Cli, Commands, OutputFormat};
use crate::client::SwapiClient;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::record::Record;
use crate::registry::Registry;
use crate::types::ResourceKind;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Executes parsed CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve configuration from the config file and flags
    pub fn load_config(&self) -> Result<CatalogConfig> {
        let config = match &self.cli.config {
            Some(path) => CatalogConfig::load(path)?,
            None => CatalogConfig::default(),
        };
        let config = match &self.cli.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        };
        config.validate()?;
        Ok(config)
    }

    /// Run against the configured SWAPI deployment, writing to stdout
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        info!(base_url = %config.base_url, "Using catalog");
        let registry = Registry::new(Arc::new(SwapiClient::from_config(&config)?));

        let mut stdout = std::io::stdout();
        self.execute(&registry, &mut stdout).await?;
        stdout.flush()?;
        Ok(())
    }

    /// Run the command against `registry`, writing results to `out`
    pub async fn execute<W: Write>(&self, registry: &Registry, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Get { kind, id } => {
                let record = registry.get(*kind, *id).await?;
                self.write_record(out, &record)?;
            }
            Commands::List { kind, limit } => {
                let mut sequence = registry.all(*kind).await?;
                let limit = limit.unwrap_or(usize::MAX);
                let mut written = 0;
                while written < limit {
                    let Some(record) = sequence.advance().await? else {
                        break;
                    };
                    self.write_record(out, &record)?;
                    written += 1;
                }
                info!(kind = %kind, written, total = sequence.count(), "Listed records");
            }
            Commands::Count { kind } => {
                let sequence = registry.all(*kind).await?;
                match self.cli.format {
                    OutputFormat::Json => {
                        let line = json!({ "kind": kind, "count": sequence.count() });
                        writeln!(out, "{line}")?;
                    }
                    OutputFormat::Pretty => writeln!(out, "{sequence}")?,
                }
            }
            Commands::Kinds => {
                for kind in registry.kinds() {
                    self.write_kind(out, kind)?;
                }
            }
        }
        Ok(())
    }

    fn write_record<W: Write>(&self, out: &mut W, record: &Record) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
            OutputFormat::Pretty => writeln!(out, "{record}")?,
        }
        Ok(())
    }

    fn write_kind<W: Write>(&self, out: &mut W, kind: ResourceKind) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                let line = json!({ "kind": kind, "endpoint": kind.endpoint() });
                writeln!(out, "{line}")?;
            }
            OutputFormat::Pretty => writeln!(out, "{} (/{}/)", kind, kind.endpoint())?,
        }
        Ok(())
    }
}
