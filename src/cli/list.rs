//! List command: enumerate variants and their output paths.

use crate::batch::enumerate_variants;
use crate::cli::common::{load_registry, print_json, CliResult};
use crate::config::Config;
use crate::kanata::relative_path;
use crate::models::ConfigVariant;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List every variant the configured filter selects
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListEntry {
    #[serde(flatten)]
    variant: ConfigVariant,
    path: PathBuf,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let registry = load_registry(config)?;
        let entries: Vec<ListEntry> = enumerate_variants(&registry, &config.filter)?
            .into_iter()
            .map(|variant| ListEntry {
                path: relative_path(&registry, &variant),
                variant,
            })
            .collect();

        if self.json {
            return print_json(&entries);
        }

        for entry in &entries {
            println!("{:<40} {}", entry.variant.to_string(), entry.path.display());
        }
        println!("\n{} variants", entries.len());

        Ok(())
    }
}
