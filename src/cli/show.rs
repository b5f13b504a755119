//! Show command: print one generated document.

use crate::cli::common::{load_registry, print_json, CliError, CliResult};
use crate::config::Config;
use crate::kanata::generator::render_layer;
use crate::kanata::{relative_path, KanataGenerator};
use crate::models::{ConfigVariant, LayerName, LayerSpec};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print the Kanata configuration of a single variant
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Alpha layout id (defaults to the registry default)
    #[arg(long, value_name = "ID")]
    pub alpha: Option<String>,

    /// Navigation style id (defaults to the registry default)
    #[arg(long, value_name = "ID")]
    pub nav: Option<String>,

    /// Flip thumb-cluster layer assignments
    #[arg(long)]
    pub flip: bool,

    /// Platform id
    #[arg(long, value_name = "ID")]
    pub platform: String,

    /// Print only one layer (e.g. "nav" or "U_NAV")
    #[arg(long, value_name = "NAME", value_parser = parse_layer_name)]
    pub layer: Option<LayerName>,

    /// Print the output path instead of the document
    #[arg(long, conflicts_with = "layer")]
    pub path: bool,

    /// Output the layer grids as JSON
    #[arg(long, conflicts_with = "path")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ShowResponse<'a> {
    variant: &'a ConfigVariant,
    path: PathBuf,
    layers: Vec<&'a LayerSpec>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let registry = load_registry(config)?;

        let variant = ConfigVariant::new(
            self.alpha.as_deref().unwrap_or(registry.default_alpha()),
            self.nav.as_deref().unwrap_or(registry.default_nav()),
            self.flip,
            self.platform.as_str(),
        );

        let document = KanataGenerator::new(&registry).generate(&variant)?;

        if self.json {
            let layers = match self.layer {
                Some(name) => vec![document.layer(name)],
                None => document.layers.iter().collect(),
            };
            print_json(&ShowResponse {
                variant: &variant,
                path: relative_path(&registry, &variant),
                layers,
            })?;
        } else if self.path {
            println!("{}", relative_path(&registry, &variant).display());
        } else if let Some(name) = self.layer {
            print!("{}", render_layer(document.layer(name)));
        } else {
            print!("{}", document.render());
        }

        Ok(())
    }
}

/// Accepts a layer by short name or Kanata identifier, case-insensitively.
fn parse_layer_name(raw: &str) -> CliResult<LayerName> {
    let wanted = raw.trim().to_ascii_uppercase();
    let wanted = wanted.strip_prefix("U_").unwrap_or(&wanted);

    LayerName::ALL
        .into_iter()
        .find(|name| name.ident().strip_prefix("U_") == Some(wanted))
        .ok_or_else(|| {
            CliError::validation(format!(
                "Unknown layer '{raw}'. Expected one of: {}",
                LayerName::ALL
                    .iter()
                    .map(|n| n.ident())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}
