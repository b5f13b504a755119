//! Generate command for the Kanata configuration matrix.

use crate::batch::{BatchGenerator, BatchReport, FsWriter, GeneratedFile, MemoryWriter};
use crate::cli::common::{load_registry, print_json, CliError, CliResult};
use crate::config::Config;
use crate::error::GenerateError;
use crate::models::ConfigVariant;
use crate::registry::Registry;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Variants highlighted in the human-readable summary when they were generated.
const SAMPLE_VARIANTS: [(&str, &str, bool, &str); 6] = [
    ("colemakdh", "default", false, "nix"),
    ("qwerty", "default", false, "win"),
    ("dvorak", "default", false, "mac"),
    ("colemakdh", "vi", false, "nix"),
    ("colemakdh", "invertedt", true, "nix"),
    ("qwerty", "default", true, "win"),
];

/// Generate Kanata configurations for every selected variant
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Output directory (defaults to the configured one, then ".")
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Only generate these alpha layouts (repeatable)
    #[arg(long, value_name = "ID")]
    pub alpha: Vec<String>,

    /// Only generate these navigation styles (repeatable)
    #[arg(long, value_name = "ID")]
    pub nav: Vec<String>,

    /// Only generate these platforms (repeatable)
    #[arg(long, value_name = "ID")]
    pub platform: Vec<String>,

    /// Skip flipped-thumb variants
    #[arg(long)]
    pub no_flip: bool,

    /// Generate everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON entry for a variant that could not be generated.
#[derive(Debug, Serialize)]
struct FailureEntry {
    variant: ConfigVariant,
    error: String,
}

/// JSON shape of the generate command.
#[derive(Debug, Serialize)]
struct GenerateResponse<'a> {
    output_dir: PathBuf,
    dry_run: bool,
    generated: &'a [GeneratedFile],
    failures: Vec<FailureEntry>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let registry = load_registry(config)?;

        // Flags replace the configured filter axis by axis
        let mut filter = config.filter.clone();
        if !self.alpha.is_empty() {
            filter.alphas.clone_from(&self.alpha);
        }
        if !self.nav.is_empty() {
            filter.navs.clone_from(&self.nav);
        }
        if !self.platform.is_empty() {
            filter.platforms.clone_from(&self.platform);
        }
        if self.no_flip {
            filter.include_flip = false;
        }

        let out_dir = self
            .out_dir
            .clone()
            .unwrap_or_else(|| config.paths.output_dir.clone());

        let batch = BatchGenerator::new(&registry, &filter)?;
        let report = if self.dry_run {
            batch.run(&mut MemoryWriter::new())?
        } else {
            batch.run(&mut FsWriter::new(&out_dir))?
        };

        if self.json {
            print_json(&GenerateResponse {
                output_dir: out_dir,
                dry_run: self.dry_run,
                generated: &report.generated,
                failures: report
                    .failures
                    .iter()
                    .map(|f| FailureEntry {
                        variant: f.variant.clone(),
                        error: f.error.to_string(),
                    })
                    .collect(),
            })?;
        } else {
            print_summary(&registry, &report, self.dry_run);
        }

        failure_outcome(&report)
    }
}

/// Maps batch failures to the command result.
///
/// Any write failure makes the run an I/O error; otherwise failures are
/// validation errors.
fn failure_outcome(report: &BatchReport) -> CliResult<()> {
    if report.is_success() {
        return Ok(());
    }

    let failed = report.failures.len();
    let message = format!("{failed} variant(s) failed to generate");
    if report
        .failures
        .iter()
        .any(|f| matches!(f.error, GenerateError::Write { .. }))
    {
        Err(CliError::io(message))
    } else {
        Err(CliError::validation(message))
    }
}

fn print_summary(registry: &Registry, report: &BatchReport, dry_run: bool) {
    let count = report.generated.len();
    if dry_run {
        println!("✓ Would generate {count} Miryoku Kanata configurations (dry run)");
    } else {
        println!("✓ Generated {count} Miryoku Kanata configurations");
    }

    println!("\nBreakdown:");
    for (platform, count) in report.count_by_platform() {
        let name = registry
            .platform(&platform)
            .map_or(platform.as_str(), |p| p.name.as_str());
        println!("  • {count} {name} configs");
    }

    let samples: Vec<&GeneratedFile> = SAMPLE_VARIANTS
        .iter()
        .filter_map(|&(alpha, nav, flip, platform)| {
            let wanted = ConfigVariant::new(alpha, nav, flip, platform);
            report.generated.iter().find(|file| file.variant == wanted)
        })
        .collect();

    if !samples.is_empty() {
        println!("\nSample configurations:");
        for file in samples {
            println!("  • {}", file.relative_path.display());
        }
    }

    if !report.failures.is_empty() {
        println!("\nFailures:");
        for failure in &report.failures {
            println!("  ✗ {}: {}", failure.variant, failure.error);
        }
    }
}
