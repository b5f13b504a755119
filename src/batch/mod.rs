//! Batch generation over the variant matrix.
//!
//! Enumerates every valid (alpha, nav, flip, platform) combination, checks
//! that their output paths are distinct, then generates and writes each one
//! independently. A failing variant is recorded and the rest carry on.

pub mod writer;

pub use writer::{ArtifactWriter, FsWriter, MemoryWriter};

use crate::error::{GenerateError, Result};
use crate::kanata::{ensure_unique_paths, relative_path, KanataGenerator};
use crate::models::ConfigVariant;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Restricts which variants a batch covers. Empty lists mean "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantFilter {
    /// Alpha ids to include
    pub alphas: Vec<String>,
    /// Navigation ids to include
    pub navs: Vec<String>,
    /// Platform ids to include
    pub platforms: Vec<String>,
    /// Whether flipped variants are included
    pub include_flip: bool,
}

impl Default for VariantFilter {
    fn default() -> Self {
        Self {
            alphas: Vec::new(),
            navs: Vec::new(),
            platforms: Vec::new(),
            include_flip: true,
        }
    }
}

impl VariantFilter {
    fn admits(list: &[String], id: &str) -> bool {
        list.is_empty() || list.iter().any(|wanted| wanted == id)
    }

    /// Fails on any id the registry does not know.
    pub fn validate(&self, registry: &Registry) -> Result<()> {
        for id in &self.alphas {
            registry.alpha(id)?;
        }
        for id in &self.navs {
            registry.nav(id)?;
        }
        for id in &self.platforms {
            registry.platform(id)?;
        }
        Ok(())
    }
}

/// Lists every valid variant admitted by `filter`, in registry order.
///
/// Navigation styles that are not flippable never appear with `flip`.
pub fn enumerate_variants(registry: &Registry, filter: &VariantFilter) -> Result<Vec<ConfigVariant>> {
    filter.validate(registry)?;

    let flips: &[bool] = if filter.include_flip {
        &[false, true]
    } else {
        &[false]
    };

    let mut variants = Vec::new();
    for alpha in registry.alphas() {
        if !VariantFilter::admits(&filter.alphas, &alpha.id) {
            continue;
        }
        for nav in registry.navs() {
            if !VariantFilter::admits(&filter.navs, &nav.id) {
                continue;
            }
            for &flip in flips {
                if flip && !nav.flippable {
                    continue;
                }
                for platform in registry.platforms() {
                    if !VariantFilter::admits(&filter.platforms, &platform.id) {
                        continue;
                    }
                    variants.push(ConfigVariant::new(
                        alpha.id.as_str(),
                        nav.id.as_str(),
                        flip,
                        platform.id.as_str(),
                    ));
                }
            }
        }
    }

    Ok(variants)
}

/// One successfully written document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Variant that produced the file
    pub variant: ConfigVariant,
    /// Path relative to the output root
    pub relative_path: PathBuf,
    /// Where the writer put it
    pub written_to: PathBuf,
}

/// One variant that could not be produced.
#[derive(Debug)]
pub struct VariantFailure {
    /// Variant that failed
    pub variant: ConfigVariant,
    /// Why it failed
    pub error: GenerateError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Documents written, in generation order
    pub generated: Vec<GeneratedFile>,
    /// Variants that failed, in generation order
    pub failures: Vec<VariantFailure>,
}

impl BatchReport {
    /// Returns true if every variant was written.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of written documents per platform id, in first-seen order.
    pub fn count_by_platform(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for file in &self.generated {
            match counts.iter_mut().find(|(id, _)| *id == file.variant.platform) {
                Some((_, count)) => *count += 1,
                None => counts.push((file.variant.platform.clone(), 1)),
            }
        }
        counts
    }

    /// Relative paths of all written documents.
    pub fn relative_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.generated.iter().map(|file| &file.relative_path)
    }
}

/// Drives generation of a set of variants.
pub struct BatchGenerator<'a> {
    registry: &'a Registry,
    variants: Vec<ConfigVariant>,
}

impl<'a> BatchGenerator<'a> {
    /// Prepares a batch over the variants admitted by `filter`.
    pub fn new(registry: &'a Registry, filter: &VariantFilter) -> Result<Self> {
        let variants = enumerate_variants(registry, filter)?;
        Ok(Self::with_variants(registry, variants))
    }

    /// Prepares a batch over an explicit variant list.
    pub fn with_variants(registry: &'a Registry, variants: Vec<ConfigVariant>) -> Self {
        Self { registry, variants }
    }

    /// Variants this batch will generate.
    pub fn variants(&self) -> &[ConfigVariant] {
        &self.variants
    }

    /// Generates and writes every variant.
    ///
    /// Path collisions abort before anything is written. After that, each
    /// variant is independent: failures are collected in the report.
    pub fn run<W: ArtifactWriter>(&self, writer: &mut W) -> Result<BatchReport> {
        ensure_unique_paths(self.registry, &self.variants)?;

        let generator = KanataGenerator::new(self.registry);
        let mut report = BatchReport::default();

        for variant in &self.variants {
            let relative = relative_path(self.registry, variant);
            let outcome = generator
                .generate_text(variant)
                .and_then(|text| writer.write(&relative, &text));

            match outcome {
                Ok(written_to) => {
                    debug!(%variant, path = %written_to.display(), "Generated configuration");
                    report.generated.push(GeneratedFile {
                        variant: variant.clone(),
                        relative_path: relative,
                        written_to,
                    });
                }
                Err(error) => {
                    warn!(%variant, %error, "Variant failed");
                    report.failures.push(VariantFailure {
                        variant: variant.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            generated = report.generated.len(),
            failed = report.failures.len(),
            "Batch complete"
        );
        Ok(report)
    }
}
