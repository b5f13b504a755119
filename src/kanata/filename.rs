//! Output naming for generated variants.
//!
//! `miryoku-kanata[-{alpha}][-flip][-{nav}]--{platform}.kbd`, stored under
//! `{alpha}/{platform}/`. Default alpha and nav segments are omitted.

use crate::error::{GenerateError, Result};
use crate::models::ConfigVariant;
use crate::registry::Registry;
use std::collections::HashMap;
use std::path::PathBuf;

/// Leading part of every file name.
pub const FILE_PREFIX: &str = "miryoku-kanata";

/// Extension of every generated file.
pub const FILE_EXTENSION: &str = "kbd";

/// Segment marking flipped thumbs.
pub const FLIP_SEGMENT: &str = "flip";

/// Builds the file name for a variant.
///
/// Registry ids are restricted to `[a-z0-9]+`, so `-` only ever separates
/// segments and `--` only ever precedes the platform. Alpha and platform
/// also pick the directory, so within one directory the name after the
/// alpha segment is one of `flip`, `{nav}` or `flip-{nav}`. Those only stay
/// distinct because no nav may be called [`FLIP_SEGMENT`], which the
/// registry rejects.
pub fn file_name(registry: &Registry, variant: &ConfigVariant) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if variant.alpha != registry.default_alpha() {
        parts.push(&variant.alpha);
    }
    if variant.flip {
        parts.push(FLIP_SEGMENT);
    }
    if variant.nav != registry.default_nav() {
        parts.push(&variant.nav);
    }

    let mut name = String::from(FILE_PREFIX);
    if !parts.is_empty() {
        name.push('-');
        name.push_str(&parts.join("-"));
    }
    format!("{name}--{}.{FILE_EXTENSION}", variant.platform)
}

/// Path of a variant's file relative to the output directory.
pub fn relative_path(registry: &Registry, variant: &ConfigVariant) -> PathBuf {
    PathBuf::from(&variant.alpha)
        .join(&variant.platform)
        .join(file_name(registry, variant))
}

/// Fails if two variants would be written to the same path.
pub fn ensure_unique_paths(registry: &Registry, variants: &[ConfigVariant]) -> Result<()> {
    let mut claimed: HashMap<PathBuf, &ConfigVariant> = HashMap::with_capacity(variants.len());

    for variant in variants {
        let path = relative_path(registry, variant);
        if let Some(previous) = claimed.get(&path) {
            return Err(GenerateError::FilenameCollisionError {
                path,
                first: previous.to_string(),
                second: variant.to_string(),
            });
        }
        claimed.insert(path, variant);
    }

    Ok(())
}
