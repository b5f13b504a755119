//! The four-axis variant tuple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One (alpha, nav, flip, platform) combination.
///
/// Holds registry ids only; resolve it against a
/// [`Registry`](crate::registry::Registry) before generating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigVariant {
    /// Alpha layout id (e.g. "colemakdh")
    pub alpha: String,
    /// Navigation variant id (e.g. "default")
    pub nav: String,
    /// Whether thumb-cluster layer assignments are flipped
    pub flip: bool,
    /// Platform id (e.g. "nix")
    pub platform: String,
}

impl ConfigVariant {
    /// Creates a variant from its four parameters.
    pub fn new(
        alpha: impl Into<String>,
        nav: impl Into<String>,
        flip: bool,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            alpha: alpha.into(),
            nav: nav.into(),
            flip,
            platform: platform.into(),
        }
    }
}

impl fmt::Display for ConfigVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.alpha,
            self.nav,
            if self.flip { "flip" } else { "noflip" },
            self.platform
        )
    }
}
