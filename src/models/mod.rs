//! Data models for generated layers and variants.
//!
//! This module contains the grid cell, layer and variant types shared by the
//! layer builders, the document assembler and the batch driver.

pub mod cell;
pub mod layer;
pub mod variant;

// Re-export all model types
pub use cell::{Cell, Modifier};
pub use layer::{mirror_halves, FlipScope, LayerName, LayerSpec};
pub use variant::ConfigVariant;
