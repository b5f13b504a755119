//! Miryoku Kanata configuration generator.
//!
//! Builds the ten-layer Miryoku keymap for a 36-key split keyboard as Kanata
//! `.kbd` documents, one per combination of alpha layout, navigation style,
//! thumb flip and host platform.

// Module declarations
pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod kanata;
pub mod layers;
pub mod models;
pub mod registry;

pub use error::{GenerateError, Result};
