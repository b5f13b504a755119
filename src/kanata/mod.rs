//! Kanata output: document assembly and file naming.

pub mod filename;
pub mod generator;

// Re-export kanata types
pub use filename::{ensure_unique_paths, file_name, relative_path};
pub use generator::{DocumentHeader, GeneratedDocument, KanataGenerator};
