//! Error types for registry loading and document generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the generation core.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

/// Everything that can go wrong between a parameter tuple and a written file.
///
/// Parameter and data errors are raised by validation before any layer is
/// built, so a document is either produced whole or not at all.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No alpha layout registered under this id.
    #[error("Unknown alpha layout '{0}'")]
    UnknownAlphaId(String),

    /// No navigation variant registered under this id.
    #[error("Unknown navigation variant '{0}'")]
    UnknownNavId(String),

    /// No platform registered under this id.
    #[error("Unknown platform '{0}'")]
    UnknownPlatformId(String),

    /// The navigation variant cannot be combined with flipped thumbs.
    #[error("Navigation variant '{nav}' does not support flipped thumbs")]
    InvalidVariantCombination {
        /// Offending navigation id
        nav: String,
    },

    /// An alpha layout is not exactly 30 unique keys.
    #[error("Alpha layout '{id}' is invalid: {reason}")]
    LayoutLengthError {
        /// Layout id
        id: String,
        /// What is wrong with the key list
        reason: String,
    },

    /// Two variants map onto the same output path.
    #[error("Variants {first} and {second} both map to '{path}'")]
    FilenameCollisionError {
        /// Colliding relative path
        path: PathBuf,
        /// First variant that claimed the path
        first: String,
        /// Second variant that claimed the path
        second: String,
    },

    /// Registry TOML could not be parsed.
    #[error("Failed to parse registry data: {0}")]
    RegistryParse(#[from] toml::de::Error),

    /// The same id appears twice in one registry table.
    #[error("Duplicate {table} id '{id}' in registry")]
    DuplicateRegistryId {
        /// Table name (alpha, nav or platform)
        table: &'static str,
        /// Repeated id
        id: String,
    },

    /// A registry id cannot be used as a filename segment.
    #[error("Invalid {table} id '{id}': ids must be lowercase letters and digits only")]
    InvalidRegistryId {
        /// Table name (alpha, nav or platform)
        table: &'static str,
        /// Rejected id
        id: String,
    },

    /// A registry id collides with a fixed filename segment.
    #[error("Reserved {table} id '{id}': it is already used as a filename segment")]
    ReservedRegistryId {
        /// Table name
        table: &'static str,
        /// Rejected id
        id: String,
    },

    /// A key, cell or chord is not a single Kanata token.
    #[error("Invalid key '{token}' in {table} '{id}': keys must be non-empty with no whitespace or parentheses")]
    InvalidKeyToken {
        /// Table name (alpha, nav or platform)
        table: &'static str,
        /// Entry id
        id: String,
        /// Rejected key text
        token: String,
    },

    /// The registry's declared default does not exist.
    #[error("Default {table} '{id}' is not defined in the registry")]
    UnknownDefault {
        /// Table name (alpha or nav)
        table: &'static str,
        /// Missing id
        id: String,
    },

    /// Writing a generated document failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Whether this error comes from bad parameters or data rather than I/O.
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Write { .. })
    }
}
