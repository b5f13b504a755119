//! Shared types for CLI command handlers.

use crate::config::Config;
use crate::error::GenerateError;
use crate::registry::{Registry, BUILTIN_REGISTRY};
use serde::Serialize;
use std::fmt;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input or generated output failed validation
    ValidationError = 1,
    /// Reading or writing files failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to [`std::process::exit`].
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad ids, invalid registry, failed variants
    Validation,
    /// File system problems
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// What went wrong, for exit code selection
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<GenerateError> for CliError {
    fn from(error: GenerateError) -> Self {
        if error.is_validation() {
            Self::validation(error.to_string())
        } else {
            Self::io(error.to_string())
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the registry selected by `config`.
///
/// An unreadable file is an I/O error; bad content is a validation error.
pub fn load_registry(config: &Config) -> CliResult<Registry> {
    let content = registry_source(config)?;
    Ok(Registry::from_toml_str(&content)?)
}

/// Raw TOML of the registry selected by `config`.
pub fn registry_source(config: &Config) -> CliResult<String> {
    match &config.paths.registry {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            CliError::io(format!(
                "Failed to read registry file {}: {e}",
                path.display()
            ))
        }),
        None => Ok(BUILTIN_REGISTRY.to_string()),
    }
}

/// Writes a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// One finding reported by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Human-readable description
    pub message: String,
}

/// JSON shape of the `check` command.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True when no errors were found
    pub valid: bool,
    /// Number of variants the registry yields
    pub variants: usize,
    /// Findings, errors first
    pub errors: Vec<ValidationMessage>,
}
