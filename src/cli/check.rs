//! Check command: validate registry data and the output path set.

use crate::batch::{enumerate_variants, VariantFilter};
use crate::cli::common::{
    print_json, registry_source, CliError, CliResult, ValidationMessage, ValidationResponse,
};
use crate::config::Config;
use crate::kanata::ensure_unique_paths;
use crate::registry::Registry;
use clap::Args;

/// Validate the registry and make sure every variant gets its own file
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let source = registry_source(config)?;
        let response = check_registry_source(&source);

        if self.json {
            print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Registry is valid ({} variants)", response.variants);
            } else {
                println!("✗ Registry has problems");
            }
            if !response.errors.is_empty() {
                println!("\nIssues:");
                for msg in &response.errors {
                    println!("  ✗ {}", msg.message);
                }
            }
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation("Registry validation failed"))
        }
    }
}

/// Runs every registry check and collects all findings.
///
/// The full variant matrix is checked for path collisions regardless of any
/// configured filter.
pub fn check_registry_source(source: &str) -> ValidationResponse {
    let registry = match Registry::from_toml_str_unchecked(source) {
        Ok(registry) => registry,
        Err(error) => return invalid(vec![error_message(&error)]),
    };

    let problems = registry.problems();
    if !problems.is_empty() {
        return invalid(problems.iter().map(error_message).collect());
    }

    let outcome = enumerate_variants(&registry, &VariantFilter::default())
        .and_then(|variants| ensure_unique_paths(&registry, &variants).map(|()| variants.len()));

    match outcome {
        Ok(variants) => ValidationResponse {
            valid: true,
            variants,
            errors: Vec::new(),
        },
        Err(error) => invalid(vec![error_message(&error)]),
    }
}

fn invalid(errors: Vec<ValidationMessage>) -> ValidationResponse {
    ValidationResponse {
        valid: false,
        variants: 0,
        errors,
    }
}

fn error_message(error: &impl std::fmt::Display) -> ValidationMessage {
    ValidationMessage {
        severity: "error".to_string(),
        message: error.to_string(),
    }
}
