//! CLI command handlers for miryoku-kanata.
//!
//! Each subcommand has an `Args` struct parsed by clap and an `execute`
//! method that receives the merged configuration.

pub mod check;
pub mod common;
pub mod generate;
pub mod list;
pub mod show;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use generate::GenerateArgs;
pub use list::ListArgs;
pub use show::ShowArgs;
