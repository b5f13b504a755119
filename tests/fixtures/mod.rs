//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use miryoku_kanata::config::{Config, PathConfig};
use miryoku_kanata::registry::BUILTIN_REGISTRY;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Path to the miryoku-kanata binary
pub fn miryoku_bin() -> &'static str {
    env!("CARGO_BIN_EXE_miryoku-kanata")
}

/// A scratch directory with its own (empty) config file.
///
/// Every CLI run goes through `--config` so the developer's real
/// configuration never leaks into a test.
pub struct Workspace {
    /// Keeps the directory alive
    pub temp_dir: TempDir,
    /// Config file passed with `--config`
    pub config_path: PathBuf,
}

impl Workspace {
    /// Creates a workspace with an empty config file.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Creates a workspace with the given config TOML.
    pub fn with_config(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, contents).expect("Failed to write config file");
        Self {
            temp_dir,
            config_path,
        }
    }

    /// Creates a workspace whose config carries `config`.
    pub fn with_config_struct(config: &Config) -> Self {
        let contents = toml::to_string(config).expect("Failed to serialize config");
        Self::with_config(&contents)
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default output directory for generate runs.
    pub fn out_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    /// Writes a file into the workspace and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).expect("Failed to write workspace file");
        path
    }

    /// Runs the binary with `--config` pointing at this workspace.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(miryoku_bin())
            .args(args)
            .arg("--config")
            .arg(&self.config_path)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute command")
    }
}

/// Built-in registry with textual replacements applied, in order.
pub fn registry_with(replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(BUILTIN_REGISTRY.to_string(), |acc, (from, to)| {
            acc.replacen(from, to, 1)
        })
}

/// Config that points at an output directory and nothing else.
pub fn config_with_output(output_dir: &Path) -> Config {
    Config {
        paths: PathConfig {
            output_dir: output_dir.to_path_buf(),
            registry: None,
        },
        ..Config::default()
    }
}

/// Recursively collects every `.kbd` file below `root`, sorted.
pub fn kbd_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "kbd"))
        .collect();
    files.sort();
    files
}

/// Lossy stdout of a finished command.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr of a finished command.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
