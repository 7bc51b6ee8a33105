//! Configuration parsing and management.
//!
//! Configuration lives in a small TOML file (default
//! `~/.config/dirdiff/config`) and is resolved once at startup. The core
//! modules receive the relevant sections as plain data; platform selection of
//! the external diff command happens here, not inside the comparison code.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Default external diff command on Unix-like platforms.
#[cfg(not(windows))]
pub const DEFAULT_DIFF_COMMAND: &str = "diff --side-by-side --width=120 --color=always";

/// Default external diff command on Windows (assumes cygwin).
#[cfg(windows)]
pub const DEFAULT_DIFF_COMMAND: &str =
    r"C:\cygwin64\bin\diff --side-by-side --width=120 --color=always";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// External diff command settings.
    #[serde(default)]
    pub diff: DiffConfig,

    /// Tree enumeration settings.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Settings for the external diff command run on differing file pairs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiffConfig {
    /// Command line to run on each differing pair; the two file paths are
    /// appended as arguments. Falls back to the platform default when unset.
    #[serde(default)]
    pub command: Option<String>,
}

/// Settings controlling directory tree enumeration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    /// Follow directory symlinks while walking.
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Extra ignore patterns applied on top of the built-in rule that skips
    /// dot-prefixed entries. Matched against paths relative to the scan root.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl DiffConfig {
    /// The effective diff command string, after platform defaulting.
    #[must_use]
    pub fn resolved_command(&self) -> String {
        self.command
            .clone()
            .unwrap_or_else(|| DEFAULT_DIFF_COMMAND.to_string())
    }
}

impl Config {
    /// Load configuration from a file, creating a default one if it does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot read or parse the configuration file
    /// - Configuration file contains invalid TOML
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }
}
