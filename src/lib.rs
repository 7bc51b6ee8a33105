#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Dirdiff - Directory Tree Comparison
//!
//! Dirdiff compares two directory trees and reports, for each side, the files
//! that are present on one side but absent on the other, plus the files that
//! exist on both sides with differing contents. Each differing pair is handed
//! to an external line-oriented diff command for display, and a short summary
//! is printed at the end.
//!
//! ## Architecture
//!
//! The codebase is organized into several key modules:
//!
//! - [`scanner`]: Filesystem scanning and directory traversal
//! - [`compare`]: Relative-path correlation between two enumerated trees
//! - [`diff`]: Byte-level content comparison and the external diff command
//! - [`commands`]: Command implementations wiring the core together
//! - [`config`]: Configuration parsing and management
//! - [`output`]: Output formatting and verbosity control
//! - [`utils`]: Utility functions and helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use dirdiff::DirdiffContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = DirdiffContext::new()?;
//! dirdiff::commands::compare::execute(&ctx, "/etc/skel", "/home/user", true)?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Relative-path correlation between two enumerated trees.
pub mod compare;

/// Configuration parsing, validation, and management.
pub mod config;

/// Content comparison and external diff invocation.
pub mod diff;

/// Output formatting and verbosity control.
pub mod output;

/// Filesystem scanning and directory traversal utilities.
pub mod scanner;

/// Utility functions and helpers.
pub mod utils;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the dirdiff binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/dirdiff/config";

/// Central context for all dirdiff operations.
///
/// Holds the configuration path and the loaded configuration. The context is
/// resolved once at startup; the core modules receive everything they need as
/// plain data and never consult ambient process state themselves.
#[derive(Debug, Clone)]
pub struct DirdiffContext {
    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl DirdiffContext {
    /// Creates a new `DirdiffContext` by loading the configuration from the
    /// default path.
    ///
    /// The `DIRDIFF_CONFIG_PATH` environment variable overrides the default
    /// location (`~/.config/dirdiff/config`).
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined or if the
    /// configuration file cannot be read or created.
    pub fn new() -> Result<Self> {
        let config_path = if let Ok(path) = std::env::var("DIRDIFF_CONFIG_PATH") {
            PathBuf::from(path)
        } else {
            let home = dirs::home_dir().context("Could not find home directory")?;
            home.join(DEFAULT_CONFIG_PATH)
        };

        let config = config::Config::load(&config_path)?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Creates a new `DirdiffContext` with an explicit configuration path.
    /// This avoids the need for environment variable manipulation in tests.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be loaded or created.
    pub fn new_explicit(config_path: PathBuf) -> Result<Self> {
        let config = config::Config::load(&config_path)?;

        Ok(Self {
            config_path,
            config,
        })
    }
}
