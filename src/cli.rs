//! Command-line interface definitions for dirdiff.
//!
//! This module contains the CLI argument parsing structure using clap's
//! derive macros, kept separate from `main` so the definitions can also
//! drive shell completion generation.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::Parser;
use clap_complete::Shell;

/// Main CLI structure for dirdiff.
#[derive(Parser)]
#[command(
    name = "dirdiff",
    version = crate::VERSION,
    about = "Compare two directory trees",
    long_about = "Compares two directory trees for files that are missing on either side \
                  and runs a diff command on each file that differs. Prints statistics."
)]
pub struct Cli {
    /// First directory to compare
    #[arg(value_name = "dir-a", required_unless_present = "completions")]
    pub dir_a: Option<String>,

    /// Second directory to compare
    #[arg(value_name = "dir-b", required_unless_present = "completions")]
    pub dir_b: Option<String>,

    /// Report differing files without running the external diff command
    #[arg(short, long)]
    pub brief: bool,

    /// External diff command to run on each differing pair
    #[arg(long, value_name = "CMD", env = "DIRDIFF_DIFF_CMD")]
    pub diff_cmd: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completion scripts
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
