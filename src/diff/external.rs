use crate::output;
use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;
use tracing::{Level, debug, span};
use which::which;

/// The external diff collaborator.
///
/// Wraps a user-configurable command line that is run once per differing
/// file pair, with the two absolute file paths appended as the final
/// arguments. The command renders straight to the inherited stdout/stderr.
#[derive(Debug, Clone)]
pub struct DiffTool {
    /// Program to invoke.
    program: String,
    /// Arguments preceding the two file paths.
    args: Vec<String>,
}

impl DiffTool {
    /// Parse a diff command string into a runnable tool.
    ///
    /// Handles shell-like quoting via `shell_words`, so commands such as
    /// `diff --color=always` or `delta --syntax-theme='Monokai Extended'`
    /// work as expected. A program that cannot be found in PATH produces a
    /// warning here rather than an error; the comparison itself is still
    /// worth running.
    ///
    /// # Errors
    /// Returns an error if the command string is empty or not valid shell
    /// syntax.
    pub fn new(command: &str) -> Result<Self> {
        let span = span!(Level::DEBUG, "diff_tool", command);
        let _guard = span.enter();

        let parts = shell_words::split(command)
            .with_context(|| format!("Invalid diff command syntax: '{command}'"))?;

        if parts.is_empty() {
            bail!("Empty diff command");
        }

        let program = parts[0].clone();
        let args = parts[1..].to_vec();

        debug!(program = %program, args = ?args, "Diff command parsed");

        if which(&program).is_err() {
            output::warning(&format!("Diff program '{program}' not found in PATH"));
        }

        Ok(Self { program, args })
    }

    /// Run the diff command against a pair of files.
    ///
    /// The tool's exit status is deliberately not treated as an error:
    /// line-oriented diff utilities exit non-zero when the inputs differ,
    /// which is exactly the case we invoke them for.
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned.
    pub fn run(&self, file_a: &Path, file_b: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(file_a)
            .arg(file_b)
            .status()
            .with_context(|| format!("Failed to run diff command '{}'", self.program))?;

        debug!(code = ?status.code(), "Diff command finished");

        Ok(())
    }
}
