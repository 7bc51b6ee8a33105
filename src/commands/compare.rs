use crate::diff::{self, DiffTool};
use crate::{DirdiffContext, compare, output, scanner, utils};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Compare two directory trees and print the reconciliation report.
///
/// Enumerates both trees, prints a `-- Missing` line for every file without
/// a counterpart on the other side, byte-compares every common pair, runs
/// the configured external diff command on differing pairs (skipped with
/// `brief`), and ends with the five summary lines.
///
/// # Errors
///
/// Returns an error if either directory does not exist or cannot be
/// resolved, or if the configured diff command cannot be parsed. Failures
/// on individual entries during the walk or the content pass are reported
/// as warnings and skipped.
pub fn execute(ctx: &DirdiffContext, dir_a: &str, dir_b: &str, brief: bool) -> Result<()> {
    let dir_a = utils::expand_tilde(dir_a.trim())?;
    let dir_b = utils::expand_tilde(dir_b.trim())?;

    if !dir_a.exists() {
        bail!("Directory a {} does not exist", dir_a.display());
    }
    if !dir_b.exists() {
        bail!("Directory b {} does not exist", dir_b.display());
    }

    let root_a = fs::canonicalize(&dir_a)
        .with_context(|| format!("Failed to resolve directory {}", dir_a.display()))?;
    let root_b = fs::canonicalize(&dir_b)
        .with_context(|| format!("Failed to resolve directory {}", dir_b.display()))?;

    let diff_tool = if brief {
        None
    } else {
        Some(DiffTool::new(&ctx.config.diff.resolved_command())?)
    };

    let files_a = scanner::enumerate(&root_a, &ctx.config.scan)?;
    let files_b = scanner::enumerate(&root_b, &ctx.config.scan)?;
    output::verbose(&format!(
        "Enumerated {} files under {} and {} files under {}",
        files_a.len(),
        root_a.display(),
        files_b.len(),
        root_b.display()
    ));

    let result = compare::compare(&root_a, &root_b, &files_a, &files_b);

    for rel in &result.only_in_a {
        println!("-- Missing {}", root_b.join(rel).display());
    }
    for rel in &result.only_in_b {
        println!("-- Missing {}", root_a.join(rel).display());
    }

    let different = compare_contents(&root_a, &root_b, &result, diff_tool.as_ref());

    println!("\n{} files in {}", files_a.len(), dir_a.display());
    println!("{} files in {}", files_b.len(), dir_b.display());
    println!(
        "{} files missing from {}",
        result.only_in_a.len(),
        dir_a.display()
    );
    println!(
        "{} files missing from {}",
        result.only_in_b.len(),
        dir_b.display()
    );
    println!("{different} files were different");

    Ok(())
}

/// Byte-compare every common pair and run the diff tool on differing ones.
///
/// Returns the number of differing pairs. A pair that cannot be read (file
/// vanished or became unreadable since enumeration) is skipped with a
/// warning and counted on neither side.
fn compare_contents(
    root_a: &Path,
    root_b: &Path,
    result: &compare::ComparisonResult,
    diff_tool: Option<&DiffTool>,
) -> usize {
    let mut different = 0;

    for rel in &result.common {
        let file_a = root_a.join(rel);
        let file_b = root_b.join(rel);

        match diff::files_identical(&file_a, &file_b) {
            Ok(true) => {}
            Ok(false) => {
                different += 1;
                println!("** {} and {} differ:\n", file_a.display(), file_b.display());
                if let Some(tool) = diff_tool
                    && let Err(e) = tool.run(&file_a, &file_b)
                {
                    output::warning(&format!("{e:#}"));
                }
            }
            Err(e) => {
                output::warning(&format!("Skipping {}: {e:#}", rel.display()));
            }
        }
    }

    different
}
