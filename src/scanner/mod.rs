//! Filesystem scanning and directory traversal.
//!
//! The scanner walks a root directory recursively and returns a sorted list
//! of the regular files below it. Entries whose name begins with a dot are
//! pruned at any depth below the root (the root's own name is never
//! inspected), which keeps version-control and tool-state directories like
//! `.git` or `.terraform` out of the comparison. Unreadable subtrees are
//! skipped with a warning rather than aborting the walk.

use crate::config::ScanConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, span, warn};
use walkdir::{DirEntry, WalkDir};

/// Whether an entry below the root has a dot-prefixed file name.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Enumerate all regular files under `root`.
///
/// `root` is expected to be an existing, canonicalized directory; the caller
/// verifies existence before invoking the scanner. The returned paths are
/// absolute, sorted lexicographically, and deduplicated, so enumeration is
/// deterministic run-to-run.
///
/// Dot-prefixed entries below the root are pruned together with their
/// subtrees, and any `ignore_patterns` from the configuration are applied to
/// the root-relative path of each file. Only regular files are returned:
/// directories, dangling symlinks, devices, and sockets are excluded. A
/// symlink whose target is a regular file is listed under its own name.
///
/// # Errors
/// Walk errors (permission denied, entries racing with deletion) are logged
/// and skipped; the function itself only fails on internal invariant
/// violations and currently always returns `Ok`.
pub fn enumerate(root: &Path, options: &ScanConfig) -> Result<Vec<PathBuf>> {
    let span = span!(Level::DEBUG, "enumerate", root = %root.display());
    let _guard = span.enter();

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(options.follow_symlinks)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Best-effort walk: unreadable subtrees must not abort the run.
                warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if !options.ignore_patterns.is_empty() {
            let rel = path.strip_prefix(root).unwrap_or(path);
            if should_ignore(rel, &options.ignore_patterns) {
                debug!(path = %path.display(), "Ignored by pattern");
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    files.dedup();

    debug!(count = files.len(), "Enumeration complete");

    Ok(files)
}

/// Determines if a given path should be ignored based on provided patterns.
#[must_use]
pub fn should_ignore(path: &Path, patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();

    for pattern in patterns {
        // Handle directory patterns (ending with /)
        if pattern.ends_with('/') {
            let dir_name = &pattern[..pattern.len() - 1];
            if path.components().any(|c| c.as_os_str() == dir_name) {
                return true;
            }
        } else if pattern.starts_with('*') && pattern.ends_with('*') && pattern.len() > 1 {
            // Contains pattern
            let search = &pattern[1..pattern.len() - 1];
            if path_str.contains(search) {
                return true;
            }
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            // Ends with pattern
            if path_str.ends_with(suffix) {
                return true;
            }
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            // Starts with pattern
            if path_str.starts_with(prefix) {
                return true;
            }
        } else {
            // Exact match or path component match
            if path_str == pattern.as_str()
                || path.components().any(|c| c.as_os_str() == pattern.as_str())
            {
                return true;
            }
        }
    }

    false
}
