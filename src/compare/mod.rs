//! Relative-path correlation between two enumerated trees.
//!
//! Two files are considered "the same file" when their paths relative to
//! their respective roots are identical. The comparator partitions the
//! enumerated files into three sets: paths present under both roots, paths
//! only present under the first root, and paths only present under the
//! second. Content comparison of the common set is the caller's concern.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, span, warn};

/// Outcome of correlating two enumerated trees.
///
/// All paths are relative to their root. The three sets are pairwise
/// disjoint: every enumerated file either has a counterpart on the other
/// side (`common`) or it does not (`only_in_a` / `only_in_b`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Relative paths present under both roots, deduplicated and sorted.
    pub common: BTreeSet<PathBuf>,

    /// Relative paths of files under the first root with no counterpart
    /// under the second, in enumeration order.
    pub only_in_a: Vec<PathBuf>,

    /// Relative paths of files under the second root with no counterpart
    /// under the first, in enumeration order.
    pub only_in_b: Vec<PathBuf>,
}

/// Correlate the files of two enumerated trees by relative path.
///
/// `files_a` and `files_b` are the scanner's output for `root_a` and
/// `root_b`. For every file the candidate path under the opposite root is
/// probed on the filesystem; existing candidates land in
/// [`ComparisonResult::common`], the rest in the per-side missing lists.
/// The first tree is processed completely before the second, so diagnostic
/// ordering downstream is stable.
///
/// A file that does not relativize against its own root (possible only if
/// the enumeration was handed foreign paths) is logged and skipped.
#[must_use]
pub fn compare(
    root_a: &Path,
    root_b: &Path,
    files_a: &[PathBuf],
    files_b: &[PathBuf],
) -> ComparisonResult {
    let span = span!(Level::DEBUG, "compare", root_a = %root_a.display(), root_b = %root_b.display());
    let _guard = span.enter();

    let mut result = ComparisonResult::default();

    correlate_side(
        root_a,
        root_b,
        files_a,
        &mut result.common,
        &mut result.only_in_a,
    );
    correlate_side(
        root_b,
        root_a,
        files_b,
        &mut result.common,
        &mut result.only_in_b,
    );

    debug!(
        common = result.common.len(),
        only_in_a = result.only_in_a.len(),
        only_in_b = result.only_in_b.len(),
        "Correlation complete"
    );

    result
}

/// Probe one side's files against the opposite root.
fn correlate_side(
    root: &Path,
    other_root: &Path,
    files: &[PathBuf],
    common: &mut BTreeSet<PathBuf>,
    missing: &mut Vec<PathBuf>,
) {
    for file in files {
        let Ok(rel) = file.strip_prefix(root) else {
            warn!(
                file = %file.display(),
                root = %root.display(),
                "File is not under its root, skipping"
            );
            continue;
        };

        if other_root.join(rel).exists() {
            common.insert(rel.to_path_buf());
        } else {
            missing.push(rel.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::scanner;
    use anyhow::Result;
    use std::fs;
    use tempfile::TempDir;

    /// Build a tree from (relative path, content) pairs and return its
    /// canonical root plus the enumerated files.
    fn tree(temp: &TempDir, name: &str, files: &[(&str, &str)]) -> Result<(PathBuf, Vec<PathBuf>)> {
        let root = temp.path().join(name);
        fs::create_dir_all(&root)?;
        for (rel, content) in files {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        let root = root.canonicalize()?;
        let files = scanner::enumerate(&root, &ScanConfig::default())?;
        Ok((root, files))
    }

    #[test]
    fn test_partition_of_disjoint_and_common_files() -> Result<()> {
        let temp = TempDir::new()?;
        let (root_a, files_a) = tree(&temp, "a", &[("a.txt", "x"), ("common.txt", "same")])?;
        let (root_b, files_b) = tree(&temp, "b", &[("b.txt", "y"), ("common.txt", "same")])?;

        let result = compare(&root_a, &root_b, &files_a, &files_b);

        assert_eq!(result.only_in_a, vec![PathBuf::from("a.txt")]);
        assert_eq!(result.only_in_b, vec![PathBuf::from("b.txt")]);
        assert_eq!(
            result.common.iter().collect::<Vec<_>>(),
            vec![Path::new("common.txt")]
        );

        Ok(())
    }

    #[test]
    fn test_sets_are_pairwise_disjoint() -> Result<()> {
        let temp = TempDir::new()?;
        let (root_a, files_a) = tree(
            &temp,
            "a",
            &[("one.txt", "1"), ("sub/two.txt", "2"), ("three.txt", "3")],
        )?;
        let (root_b, files_b) = tree(
            &temp,
            "b",
            &[("sub/two.txt", "2"), ("three.txt", "iii"), ("four.txt", "4")],
        )?;

        let result = compare(&root_a, &root_b, &files_a, &files_b);

        for rel in &result.only_in_a {
            assert!(!result.common.contains(rel));
            assert!(!result.only_in_b.contains(rel));
        }
        for rel in &result.only_in_b {
            assert!(!result.common.contains(rel));
        }
        assert_eq!(result.only_in_a, vec![PathBuf::from("one.txt")]);
        assert_eq!(result.only_in_b, vec![PathBuf::from("four.txt")]);
        assert_eq!(result.common.len(), 2);

        Ok(())
    }

    #[test]
    fn test_every_file_lands_somewhere() -> Result<()> {
        let temp = TempDir::new()?;
        let (root_a, files_a) = tree(&temp, "a", &[("x/1", "a"), ("x/2", "b"), ("y/3", "c")])?;
        let (root_b, files_b) = tree(&temp, "b", &[("x/2", "b")])?;

        let result = compare(&root_a, &root_b, &files_a, &files_b);

        for file in &files_a {
            let rel = file.strip_prefix(&root_a)?;
            assert!(
                result.common.contains(rel) ^ result.only_in_a.contains(&rel.to_path_buf()),
                "{} must be in exactly one set",
                rel.display()
            );
        }

        Ok(())
    }

    #[test]
    fn test_swapping_roots_swaps_missing_sets() -> Result<()> {
        let temp = TempDir::new()?;
        let (root_a, files_a) = tree(&temp, "a", &[("a.txt", "x"), ("common.txt", "same")])?;
        let (root_b, files_b) = tree(&temp, "b", &[("b.txt", "y"), ("common.txt", "same")])?;

        let forward = compare(&root_a, &root_b, &files_a, &files_b);
        let backward = compare(&root_b, &root_a, &files_b, &files_a);

        assert_eq!(forward.only_in_a, backward.only_in_b);
        assert_eq!(forward.only_in_b, backward.only_in_a);
        assert_eq!(forward.common, backward.common);

        Ok(())
    }

    #[test]
    fn test_idempotent_on_unchanged_trees() -> Result<()> {
        let temp = TempDir::new()?;
        let (root_a, files_a) = tree(&temp, "a", &[("f1", "x"), ("sub/f2", "y")])?;
        let (root_b, files_b) = tree(&temp, "b", &[("f1", "x"), ("other", "z")])?;

        let first = compare(&root_a, &root_b, &files_a, &files_b);
        let second = compare(&root_a, &root_b, &files_a, &files_b);
        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn test_duplicate_enumeration_entries_deduplicated() -> Result<()> {
        let temp = TempDir::new()?;
        let (root_a, mut files_a) = tree(&temp, "a", &[("common.txt", "same")])?;
        let (root_b, files_b) = tree(&temp, "b", &[("common.txt", "same")])?;

        files_a.push(root_a.join("common.txt"));

        let result = compare(&root_a, &root_b, &files_a, &files_b);
        assert_eq!(result.common.len(), 1);

        Ok(())
    }

    #[test]
    fn test_foreign_path_skipped() -> Result<()> {
        let temp = TempDir::new()?;
        let (root_a, mut files_a) = tree(&temp, "a", &[("f", "x")])?;
        let (root_b, files_b) = tree(&temp, "b", &[("f", "x")])?;

        files_a.push(PathBuf::from("/nonexistent/elsewhere"));

        let result = compare(&root_a, &root_b, &files_a, &files_b);
        assert_eq!(result.common.len(), 1);
        assert!(result.only_in_a.is_empty());

        Ok(())
    }

    #[test]
    fn test_empty_trees() -> Result<()> {
        let temp = TempDir::new()?;
        let (root_a, files_a) = tree(&temp, "a", &[])?;
        let (root_b, files_b) = tree(&temp, "b", &[])?;

        let result = compare(&root_a, &root_b, &files_a, &files_b);
        assert!(result.common.is_empty());
        assert!(result.only_in_a.is_empty());
        assert!(result.only_in_b.is_empty());

        Ok(())
    }
}
