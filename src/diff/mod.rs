//! Content comparison and external diff invocation.
//!
//! This module decides whether two files with the same relative path differ,
//! and hands differing pairs to an external line-oriented diff command:
//! - Byte-for-byte content comparison (no size/mtime heuristics)
//! - Shell-like parsing of the configured diff command
//! - Best-effort invocation that never aborts the run

/// Byte-level content equality
pub mod content;
/// External diff command invocation
pub mod external;

pub use content::files_identical;
pub use external::DiffTool;
