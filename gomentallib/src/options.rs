//! Input options for an analysis run.
//!
//! Everything that shapes a run lives in one [`AnalyzeOptions`] value that is
//! passed to [`crate::aggregate`]; there is no process-wide state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Directory names that are never analysed, whatever the options say.
///
/// Version control metadata, editor settings and vendored dependencies.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    ".github",
    ".hg",
    ".svn",
    ".idea",
    ".vscode",
    "node_modules",
    "vendor",
];

/// Directory holding Go test fixtures. Skipped while test files are excluded.
pub const TESTDATA_DIR: &str = "testdata";

/// Deepest grouping level accepted for `depth`.
pub const MAX_DEPTH: usize = 255;

/// Clamp a caller-supplied depth into `1..=MAX_DEPTH`.
///
/// Zero and negative values become 1, oversized values become [`MAX_DEPTH`].
/// This is a silent normalization, never an error.
pub fn clamp_depth(depth: i64) -> usize {
    if depth < 1 {
        1
    } else if depth as u64 > MAX_DEPTH as u64 {
        MAX_DEPTH
    } else {
        depth as usize
    }
}

/// Options for analysing a tree of Go sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Number of path segments below the root kept in a display key
    pub depth: usize,
    /// Extra directory names to skip, merged with [`DEFAULT_SKIP_DIRS`]
    pub skip: BTreeSet<String>,
    /// Include `_test.go` files (and stop skipping `testdata/`)
    pub include_tests: bool,
    /// Drop rows for directories without any Go files
    pub hide_empty: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            depth: 1,
            skip: BTreeSet::new(),
            include_tests: false,
            hide_empty: false,
        }
    }
}

impl AnalyzeOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping depth. Out-of-range values are clamped.
    pub fn depth(mut self, depth: i64) -> Self {
        self.depth = clamp_depth(depth);
        self
    }

    /// Skip directories with this base name.
    pub fn skip(mut self, name: impl Into<String>) -> Self {
        self.skip.insert(name.into());
        self
    }

    /// Skip several directory names.
    pub fn skip_many<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set whether `_test.go` files are analysed.
    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Set whether directories without Go files are dropped from the report.
    pub fn hide_empty(mut self, hide: bool) -> Self {
        self.hide_empty = hide;
        self
    }

    /// The effective skip set: defaults, `testdata` when tests are excluded,
    /// and the caller's extra names.
    pub fn skip_names(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> =
            DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect();
        if !self.include_tests {
            names.insert(TESTDATA_DIR.to_string());
        }
        names.extend(self.skip.iter().cloned());
        names
    }
}
