//! Eligible source file detection for a single directory.
//!
//! Only the directory's own entries are considered; subdirectories are the
//! walker's concern.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::GomentalError;
use crate::Result;

/// Suffix shared by every Go source file.
const GO_SUFFIX: &str = ".go";

/// Suffix of Go test files.
const TEST_SUFFIX: &str = "_test.go";

/// Check if a file name is a Go source file.
pub fn is_go_file(name: &str) -> bool {
    name.ends_with(GO_SUFFIX)
}

/// Check if a file name is a Go test file.
pub fn is_test_file(name: &str) -> bool {
    name.ends_with(TEST_SUFFIX)
}

/// Check if a file name should be parsed.
pub fn is_eligible(name: &str, include_tests: bool) -> bool {
    is_go_file(name) && (include_tests || !is_test_file(name))
}

/// Discover eligible Go files directly inside `dir`.
///
/// Results are sorted by file name so repeated runs parse in the same order.
pub fn discover_go_files(dir: impl AsRef<Path>, include_tests: bool) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| GomentalError::walk(dir, e))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if is_eligible(&name, include_tests) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
