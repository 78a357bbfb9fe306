//! Pre-order directory traversal with skip-set pruning.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::GomentalError;
use crate::Result;

/// Check if a directory entry is pruned by the skip set.
fn is_skipped(entry: &DirEntry, skip: &BTreeSet<String>) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| skip.contains(name))
}

/// Walk every directory beneath `root`, root included, in pre-order.
///
/// Siblings are visited in file-name order. A directory whose base name is in
/// `skip` is neither yielded nor descended into; this applies to the root as
/// well. Symlinks are not followed. The first access error is yielded as
/// [`GomentalError::Walk`]; callers are expected to stop there.
pub fn walk_dirs<'a>(
    root: &'a Path,
    skip: &'a BTreeSet<String>,
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| !(e.file_type().is_dir() && is_skipped(e, skip)))
        .filter_map(move |entry| match entry {
            Ok(e) if e.file_type().is_dir() => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(GomentalError::walk(root, e))),
        })
}
