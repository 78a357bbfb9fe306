//! Depth-bounded aggregation of directory facts.
//!
//! Every directory under the root is extracted on its own, then folded into
//! the fact stored under its display key: the directory's path relative to
//! the root, truncated to `depth` segments and rooted at the separator.
//!
//! With `depth = 1`:
//!
//! ```text
//! <root>            -> /
//! <root>/pkg        -> /pkg
//! <root>/pkg/a      -> /pkg
//! <root>/pkg/b/c    -> /pkg
//! <root>/cmd/tool   -> /cmd
//! ```

use std::collections::HashMap;
use std::path::{Component, Path, MAIN_SEPARATOR};

use tracing::debug;

use crate::options::{AnalyzeOptions, MAX_DEPTH};
use crate::source::walk::walk_dirs;
use crate::Result;

use super::classify::WarningSink;
use super::extract::Extractor;
use super::fact::Fact;

/// Display key -> aggregated fact.
pub type FactMap = HashMap<String, Fact>;

/// Compute the display key of `dir` for a walk rooted at `root`.
///
/// Keeps at most `depth` leading segments of the relative path. The root
/// itself maps to the bare separator.
pub fn display_key(root: &Path, dir: &Path, depth: usize) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);

    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .take(depth)
        .collect();

    let sep = MAIN_SEPARATOR.to_string();
    format!("{}{}", sep, segments.join(&sep))
}

/// Walk `root` and aggregate directory facts under their display keys.
///
/// Skipped directories (see [`AnalyzeOptions::skip_names`]) are pruned with
/// their whole subtree. The first access or parse error aborts the run and
/// nothing is returned.
pub fn aggregate(
    root: impl AsRef<Path>,
    options: &AnalyzeOptions,
    sink: &mut dyn WarningSink,
) -> Result<FactMap> {
    let root = root.as_ref();
    let depth = options.depth.clamp(1, MAX_DEPTH);
    let skip = options.skip_names();
    let mut extractor = Extractor::new(options)?;
    let mut facts = FactMap::new();

    for dir in walk_dirs(root, &skip) {
        let dir = dir?;
        let key = display_key(root, &dir, depth);
        let dir_fact = extractor.extract(&dir, sink)?;

        debug!(
            dir = %dir.display(),
            key = %key,
            files = dir_fact.files,
            "extracted directory"
        );

        facts
            .entry(key)
            .or_insert_with_key(|k| Fact::new(k.clone()))
            .merge(&dir_fact);
    }

    Ok(facts)
}
