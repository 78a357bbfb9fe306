//! Fact set: aggregated facts ready for rendering.
//!
//! A FactSet sits between the raw aggregation map and the final table. It
//! holds the facts:
//! - Sorted by display key, parents directly before their subtrees
//! - Optionally without entries that saw no source files
//!
//! The data pipeline is:
//! 1. FactMap (display key -> Fact, unordered)
//! 2. FactSet (filtered, sorted)
//! 3. FactTable (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::data::aggregate::FactMap;
use crate::data::fact::Fact;

use super::order::compare_display_paths;

/// Sorted, optionally filtered facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactSet {
    /// Facts in display order
    pub rows: Vec<Fact>,
}

impl FactSet {
    /// Build a fact set from an aggregation map.
    ///
    /// With `hide_empty`, facts whose `files` count is zero are dropped.
    pub fn from_map(facts: FactMap, hide_empty: bool) -> Self {
        let mut rows: Vec<Fact> = facts
            .into_values()
            .filter(|f| !(hide_empty && f.is_empty()))
            .collect();
        rows.sort_by(|a, b| compare_display_paths(&a.path, &b.path));
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fact> {
        self.rows.iter()
    }

    /// Display keys in order.
    pub fn paths(&self) -> Vec<&str> {
        self.rows.iter().map(|f| f.path.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
