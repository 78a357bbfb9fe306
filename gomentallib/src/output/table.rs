//! Table-ready data structures for fact output.
//!
//! This module provides `FactTable`, a presentation-ready data structure
//! that can be rendered as an aligned table, as tab-separated text, or
//! serialized to JSON.
//!
//! The data flow is:
//! 1. FactMap (raw aggregation)
//! 2. FactSet (sorted, filtered)
//! 3. FactTable (formatted strings for display)
//!
//! FactTable is a pure presentation layer - it only formats data, no
//! filtering or sorting logic.

use serde::{Deserialize, Serialize};

use crate::data::fact::Fact;
use crate::query::factset::FactSet;

/// Column headers, in output order.
pub const HEADERS: [&str; 11] = [
    "Path",
    "Packages",
    "Files",
    "Lines",
    "Global Vars",
    "Constants",
    "Interfaces",
    "Structs",
    "Other Types",
    "Methods",
    "Funcs",
];

/// Spaces between aligned columns.
const PADDING: usize = 2;

/// A single row in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Display key
    pub label: String,
    /// Values for each numeric column (as strings, ready for display)
    pub values: Vec<String>,
}

impl TableRow {
    fn cells(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str()).chain(self.values.iter().map(String::as_str))
    }
}

/// Table-ready fact data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactTable {
    /// Column headers
    pub headers: Vec<String>,
    /// Data rows, in display order
    pub rows: Vec<TableRow>,
}

impl FactTable {
    /// Create a FactTable from a FactSet.
    pub fn from_fact_set(set: &FactSet) -> Self {
        FactTable {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: set.iter().map(to_row).collect(),
        }
    }

    /// Column-aligned lines, header first.
    ///
    /// Every column but the last is padded to its widest cell plus
    /// two spaces.
    pub fn lines(&self) -> Vec<String> {
        let columns = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells().enumerate().take(columns) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let format_line = |cells: Vec<&str>| -> String {
            let last = cells.len().saturating_sub(1);
            let mut line = String::new();
            for (i, cell) in cells.into_iter().enumerate() {
                if i == last {
                    line.push_str(cell);
                } else {
                    let width = widths[i] + PADDING;
                    line.push_str(&format!("{:<width$}", cell, width = width));
                }
            }
            line
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format_line(self.headers.iter().map(String::as_str).collect()));
        for row in &self.rows {
            lines.push(format_line(row.cells().take(columns).collect()));
        }
        lines
    }

    /// Render the aligned table: header, rows, then one blank line.
    pub fn render(&self) -> String {
        finish(self.lines())
    }

    /// Tab-separated lines, header first.
    pub fn tsv_lines(&self) -> Vec<String> {
        let mut lines = vec![self.headers.join("\t")];
        lines.extend(self.rows.iter().map(|r| r.cells().collect::<Vec<_>>().join("\t")));
        lines
    }

    /// Render as tab-separated text: header, rows, then one blank line.
    pub fn to_tsv(&self) -> String {
        finish(self.tsv_lines())
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out
}

/// Format a fact's counts in column order.
fn to_row(fact: &Fact) -> TableRow {
    let d = &fact.decls;
    TableRow {
        label: fact.path.clone(),
        values: [
            fact.packages,
            fact.files,
            fact.lines,
            d.globals,
            d.constants,
            d.interfaces,
            d.structs,
            d.other_types,
            d.methods,
            d.funcs,
        ]
        .iter()
        .map(u64::to_string)
        .collect(),
    }
}
