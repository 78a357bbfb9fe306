//! Data collection: parse files and collect facts.
//!
//! This module handles the second stage of the pipeline - parsing Go source
//! files and folding their metrics into per-directory facts. It provides:
//!
//! - **Parsing**: tree-sitter based Go parser with syntax error detection
//! - **Classification**: per-file declaration counts
//! - **Extraction**: one fact per directory
//! - **Aggregation**: depth-bounded folding of directory facts
//!
//! ## Example
//!
//! ```rust,ignore
//! use gomentallib::data::{aggregate, TracingSink};
//!
//! let facts = aggregate(".", &AnalyzeOptions::new().depth(2), &mut TracingSink)?;
//! ```

pub mod aggregate;
pub mod classify;
pub mod extract;
pub mod fact;
pub mod parse;

pub use aggregate::{aggregate, display_key, FactMap};
pub use classify::{classify, ClassificationWarning, TracingSink, WarningSink};
pub use extract::{extract_dir, Extractor};
pub use fact::{DeclCounts, Fact};
pub use parse::{count_lines, GoParser, ParsedFile};
