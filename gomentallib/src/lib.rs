//! # gomentallib
//!
//! Structural metrics for Go source trees, aggregated per directory.
//!
//! ## Overview
//!
//! For every directory under a root, the library parses the Go files it holds
//! with tree-sitter and counts, per top-level declaration:
//!
//! - **Global Vars**: package-level variables, one per declared name
//! - **Constants**: package-level constants, one per declared name
//! - **Interfaces**: named types with an interface underlying type
//! - **Structs**: named types with a struct underlying type
//! - **Other Types**: every other named type or alias
//! - **Methods**: functions with a receiver
//! - **Funcs**: functions without a receiver
//!
//! alongside package, file and line counts. Directory facts are then folded
//! together under a *display key*: the directory's path below the root,
//! truncated to a chosen depth.
//!
//! ## Pipeline
//!
//! 1. [`source`]: walk directories, prune skipped names, pick eligible files
//! 2. [`data`]: parse, classify, extract per-directory facts, aggregate
//! 3. [`query`]: sort by display key, drop empty rows on request
//! 4. [`output`]: format as an aligned table, TSV or JSON-ready rows
//!
//! ## Example
//!
//! ```rust
//! use gomentallib::{aggregate, AnalyzeOptions, ClassificationWarning, FactSet, FactTable};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir_all(dir.path().join("pkg/store")).unwrap();
//! fs::write(
//!     dir.path().join("pkg/store/store.go"),
//!     "package store\n\ntype Store interface{}\n\nfunc New() Store { return nil }\n",
//! )
//! .unwrap();
//!
//! let options = AnalyzeOptions::new().depth(1).hide_empty(true);
//! let mut warnings: Vec<ClassificationWarning> = Vec::new();
//! let facts = aggregate(dir.path(), &options, &mut warnings).unwrap();
//!
//! let set = FactSet::from_map(facts, options.hide_empty);
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.rows[0].decls.interfaces, 1);
//! assert_eq!(set.rows[0].decls.funcs, 1);
//!
//! let table = FactTable::from_fact_set(&set);
//! assert!(table.render().starts_with("Path"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    aggregate, classify, display_key, extract_dir, ClassificationWarning, DeclCounts, Extractor,
    Fact, FactMap, GoParser, ParsedFile, TracingSink, WarningSink,
};
pub use error::GomentalError;
pub use options::{clamp_depth, AnalyzeOptions, DEFAULT_SKIP_DIRS, MAX_DEPTH, TESTDATA_DIR};
pub use output::{FactTable, TableRow, HEADERS};
pub use query::{compare_display_paths, FactSet};

/// Result type for gomentallib operations
pub type Result<T> = std::result::Result<T, GomentalError>;
