//! Source discovery: find directories and files to analyse.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Directory walking**: pre-order traversal that prunes skipped names
//! - **File eligibility**: which `.go` files in a directory get parsed
//!
//! ## Example
//!
//! ```rust,ignore
//! use gomentallib::source::{discover_go_files, walk_dirs};
//!
//! let skip = AnalyzeOptions::new().skip_names();
//! for dir in walk_dirs(root, &skip) {
//!     let files = discover_go_files(dir?, false)?;
//! }
//! ```

pub mod files;
pub mod walk;

pub use files::{discover_go_files, is_eligible, is_go_file, is_test_file};
pub use walk::walk_dirs;
