//! Query processing: order and filter aggregated facts.
//!
//! This module handles the third stage of the pipeline - turning the
//! unordered aggregation map into rows ready for presentation. It provides:
//!
//! - **Ordering**: separator-aware comparison of display keys
//! - **FactSet**: sorted facts, optionally without source-free directories
//!
//! ## Example
//!
//! ```rust,ignore
//! use gomentallib::query::FactSet;
//!
//! let set = FactSet::from_map(facts, options.hide_empty);
//! ```

pub mod factset;
pub mod order;

pub use factset::FactSet;
pub use order::{compare_display_paths, compare_paths_with};
