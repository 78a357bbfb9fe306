//! Output formatting: present facts as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting fact sets for display. It provides:
//!
//! - **FactTable**: Table-ready data structure with headers and rows
//! - **TableRow**: Individual row with label and formatted values
//!
//! ## Example
//!
//! ```rust,ignore
//! use gomentallib::output::FactTable;
//!
//! let table = FactTable::from_fact_set(&set);
//! print!("{}", table.render());
//! ```

pub mod table;

pub use table::{FactTable, TableRow, HEADERS};
