//! Core data structures for directory metrics.
//!
//! A [`DeclCounts`] is what the classifier produces for one file: a count per
//! declaration category. A [`Fact`] is the per-display-key aggregate: package,
//! file and line counts plus the summed declaration counts.
//!
//! Both merge with `+=`. Merging is plain field-wise addition, so the order in
//! which directories are folded in never changes the result.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Declaration counts, one per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclCounts {
    /// Package-level variables, one per name
    pub globals: u64,
    /// Package-level constants, one per name
    pub constants: u64,
    /// Named types whose underlying type is an interface
    pub interfaces: u64,
    /// Named types whose underlying type is a struct
    pub structs: u64,
    /// All other named types and aliases
    pub other_types: u64,
    /// Functions with a receiver
    pub methods: u64,
    /// Functions without a receiver
    pub funcs: u64,
}

impl DeclCounts {
    /// Create new counts with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of counted declarations.
    pub fn total(&self) -> u64 {
        self.globals
            + self.constants
            + self.interfaces
            + self.structs
            + self.other_types
            + self.methods
            + self.funcs
    }

    /// Total number of named types, whatever their shape.
    pub fn types(&self) -> u64 {
        self.interfaces + self.structs + self.other_types
    }
}

impl Add for DeclCounts {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl AddAssign for DeclCounts {
    fn add_assign(&mut self, other: Self) {
        self.globals += other.globals;
        self.constants += other.constants;
        self.interfaces += other.interfaces;
        self.structs += other.structs;
        self.other_types += other.other_types;
        self.methods += other.methods;
        self.funcs += other.funcs;
    }
}

/// Aggregated metrics for one display key.
///
/// The key (`path`) is fixed at creation; only the counts change, and only
/// upward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Display key, e.g. `/pkg/api`
    pub path: String,
    /// Distinct package names found
    pub packages: u64,
    /// Parsed source files
    pub files: u64,
    /// Physical lines across all parsed files
    pub lines: u64,
    /// Declaration counts
    #[serde(flatten)]
    pub decls: DeclCounts,
}

impl Fact {
    /// Create an empty fact for a display key.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Whether no source file contributed to this fact.
    pub fn is_empty(&self) -> bool {
        self.files == 0
    }

    /// Fold another fact's counts into this one, keeping this fact's key.
    pub fn merge(&mut self, other: &Fact) {
        self.packages += other.packages;
        self.files += other.files;
        self.lines += other.lines;
        self.decls += other.decls;
    }
}

impl AddAssign<&Fact> for Fact {
    fn add_assign(&mut self, other: &Fact) {
        self.merge(other);
    }
}
