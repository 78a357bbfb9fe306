//! Top-level declaration classifier.
//!
//! Each top-level node of a Go `source_file` is mapped onto a closed set of
//! shapes ([`TopLevel`]), and named types further onto [`TypeShape`]. Counting
//! is then an exhaustive match over those enums.
//!
//! Counting rules:
//!
//! - `var` and `const` declarations count one per declared name, so
//!   `var a, b, c int` is three globals
//! - every spec in a `type ( ... )` block is classified on its own
//! - functions with a receiver are methods, the rest are funcs
//! - imports, the package clause and comments count nothing
//!
//! Anything else at top level is reported to a [`WarningSink`] and skipped.
//! [`GoParser`](super::parse::GoParser) already rejects top-level statements,
//! so this only fires for trees built elsewhere or for node kinds a newer
//! grammar introduces.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tree_sitter::Node;

use super::fact::DeclCounts;
use super::parse::ParsedFile;

/// A top-level node the classifier does not know how to count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationWarning {
    /// File containing the node
    pub path: PathBuf,
    /// 1-based line of the node
    pub line: usize,
    /// tree-sitter node kind
    pub kind: String,
}

impl fmt::Display for ClassificationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: unrecognized top-level declaration `{}`",
            self.path.display(),
            self.line,
            self.kind
        )
    }
}

/// Receives classification warnings. Warnings never stop a run.
pub trait WarningSink {
    fn warn(&mut self, warning: ClassificationWarning);
}

/// Collects warnings for later inspection.
impl WarningSink for Vec<ClassificationWarning> {
    fn warn(&mut self, warning: ClassificationWarning) {
        self.push(warning);
    }
}

/// Emits warnings as `tracing` events at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, warning: ClassificationWarning) {
        tracing::warn!(
            path = %warning.path.display(),
            line = warning.line,
            kind = %warning.kind,
            "unrecognized top-level declaration, not counted"
        );
    }
}

/// Shape of a top-level node.
#[derive(Debug, Clone, Copy)]
enum TopLevel<'t> {
    Package,
    Import,
    Var(Node<'t>),
    Const(Node<'t>),
    Type(Node<'t>),
    Func,
    Method,
    Unknown(Node<'t>),
}

impl<'t> TopLevel<'t> {
    fn of(node: Node<'t>) -> Self {
        match node.kind() {
            "package_clause" => TopLevel::Package,
            "import_declaration" => TopLevel::Import,
            "var_declaration" => TopLevel::Var(node),
            "const_declaration" => TopLevel::Const(node),
            "type_declaration" => TopLevel::Type(node),
            "function_declaration" => TopLevel::Func,
            "method_declaration" => TopLevel::Method,
            _ => TopLevel::Unknown(node),
        }
    }
}

/// Shape of a named type's underlying type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeShape {
    Interface,
    Struct,
    Other,
}

impl TypeShape {
    /// Classify a `type_spec` or `type_alias` node.
    fn of(spec: Node<'_>) -> Self {
        if spec.kind() == "type_alias" {
            return TypeShape::Other;
        }
        match spec.child_by_field_name("type").map(|t| t.kind()) {
            Some("interface_type") => TypeShape::Interface,
            Some("struct_type") => TypeShape::Struct,
            _ => TypeShape::Other,
        }
    }
}

/// Collect spec nodes of `kind` below a declaration, looking through
/// parenthesised `*_list` wrappers.
fn specs<'t>(decl: Node<'t>, kinds: &[&str], out: &mut Vec<Node<'t>>) {
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        if kinds.contains(&child.kind()) {
            out.push(child);
        } else if !child.is_extra() {
            specs(child, kinds, out);
        }
    }
}

/// Number of names declared by `var` or `const` specs.
///
/// The `name` field of a `const_spec` also covers the separating commas,
/// so only identifiers are counted.
fn declared_names(decl: Node<'_>, spec_kind: &str) -> u64 {
    let mut found = Vec::new();
    specs(decl, &[spec_kind], &mut found);
    found
        .iter()
        .map(|spec| {
            let mut cursor = spec.walk();
            spec.children_by_field_name("name", &mut cursor)
                .filter(|n| n.kind() == "identifier")
                .count() as u64
        })
        .sum()
}

/// Count the top-level declarations of one parsed file.
pub fn classify(file: &ParsedFile, sink: &mut dyn WarningSink) -> DeclCounts {
    let mut counts = DeclCounts::new();
    let root = file.root();
    let mut cursor = root.walk();

    for node in root.named_children(&mut cursor) {
        if node.is_extra() {
            continue;
        }
        match TopLevel::of(node) {
            TopLevel::Package | TopLevel::Import => {}
            TopLevel::Var(decl) => counts.globals += declared_names(decl, "var_spec"),
            TopLevel::Const(decl) => counts.constants += declared_names(decl, "const_spec"),
            TopLevel::Type(decl) => {
                let mut found = Vec::new();
                specs(decl, &["type_spec", "type_alias"], &mut found);
                for spec in found {
                    match TypeShape::of(spec) {
                        TypeShape::Interface => counts.interfaces += 1,
                        TypeShape::Struct => counts.structs += 1,
                        TypeShape::Other => counts.other_types += 1,
                    }
                }
            }
            TopLevel::Func => counts.funcs += 1,
            TopLevel::Method => counts.methods += 1,
            TopLevel::Unknown(other) => sink.warn(ClassificationWarning {
                path: file.path.clone(),
                line: other.start_position().row + 1,
                kind: other.kind().to_string(),
            }),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse::GoParser;

    fn classify_src(src: &str) -> (DeclCounts, Vec<ClassificationWarning>) {
        let parsed = GoParser::new()
            .unwrap()
            .parse_source("sample.go", src.as_bytes().to_vec())
            .unwrap();
        let mut warnings = Vec::new();
        let counts = classify(&parsed, &mut warnings);
        (counts, warnings)
    }

    #[test]
    fn test_var_block_counts_each_name() {
        let (counts, warnings) = classify_src(
            r#"package p

var (
	a int
	b string
	c = 3
)
"#,
        );
        assert_eq!(counts.globals, 3);
        assert_eq!(counts.total(), 3);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_multi_name_specs() {
        let (counts, _) = classify_src(
            r#"package p

var x, y, z int
var single = "s"

const (
	A, B = 1, 2
	C    = 3
)
const D = 4
"#,
        );
        assert_eq!(counts.globals, 4);
        assert_eq!(counts.constants, 4);
    }

    #[test]
    fn test_type_shapes() {
        let (counts, _) = classify_src(
            r#"package p

type Reader interface {
	Read(p []byte) (int, error)
}

type Config struct {
	Name string
}

type ID int
type Handler func(string) error
type Table map[string]int
type Alias = Config
type List[T any] struct {
	items []T
}
"#,
        );
        assert_eq!(counts.interfaces, 1);
        assert_eq!(counts.structs, 2);
        assert_eq!(counts.other_types, 4);
    }

    #[test]
    fn test_type_block_classifies_each_spec() {
        let (counts, _) = classify_src(
            r#"package p

type (
	Store interface{ Get(k string) string }
	memStore struct{ m map[string]string }
	Key string
)
"#,
        );
        assert_eq!(counts.interfaces, 1);
        assert_eq!(counts.structs, 1);
        assert_eq!(counts.other_types, 1);
        assert_eq!(counts.types(), 3);
    }

    #[test]
    fn test_funcs_and_methods() {
        let (counts, _) = classify_src(
            r#"package p

type T struct{}

func New() *T { return &T{} }

func (t *T) Start() {}

func (t T) Name() string { return "t" }

func helper() {}
"#,
        );
        assert_eq!(counts.funcs, 2);
        assert_eq!(counts.methods, 2);
        assert_eq!(counts.structs, 1);
    }

    #[test]
    fn test_imports_and_comments_count_nothing() {
        let (counts, warnings) = classify_src(
            r#"// Package p does things.
package p

import "fmt"

import (
	"os"
	"strings"
)

// helper is documented.
/* block comment */
"#,
        );
        assert_eq!(counts, DeclCounts::new());
        assert!(warnings.is_empty());
    }

    /// Build a `ParsedFile` straight from tree-sitter, without the
    /// top-level checks `GoParser` applies.
    fn unchecked(path: &str, src: &str) -> ParsedFile {
        let language: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&language).unwrap();
        let source = src.as_bytes().to_vec();
        let tree = parser.parse(&source, None).unwrap();
        ParsedFile {
            path: PathBuf::from(path),
            lines: crate::data::parse::count_lines(&source),
            source,
            tree,
            package: "p".to_string(),
        }
    }

    #[test]
    fn test_unrecognized_top_level_warns_and_continues() {
        let parsed = unchecked("script.go", "package p\n\nx := 1\n\nfunc f() {}\n");
        let mut warnings = Vec::new();
        let counts = classify(&parsed, &mut warnings);

        assert_eq!(counts.funcs, 1);
        assert_eq!(counts.globals, 0);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line, 3);
        assert_eq!(warnings[0].path, PathBuf::from("script.go"));
        assert!(warnings[0]
            .to_string()
            .contains("unrecognized top-level declaration"));
    }

    #[test]
    fn test_const_names_ignore_commas() {
        let (counts, _) = classify_src("package p\n\nconst A, B = 1, 2\n");
        assert_eq!(counts.constants, 2);
        let (counts, _) = classify_src("package p\n\nconst A, B, C = 1, 2, 3\n");
        assert_eq!(counts.constants, 3);
        let (counts, _) = classify_src("package p\n\nvar a, b = 1, 2\n");
        assert_eq!(counts.globals, 2);
    }

    #[test]
    fn test_classification_is_repeatable() {
        let src = "package p\n\nvar a, b int\n\ntype S struct{}\n\nfunc (S) M() {}\n";
        let (first, _) = classify_src(src);
        let (second, _) = classify_src(src);
        assert_eq!(first, second);
    }
}
