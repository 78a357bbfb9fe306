//! Go source parsing with tree-sitter.
//!
//! tree-sitter never refuses input: it recovers from syntax errors by
//! inserting `ERROR` and missing nodes. The grammar also admits statements at
//! top level. A file is only accepted here when its tree is free of error
//! nodes and its top level reads as a Go file: one leading `package` clause,
//! then imports, then declarations.

use std::path::{Path, PathBuf};

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::GomentalError;
use crate::Result;

/// Longest snippet of offending source quoted in a syntax error.
const SNIPPET_LEN: usize = 32;

/// A syntactically valid Go source file.
pub struct ParsedFile {
    /// Path the source was read from
    pub path: PathBuf,
    /// Raw source bytes
    pub source: Vec<u8>,
    /// Syntax tree
    pub tree: Tree,
    /// Name from the `package` clause
    pub package: String,
    /// Physical line count
    pub lines: u64,
}

impl ParsedFile {
    /// The `source_file` node.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("path", &self.path)
            .field("package", &self.package)
            .field("lines", &self.lines)
            .finish()
    }
}

/// Count physical lines: newline bytes, plus one for an unterminated last line.
pub fn count_lines(source: &[u8]) -> u64 {
    let newlines = source.iter().filter(|&&b| b == b'\n').count() as u64;
    match source.last() {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}

/// Reusable Go parser.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a parser loaded with the Go grammar.
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| GomentalError::Language(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Read and parse a file from disk.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<ParsedFile> {
        let path = path.as_ref();
        let source = std::fs::read(path).map_err(|e| GomentalError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_source(path, source)
    }

    /// Parse source bytes; `path` is only used for error reporting.
    pub fn parse_source(&mut self, path: impl Into<PathBuf>, source: Vec<u8>) -> Result<ParsedFile> {
        let path = path.into();

        let Some(tree) = self.parser.parse(&source, None) else {
            return Err(GomentalError::Parse {
                path,
                line: 1,
                column: 1,
                message: "parser produced no syntax tree".to_string(),
            });
        };

        if let Some(node) = first_error(tree.root_node()) {
            let pos = node.start_position();
            return Err(GomentalError::Parse {
                line: pos.row + 1,
                column: pos.column + 1,
                message: describe_error(node, &source),
                path,
            });
        }

        let package = check_top_level(tree.root_node(), &source).map_err(|e| {
            GomentalError::Parse {
                path: path.clone(),
                line: e.line,
                column: e.column,
                message: e.message,
            }
        })?;

        let lines = count_lines(&source);
        Ok(ParsedFile {
            path,
            source,
            tree,
            package,
            lines,
        })
    }
}

/// Top-level node kinds a Go source file may contain.
const TOP_LEVEL_KINDS: &[&str] = &[
    "package_clause",
    "import_declaration",
    "var_declaration",
    "const_declaration",
    "type_declaration",
    "function_declaration",
    "method_declaration",
];

/// Find the first error or missing node in document order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Only descend into subtrees that contain an error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Rejection of a tree that parsed cleanly but is not a valid Go file.
struct TopLevelError {
    line: usize,
    column: usize,
    message: String,
}

impl TopLevelError {
    fn at(node: Node<'_>, message: &str) -> Self {
        let pos = node.start_position();
        TopLevelError {
            line: pos.row + 1,
            column: pos.column + 1,
            message: message.to_string(),
        }
    }
}

/// Check top-level ordering and return the package name.
fn check_top_level(root: Node<'_>, source: &[u8]) -> std::result::Result<String, TopLevelError> {
    let mut cursor = root.walk();
    let mut nodes = root.named_children(&mut cursor).filter(|n| !n.is_extra());

    let Some(clause) = nodes.next().filter(|n| n.kind() == "package_clause") else {
        return Err(TopLevelError {
            line: 1,
            column: 1,
            message: "expected 'package' clause".to_string(),
        });
    };
    let package = package_name(clause, source).ok_or_else(|| {
        TopLevelError::at(clause, "syntax error: package clause without a name")
    })?;

    let mut past_imports = false;
    for node in nodes {
        match node.kind() {
            "package_clause" => {
                return Err(TopLevelError::at(node, "syntax error: unexpected 'package' clause"))
            }
            "import_declaration" if past_imports => {
                return Err(TopLevelError::at(
                    node,
                    "syntax error: imports must appear before other declarations",
                ))
            }
            "import_declaration" => {}
            kind if TOP_LEVEL_KINDS.contains(&kind) => past_imports = true,
            _ => {
                return Err(TopLevelError::at(
                    node,
                    "syntax error: non-declaration statement outside function body",
                ))
            }
        }
    }

    Ok(package)
}

fn describe_error(node: Node<'_>, source: &[u8]) -> String {
    if node.is_missing() {
        return format!("syntax error: missing `{}`", node.kind());
    }
    let text = node.utf8_text(source).unwrap_or("");
    let snippet: String = text
        .lines()
        .next()
        .unwrap_or("")
        .trim()
        .chars()
        .take(SNIPPET_LEN)
        .collect();
    if snippet.is_empty() {
        "syntax error".to_string()
    } else {
        format!("syntax error near `{}`", snippet)
    }
}

/// Name declared by a `package` clause.
fn package_name(clause: Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = clause.walk();
    let ident = clause
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_identifier")?;
    ident.utf8_text(source).ok().map(str::to_string)
}
