//! Per-directory fact extraction.
//!
//! Parses every eligible Go file directly inside one directory and sums the
//! results into a single [`Fact`]. Files are grouped by package name; a
//! directory holding `server` and `server_test` counts two packages. Any
//! other mix of package names is summed the same way.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::options::AnalyzeOptions;
use crate::source::files::discover_go_files;
use crate::Result;

use super::classify::{classify, WarningSink};
use super::fact::Fact;
use super::parse::GoParser;

/// Suffix Go gives to external test packages.
const TEST_PACKAGE_SUFFIX: &str = "_test";

/// Extracts directory facts, reusing one parser across directories.
pub struct Extractor {
    parser: GoParser,
    include_tests: bool,
}

impl Extractor {
    /// Create an extractor configured from analysis options.
    pub fn new(options: &AnalyzeOptions) -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
            include_tests: options.include_tests,
        })
    }

    /// Extract the fact for one directory, not including its subdirectories.
    ///
    /// A directory without eligible files yields an all-zero fact. A syntax
    /// error in any file fails the whole directory.
    pub fn extract(&mut self, dir: &Path, sink: &mut dyn WarningSink) -> Result<Fact> {
        let files = discover_go_files(dir, self.include_tests)?;
        let mut fact = Fact::new(dir.to_string_lossy());
        let mut packages: BTreeMap<String, u64> = BTreeMap::new();

        for path in &files {
            let parsed = self.parser.parse_file(path)?;
            fact.decls += classify(&parsed, sink);
            fact.lines += parsed.lines;
            *packages.entry(parsed.package).or_default() += 1;
        }

        fact.packages = packages.len() as u64;
        fact.files = packages.values().sum();

        let primary = packages
            .keys()
            .filter(|name| !name.ends_with(TEST_PACKAGE_SUFFIX))
            .count();
        if primary > 1 {
            debug!(
                dir = %dir.display(),
                packages = ?packages.keys().collect::<Vec<_>>(),
                "several packages in one directory, summing them"
            );
        }

        Ok(fact)
    }
}

/// Extract the fact for one directory with a fresh parser.
pub fn extract_dir(
    dir: impl AsRef<Path>,
    options: &AnalyzeOptions,
    sink: &mut dyn WarningSink,
) -> Result<Fact> {
    Extractor::new(options)?.extract(dir.as_ref(), sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::ClassificationWarning;
    use crate::error::GomentalError;
    use std::fs;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn extract(dir: &Path, options: &AnalyzeOptions) -> Result<Fact> {
        let mut warnings: Vec<ClassificationWarning> = Vec::new();
        extract_dir(dir, options, &mut warnings)
    }

    #[test]
    fn test_extract_sums_files() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        write(
            &dir.join("store.go"),
            "package store\n\ntype Store interface{}\n\ntype mem struct{}\n",
        );
        write(
            &dir.join("funcs.go"),
            "package store\n\nfunc A() {}\nfunc B() {}\nfunc C() {}\n",
        );

        let fact = extract(dir, &AnalyzeOptions::new()).unwrap();
        assert_eq!(fact.packages, 1);
        assert_eq!(fact.files, 2);
        assert_eq!(fact.lines, 10);
        assert_eq!(fact.decls.interfaces, 1);
        assert_eq!(fact.decls.structs, 1);
        assert_eq!(fact.decls.funcs, 3);
    }

    #[test]
    fn test_extract_empty_directory() {
        let temp = tempdir().unwrap();
        write(&temp.path().join("README.md"), "# nothing to see\n");

        let fact = extract(temp.path(), &AnalyzeOptions::new()).unwrap();
        assert!(fact.is_empty());
        assert_eq!(fact.packages, 0);
        assert_eq!(fact.lines, 0);
        assert_eq!(fact.decls.total(), 0);
    }

    #[test]
    fn test_extract_excludes_tests_by_default() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        write(&dir.join("server.go"), "package server\n\nfunc Run() {}\n");
        write(
            &dir.join("server_test.go"),
            "package server_test\n\nimport \"testing\"\n\nfunc TestRun(t *testing.T) {}\n",
        );

        let fact = extract(dir, &AnalyzeOptions::new()).unwrap();
        assert_eq!(fact.packages, 1);
        assert_eq!(fact.files, 1);
        assert_eq!(fact.decls.funcs, 1);

        let fact = extract(dir, &AnalyzeOptions::new().include_tests(true)).unwrap();
        assert_eq!(fact.packages, 2);
        assert_eq!(fact.files, 2);
        assert_eq!(fact.decls.funcs, 2);
    }

    #[test]
    fn test_extract_merges_distinct_packages() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        write(&dir.join("a.go"), "package alpha\n\nvar X int\n");
        write(&dir.join("b.go"), "package beta\n\nvar Y, Z int\n");

        let fact = extract(dir, &AnalyzeOptions::new()).unwrap();
        assert_eq!(fact.packages, 2);
        assert_eq!(fact.files, 2);
        assert_eq!(fact.decls.globals, 3);
    }

    #[test]
    fn test_extract_ignores_subdirectories() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        write(&dir.join("top.go"), "package top\n");
        write(&dir.join("nested/inner.go"), "package nested\n\nfunc F() {}\n");

        let fact = extract(dir, &AnalyzeOptions::new()).unwrap();
        assert_eq!(fact.files, 1);
        assert_eq!(fact.decls.funcs, 0);
    }

    #[test]
    fn test_extract_fails_on_syntax_error() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        write(&dir.join("good.go"), "package p\n\nfunc Good() {}\n");
        write(&dir.join("bad.go"), "package p\n\nfunc Bad( {\n");

        let err = extract(dir, &AnalyzeOptions::new()).unwrap_err();
        match err {
            GomentalError::Parse { path, .. } => assert!(path.ends_with("bad.go")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_is_idempotent() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        write(
            &dir.join("x.go"),
            "package x\n\nconst A, B = 1, 2\n\ntype T struct{}\n\nfunc (T) M() {}\n",
        );

        let options = AnalyzeOptions::new();
        let mut extractor = Extractor::new(&options).unwrap();
        let mut warnings: Vec<ClassificationWarning> = Vec::new();
        let first = extractor.extract(dir, &mut warnings).unwrap();
        let second = extractor.extract(dir, &mut warnings).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.decls.constants, 2);
        assert_eq!(first.decls.methods, 1);
    }

    #[test]
    fn test_extract_rejects_top_level_statement() {
        let temp = tempdir().unwrap();
        write(&temp.path().join("lib.go"), "package main\n\nfunc f() {}\n");
        write(&temp.path().join("script.go"), "package main\n\nx := 1\n");

        let mut warnings: Vec<ClassificationWarning> = Vec::new();
        let err = extract_dir(temp.path(), &AnalyzeOptions::new(), &mut warnings).unwrap_err();
        match err {
            GomentalError::Parse { path, line, .. } => {
                assert!(path.ends_with("script.go"));
                assert_eq!(line, 3);
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
        assert!(warnings.is_empty());
    }
}
