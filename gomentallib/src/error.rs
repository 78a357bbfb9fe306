//! Error types for gomentallib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an analysis run.
///
/// There is no partial-success mode: any of these means no report is produced.
#[derive(Error, Debug)]
pub enum GomentalError {
    /// A directory could not be read during the walk
    #[error("failed to access '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Failed to read a source file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A source file has a syntax error
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The Go grammar could not be loaded into the parser
    #[error("failed to load Go grammar: {0}")]
    Language(String),
}

impl GomentalError {
    /// Wrap a walkdir error, keeping the path it failed on.
    pub(crate) fn walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        GomentalError::Walk { path, source: err }
    }
}
