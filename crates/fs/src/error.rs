use std::io;
use std::path::PathBuf;

use mktree_layout::SyntaxError;
use thiserror::Error;

/// A failed materialization step. The tree built so far stays on disk.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// Could not reposition between nesting levels.
    #[error("line {line}: cannot enter `{}`: {source}", path.display())]
    Navigation {
        path: PathBuf,
        line: usize,
        source: io::Error,
    },
    /// A filesystem primitive failed for one entry.
    #[error("line {line}: cannot {op} `{}`: {source}", path.display())]
    Creation {
        op: &'static str,
        path: PathBuf,
        line: usize,
        source: io::Error,
    },
}

/// Outcome of the combined parse-and-materialize entry point.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Materialize(#[from] MaterializeError),
}
