use thiserror::Error;

/// A malformed layout line. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct SyntaxError {
    /// 1-based line in the layout text.
    pub line: usize,
    pub reason: String,
}

impl SyntaxError {
    pub(crate) fn new(line: usize, reason: impl Into<String>) -> Self {
        SyntaxError {
            line,
            reason: reason.into(),
        }
    }
}
