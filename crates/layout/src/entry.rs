use serde_json::{Map, Value};

/// One parsed specification line of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Entry name; never empty, never contains `/`, never `.` or `..`.
    pub name: String,
    /// True when the name token carried a trailing `/`.
    pub is_dir: bool,
    /// Symlink target, when the line carried a `->` arrow.
    pub symlink_target: Option<String>,
    /// Zero-based nesting depth derived from indentation.
    pub level: usize,
    /// Mode from the `(...)` block, if any.
    pub mode: Option<Mode>,
    /// Owner name from the `(owner,group,mode)` block.
    pub owner: Option<String>,
    /// Group name from the `(owner,group,mode)` block.
    pub group: Option<String>,
    /// File content from the extras object. Never set on directories.
    pub content: Option<String>,
    /// Extras keys this crate does not consume, kept as-is.
    pub extra: Map<String, Value>,
    /// 1-based line in the layout text, for error messages.
    pub line: usize,
}

impl Entry {
    pub fn is_symlink(&self) -> bool {
        self.symlink_target.is_some()
    }
}

/// A permission mode token, e.g. `0600`.
///
/// Keeps both the original digits and the parsed octal value; the digits
/// matter when the mode is echoed back in messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    pub text: String,
    pub bits: u32,
}
