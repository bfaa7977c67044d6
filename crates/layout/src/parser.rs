use log::debug;

use crate::entry::Entry;
use crate::error::SyntaxError;
use crate::indent::IndentStack;
use crate::scanner::scan_line;

/// Parses a layout text into entries, in document order.
///
/// Pure: no filesystem access. Stops at the first malformed line.
pub fn parse(text: &str) -> Result<Vec<Entry>, SyntaxError> {
    let mut entries = Vec::new();
    let mut indents = IndentStack::new();
    let mut prev_is_dir = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;

        let body = raw.trim_start();
        if body.is_empty() || body.starts_with('#') {
            continue;
        }

        let indent = &raw[..raw.len() - body.len()];
        if indent.contains('\t') {
            return Err(SyntaxError::new(line, "tabs are not allowed in indentation"));
        }

        let width = indent.chars().count();
        let level = indents
            .advance(width, prev_is_dir)
            .map_err(|reason| SyntaxError::new(line, reason))?;

        let spec = scan_line(body).map_err(|reason| SyntaxError::new(line, reason))?;
        prev_is_dir = spec.is_dir;

        entries.push(Entry {
            name: spec.name,
            is_dir: spec.is_dir,
            symlink_target: spec.symlink_target,
            level,
            mode: spec.mode,
            owner: spec.owner,
            group: spec.group,
            content: spec.content,
            extra: spec.extra,
            line,
        });
    }

    debug!("[parse] {} entries", entries.len());
    Ok(entries)
}

/// Parse-only validation: no filesystem access, no side effects.
pub fn check_layout(text: &str) -> Result<(), SyntaxError> {
    parse(text).map(|_| ())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
