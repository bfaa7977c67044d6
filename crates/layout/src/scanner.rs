use serde::Deserialize;
use serde_json::{Map, Value};

use crate::entry::Mode;

/// Everything a single specification line says, minus indentation.
#[derive(Debug, Default)]
pub struct LineSpec {
    pub name: String,
    pub is_dir: bool,
    pub symlink_target: Option<String>,
    pub mode: Option<Mode>,
    pub owner: Option<String>,
    pub group: Option<String>,
    pub content: Option<String>,
    pub extra: Map<String, Value>,
}

/// Trailing extras object, written without the surrounding braces on the
/// line. Only `content` is consumed; everything else is carried along.
#[derive(Debug, Deserialize)]
struct Extras {
    content: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Skips whitespace and reports whether any was consumed.
    fn skip_spaces(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
        self.pos > start
    }

    /// Consumes a double-quoted token and decodes it as a JSON string
    /// literal. The cursor must be on the opening quote.
    fn quoted(&mut self) -> Result<String, String> {
        let start = self.pos;
        let mut chars = self.rest().char_indices();
        chars.next(); // opening quote

        let mut escaped = false;
        for (i, c) in chars {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '"' => {
                    let end = self.pos + i + c.len_utf8();
                    let literal = &self.input[start..end];
                    self.pos = end;
                    return serde_json::from_str::<String>(literal)
                        .map_err(|e| format!("invalid quoted token {literal}: {e}"));
                }
                _ => {}
            }
        }
        Err("unterminated quoted token".to_string())
    }

    /// Consumes the longest run of characters for which `delim` is false.
    fn bare(&mut self, delim: fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if delim(c) {
                break;
            }
            self.bump(c);
        }
        &self.input[start..self.pos]
    }

    fn token(&mut self, delim: fn(char) -> bool) -> Result<String, String> {
        if self.peek() == Some('"') {
            self.quoted()
        } else {
            Ok(self.bare(delim).to_string())
        }
    }
}

fn is_name_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | '/')
}

// Unquoted symlink targets may contain `(` and `/`.
fn is_target_delimiter(c: char) -> bool {
    c.is_whitespace()
}

/// Parses one specification line, already stripped of its indentation.
pub fn scan_line(input: &str) -> Result<LineSpec, String> {
    let mut s = Scanner::new(input);
    let mut spec = LineSpec::default();

    spec.name = s.token(is_name_delimiter)?;
    if spec.name.is_empty() {
        return Err("missing entry name".to_string());
    }
    if spec.name.contains('/') {
        return Err(format!("name `{}` must not contain `/`", spec.name));
    }
    if spec.name == "." || spec.name == ".." {
        return Err(format!("name must not be `{}`", spec.name));
    }

    if s.peek() == Some('/') {
        s.bump('/');
        spec.is_dir = true;
    }

    if s.peek() == Some('(') {
        scan_perm_block(&mut s, &mut spec)?;
    }

    let before_arrow_ws = s.skip_spaces();
    if s.rest().starts_with("->") {
        if spec.is_dir {
            return Err("a directory cannot be a symlink".to_string());
        }
        s.pos += 2;
        s.skip_spaces();
        let target = s.token(is_target_delimiter)?;
        if target.is_empty() {
            return Err("missing symlink target".to_string());
        }
        spec.symlink_target = Some(target);

        if !s.skip_spaces() && !s.rest().is_empty() {
            return Err(format!("unexpected trailing characters `{}`", s.rest()));
        }
    } else if !before_arrow_ws && !s.rest().is_empty() {
        return Err(format!("unexpected trailing characters `{}`", s.rest()));
    }

    if !s.rest().is_empty() {
        scan_extras(s.rest(), &mut spec)?;
    }

    Ok(spec)
}

/// `(MODE)` or `(OWNER,GROUP,MODE)`, directly after the name or `/` marker.
fn scan_perm_block(s: &mut Scanner<'_>, spec: &mut LineSpec) -> Result<(), String> {
    s.bump('(');
    let body_start = s.pos;
    let Some(close) = s.rest().find(')') else {
        return Err("unterminated permission block".to_string());
    };
    let body = &s.input[body_start..body_start + close];
    s.pos = body_start + close + 1;

    let parts: Vec<&str> = body.split(',').collect();
    match parts.as_slice() {
        [mode] => {
            spec.mode = Some(scan_mode(mode)?);
        }
        [owner, group, mode] => {
            if owner.is_empty() || group.is_empty() {
                return Err(format!("malformed permission block `({body})`"));
            }
            spec.owner = Some((*owner).to_string());
            spec.group = Some((*group).to_string());
            spec.mode = Some(scan_mode(mode)?);
        }
        _ => return Err(format!("malformed permission block `({body})`")),
    }
    Ok(())
}

fn scan_mode(text: &str) -> Result<Mode, String> {
    let octal = (3..=4).contains(&text.len()) && text.bytes().all(|b| (b'0'..=b'7').contains(&b));
    if !octal {
        return Err(format!("mode `{text}` is not 3-4 octal digits"));
    }
    let bits = u32::from_str_radix(text, 8).map_err(|e| format!("mode `{text}`: {e}"))?;
    Ok(Mode {
        text: text.to_string(),
        bits,
    })
}

/// Everything after the entry tokens is the body of a JSON object with the
/// braces left off.
fn scan_extras(body: &str, spec: &mut LineSpec) -> Result<(), String> {
    let wrapped = format!("{{{body}}}");
    let extras: Extras =
        serde_json::from_str(&wrapped).map_err(|e| format!("invalid extras object: {e}"))?;
    if spec.is_dir && extras.content.is_some() {
        return Err("a directory cannot have content".to_string());
    }
    spec.content = extras.content;
    spec.extra = extras.extra;
    Ok(())
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
