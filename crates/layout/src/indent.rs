/// Stack of indentation widths seen so far, one per open nesting level.
///
/// The first specification line fixes the baseline width (level 0). Wider
/// lines open a new level, narrower lines must return exactly to one of the
/// open widths.
#[derive(Debug, Default)]
pub struct IndentStack {
    widths: Vec<usize>,
}

impl IndentStack {
    pub fn new() -> Self {
        IndentStack::default()
    }

    /// Feed the indentation width of the next specification line and get its
    /// level back. `prev_is_dir` tells whether the previous specification
    /// line was a directory, which is the only thing allowed to open a
    /// deeper level.
    pub fn advance(&mut self, width: usize, prev_is_dir: bool) -> Result<usize, String> {
        let Some(&top) = self.widths.last() else {
            self.widths.push(width);
            return Ok(0);
        };

        if width == top {
            return Ok(self.widths.len() - 1);
        }

        if width > top {
            if !prev_is_dir {
                return Err(
                    "line is indented further than the previous line, \
                     but the previous line is not a directory"
                        .to_string(),
                );
            }
            self.widths.push(width);
            return Ok(self.widths.len() - 1);
        }

        // Dedent: must land exactly on an open width, deepest match wins.
        match self.widths.iter().rposition(|&w| w == width) {
            Some(level) => {
                self.widths.truncate(level + 1);
                Ok(level)
            }
            None => Err("indentation does not return to any previous level".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "indent_tests.rs"]
mod tests;
