//! The control dictionary as an ordered sequence of lines.

use std::fmt;

use crate::error::{DictError, DictResult};

/// Control dictionary text split into lines.
///
/// Each line keeps its own terminator, so concatenating the lines gives back
/// the original text byte for byte. A final line without a newline stays
/// unterminated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlDict {
    lines: Vec<String>,
}

impl ControlDict {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Insert `line` so that it ends up at position `index`.
    pub fn insert(&mut self, index: usize, line: impl Into<String>) -> DictResult<()> {
        if index > self.lines.len() {
            return Err(DictError::IndexOob {
                what: "control dictionary line",
                index,
                len: self.lines.len(),
            });
        }
        self.lines.insert(index, line.into());
        Ok(())
    }

    /// Insert `lines` in order starting at `index`; returns the index after the last one.
    pub fn insert_all<I, S>(&mut self, index: usize, lines: I) -> DictResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cursor = index;
        for line in lines {
            self.insert(cursor, line)?;
            cursor += 1;
        }
        Ok(cursor)
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<&str> for ControlDict {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for ControlDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
