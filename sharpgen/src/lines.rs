//! Raw source-line storage for free-form bodies.

use crate::writer::{Emit, SourceWriter};

/// An ordered, materialized sequence of raw source lines.
///
/// Used for method and accessor bodies and for manually injected class
/// members. Inserted text is split on any line-separator convention (CRLF,
/// CR, LF); when a multi-line insert starts or ends with a wholly empty line
/// that edge line is dropped, so raw multi-line strings paste naturally.
/// Interior blank lines and whitespace-only lines are preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeLines {
    lines: Vec<String>,
}

impl CodeLines {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text, splitting it into lines.
    pub fn push(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.lines.extend(split_lines(text.as_ref()));
        self
    }

    /// The line at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Replace the line at `index`; a multi-line value is spliced in at that
    /// position with the same splitting rules as [`push`](Self::push).
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn set(&mut self, index: usize, text: impl AsRef<str>) {
        assert!(index < self.lines.len(), "line index out of range");
        self.lines.splice(index..=index, split_lines(text.as_ref()));
    }

    /// Number of stored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl Emit for CodeLines {
    fn emit(&self, w: &mut SourceWriter) {
        for line in &self.lines {
            w.line(line);
        }
    }
}

impl<'a> IntoIterator for &'a CodeLines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CodeLines {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut buffer = Self::new();
        for text in iter {
            buffer.push(text);
        }
        buffer
    }
}

/// Split on CRLF, CR, or LF; drop a wholly empty leading/trailing line when
/// the split produced more than one line.
fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut parts: Vec<&str> = normalized.split('\n').collect();
    if parts.len() > 1 {
        if parts.first() == Some(&"") {
            parts.remove(0);
        }
        if parts.last() == Some(&"") {
            parts.pop();
        }
    }
    parts.into_iter().map(str::to_string).collect()
}
