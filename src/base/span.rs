//! Line/column positions and the byte-offset index that produces them.

use std::fmt;

pub use text_size::{TextRange, TextSize};

/// A 0-indexed line and byte column. Displayed 1-indexed, as editors show it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    pub line: u32,
    /// Column in UTF-8 bytes
    pub col: u32,
}

impl LineCol {
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Start offsets of every line in a source text.
///
/// Fact providers that only track byte ranges use this to build
/// [`Location`](super::Location) records.
#[derive(Clone, Debug)]
pub struct LineIndex {
    newlines: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let newlines = text
            .match_indices('\n')
            .map(|(offset, _)| TextSize::from(offset as u32 + 1))
            .collect();
        Self { newlines }
    }

    /// Position of a byte offset. Offsets past the end land on the last line.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.newlines.partition_point(|&start| start <= offset);
        let line_start = match line {
            0 => TextSize::from(0),
            n => self.newlines[n - 1],
        };
        LineCol::new(line as u32, (offset - line_start).into())
    }
}
