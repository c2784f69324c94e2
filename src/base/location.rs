//! Source location records reported by semantic facts.

use std::fmt;

use super::{FileId, LineCol, LineIndex, TextRange};

/// Where a fact was observed: a file, a start position and an optional end.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub file: FileId,
    pub start: LineCol,
    /// End of the span, when the provider knows it
    pub end: Option<LineCol>,
}

impl Location {
    /// A point location with no span.
    pub const fn new(file: FileId, line: u32, col: u32) -> Self {
        Self {
            file,
            start: LineCol::new(line, col),
            end: None,
        }
    }

    /// A spanned location.
    pub const fn spanned(file: FileId, start: LineCol, end: LineCol) -> Self {
        Self {
            file,
            start,
            end: Some(end),
        }
    }

    /// Build a spanned location from a byte range in `file`.
    pub fn from_range(file: FileId, index: &LineIndex, range: TextRange) -> Self {
        Self::spanned(file, index.line_col(range.start()), index.line_col(range.end()))
    }

    pub fn line(&self) -> u32 {
        self.start.line
    }

    pub fn col(&self) -> u32 {
        self.start.col
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.start)?;
        if let Some(end) = self.end {
            write!(f, "-{end}")?;
        }
        Ok(())
    }
}
