//! Source positions.
//!
//! Positions are line/column pairs, both 1-based, counted in characters
//! (not bytes). The column counter is reset to 0 when a newline is
//! consumed, so a position taken right after a trailing newline (the EOF
//! token of `"x\n"`) reports column 0.

use std::fmt;

/// A line/column location in PL/0 source text.
///
/// Ordered lexicographically: line first, then column.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position before any character has been read.
    pub const START: Position = Position { line: 1, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
