//! Character cursor over PL/0 source text.
//!
//! The cursor always holds the most recently read character as `current`.
//! Construction performs the first read, so `current()` is the first
//! character of the source (or `None` for empty input). Each `advance()`
//! reads the next character and bumps the column; reading a `\n` bumps
//! the line and resets the column to 0, so the character after a newline
//! lands on column 1.
//!
//! Positions only move forward. The cursor is [`Copy`], so a snapshot is a
//! plain copy.

use pl0_ir::Position;

/// Forward-only cursor over a `&str`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte offset just past `current`.
    next: usize,
    /// Most recently read character; `None` once the source is exhausted.
    current: Option<char>,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Cursor {
            source,
            next: 0,
            current: None,
            line: Position::START.line,
            column: Position::START.column,
        };
        cursor.advance();
        cursor
    }

    /// Returns the current character, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the character `k` positions after the current one.
    ///
    /// `peek(1)` is the character right after `current()`. `peek(0)` is
    /// `current()` itself. Returns `None` past the end of the source.
    #[inline]
    pub fn peek(&self, k: usize) -> Option<char> {
        match k {
            0 => self.current,
            _ => self.source[self.next..].chars().nth(k - 1),
        }
    }

    /// Read the next character.
    ///
    /// At EOF this is a no-op apart from keeping `current()` at `None`;
    /// line and column stay where the last character left them.
    #[inline]
    pub fn advance(&mut self) {
        match self.source[self.next..].chars().next() {
            Some(c) => {
                self.next += c.len_utf8();
                self.current = Some(c);
                self.column += 1;
                if c == '\n' {
                    self.line += 1;
                    self.column = 0;
                }
            }
            None => self.current = None,
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Line/column of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Byte offset of the current character (source length at EOF).
    #[inline]
    pub fn offset(&self) -> usize {
        self.next - self.current.map_or(0, char::len_utf8)
    }

    /// Source text from byte offset `start` up to (excluding) the current
    /// character.
    ///
    /// `start` must come from an earlier [`offset()`](Self::offset) call on
    /// this cursor, which keeps it on a character boundary.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.offset(), "slice start {start} is ahead of the cursor");
        &self.source[start..self.offset()]
    }

    /// Advance while `pred` returns `true` for the current character and
    /// return the consumed text.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.offset();
        while self.current.is_some_and(&pred) {
            self.advance();
        }
        self.slice_from(start)
    }
}

#[cfg(test)]
mod tests;
