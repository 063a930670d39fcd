//! Comment skipping.
//!
//! Two forms, neither nests: `{ ... }` and `(* ... *)`. A comment yields no
//! token. An unclosed comment swallows the rest of the input and records
//! one error at the opening delimiter.

use crate::cursor::Cursor;
use crate::lex_error::{record, CommentStyle, LexError};

/// Returns `true` if the cursor sits on `{` or on `(` followed by `*`.
#[inline]
pub(crate) fn starts_comment(cursor: &Cursor<'_>) -> bool {
    match cursor.current() {
        Some('{') => true,
        Some('(') => cursor.peek(1) == Some('*'),
        _ => false,
    }
}

/// Skip the comment starting at the cursor.
///
/// Does nothing unless [`starts_comment`] holds.
pub(crate) fn skip_comment(cursor: &mut Cursor<'_>, errors: &mut Vec<LexError>) {
    let start = cursor.position();
    match cursor.current() {
        Some('{') => {
            cursor.advance();
            cursor.eat_while(|c| c != '}');
            if cursor.is_eof() {
                record(errors, LexError::unterminated_comment(start, CommentStyle::Brace));
            } else {
                cursor.advance();
            }
        }
        Some('(') if cursor.peek(1) == Some('*') => {
            cursor.advance();
            cursor.advance();
            while let Some(c) = cursor.current() {
                if c == '*' && cursor.peek(1) == Some(')') {
                    cursor.advance();
                    cursor.advance();
                    return;
                }
                cursor.advance();
            }
            record(
                errors,
                LexError::unterminated_comment(start, CommentStyle::ParenStar),
            );
        }
        _ => {}
    }
}
