//! Token sub-scanners.
//!
//! The driver snapshots the start position and dispatches on the class of
//! the current character. Each scanner consumes a maximal lexeme and
//! returns exactly one token; malformed input produces an `Error` token and
//! a recorded [`LexError`], never a panic or an early return.

use pl0_ir::{Position, Token, TokenKind, TokenValue};

use crate::classify::CharClasses;
use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::{record, LexError};

/// Identifier or keyword. Entered on a letter.
pub(crate) fn identifier(
    cursor: &mut Cursor<'_>,
    classes: CharClasses,
    start: Position,
) -> Token {
    let text = cursor.eat_while(|c| classes.is_letter(c) || classes.is_digit(c));
    let kind = keywords::lookup(text).unwrap_or(TokenKind::Ident);
    Token::new(kind, TokenValue::Text(text.to_owned()), start)
}

/// Unsigned integer. Entered on a digit.
///
/// A letter right after the digits turns the whole letter/digit run into
/// one `Error` token (`123abc`), so the tail is not re-lexed as a name.
pub(crate) fn number(
    cursor: &mut Cursor<'_>,
    classes: CharClasses,
    errors: &mut Vec<LexError>,
    start: Position,
) -> Token {
    let begin = cursor.offset();
    let digits = cursor.eat_while(|c| classes.is_digit(c));

    if classes.is_letter(cursor.current()) {
        cursor.eat_while(|c| classes.is_letter(c) || classes.is_digit(c));
        let text = cursor.slice_from(begin);
        record(errors, LexError::invalid_number_suffix(start, text));
        return Token::new(TokenKind::Error, TokenValue::Text(text.to_owned()), start);
    }

    match digits.parse::<u64>() {
        Ok(n) => Token::new(TokenKind::Int, TokenValue::Int(n), start),
        Err(_) => {
            record(errors, LexError::integer_overflow(start, digits));
            Token::new(TokenKind::Error, TokenValue::Text(digits.to_owned()), start)
        }
    }
}

/// Operator, delimiter, or illegal character. Entered on `c`, which is
/// the cursor's current character.
pub(crate) fn operator(
    cursor: &mut Cursor<'_>,
    c: char,
    errors: &mut Vec<LexError>,
    start: Position,
) -> Token {
    cursor.advance();
    let symbol =
        |kind: TokenKind, text: &'static str| Token::new(kind, TokenValue::Symbol(text), start);

    match c {
        ':' => {
            if cursor.current() == Some('=') {
                cursor.advance();
                symbol(TokenKind::Assign, ":=")
            } else {
                record(errors, LexError::invalid_assignment(start));
                Token::new(TokenKind::Error, TokenValue::Text(":".to_owned()), start)
            }
        }
        '<' => match cursor.current() {
            Some('=') => {
                cursor.advance();
                symbol(TokenKind::LtEq, "<=")
            }
            Some('>') => {
                cursor.advance();
                symbol(TokenKind::NotEq, "<>")
            }
            _ => symbol(TokenKind::Lt, "<"),
        },
        '>' => {
            if cursor.current() == Some('=') {
                cursor.advance();
                symbol(TokenKind::GtEq, ">=")
            } else {
                symbol(TokenKind::Gt, ">")
            }
        }
        '+' => symbol(TokenKind::Plus, "+"),
        '-' => symbol(TokenKind::Minus, "-"),
        '*' => symbol(TokenKind::Star, "*"),
        '/' => symbol(TokenKind::Slash, "/"),
        '=' => symbol(TokenKind::Eq, "="),
        '(' => symbol(TokenKind::LParen, "("),
        ')' => symbol(TokenKind::RParen, ")"),
        ';' => symbol(TokenKind::Semicolon, ";"),
        ',' => symbol(TokenKind::Comma, ","),
        other => {
            record(errors, LexError::illegal_character(start, other));
            Token::new(TokenKind::Error, TokenValue::Text(other.to_string()), start)
        }
    }
}

#[cfg(test)]
mod tests;
