use pl0_ir::Position;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_new_primes_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.position(), Position::new(1, 1));
    assert!(!cursor.is_eof());
}

#[test]
fn test_empty_source() {
    let mut cursor = Cursor::new("");
    assert_eq!(cursor.current(), None);
    assert!(cursor.is_eof());
    assert_eq!(cursor.position(), Position::new(1, 0));

    // Advancing past the end is harmless.
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.position(), Position::new(1, 0));
}

#[test]
fn test_advance_columns() {
    let mut cursor = Cursor::new("ab");
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.position(), Position::new(1, 2));
    cursor.advance();
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.position(), Position::new(1, 2));
}

#[test]
fn test_newline_resets_column() {
    let mut cursor = Cursor::new("a\nb");
    cursor.advance();
    assert_eq!(cursor.current(), Some('\n'));
    assert_eq!(cursor.position(), Position::new(2, 0));
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.position(), Position::new(2, 1));
}

#[test]
fn test_eof_after_trailing_newline() {
    let mut cursor = Cursor::new("x\n");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.position(), Position::new(2, 0));
}

#[test]
fn test_peek() {
    let cursor = Cursor::new("(*)");
    assert_eq!(cursor.peek(0), Some('('));
    assert_eq!(cursor.peek(1), Some('*'));
    assert_eq!(cursor.peek(2), Some(')'));
    assert_eq!(cursor.peek(3), None);
    // Peeking never moves the cursor.
    assert_eq!(cursor.current(), Some('('));
}

#[test]
fn test_eat_while_returns_consumed_text() {
    let mut cursor = Cursor::new("abc123 rest");
    let word = cursor.eat_while(char::is_alphabetic);
    assert_eq!(word, "abc");
    assert_eq!(cursor.current(), Some('1'));

    let digits = cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(digits, "123");
    assert_eq!(cursor.position(), Position::new(1, 7));
}

#[test]
fn test_eat_while_to_eof() {
    let mut cursor = Cursor::new("xyz");
    assert_eq!(cursor.eat_while(|_| true), "xyz");
    assert!(cursor.is_eof());
    assert_eq!(cursor.offset(), 3);
}

#[test]
fn test_multibyte_offsets() {
    let mut cursor = Cursor::new("äbc");
    assert_eq!(cursor.offset(), 0);
    cursor.advance();
    assert_eq!(cursor.offset(), 2);
    assert_eq!(cursor.slice_from(0), "ä");
    assert_eq!(cursor.position(), Position::new(1, 2));
}

#[test]
fn test_copy_is_snapshot() {
    let mut cursor = Cursor::new("ab");
    let snapshot = cursor;
    cursor.advance();
    assert_eq!(snapshot.current(), Some('a'));
    assert_eq!(cursor.current(), Some('b'));
}
