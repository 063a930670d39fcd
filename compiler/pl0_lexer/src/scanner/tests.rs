use pl0_ir::{Position, TokenKind, TokenValue};
use pretty_assertions::assert_eq;

use super::*;
use crate::lex_error::LexErrorKind;

fn text(s: &str) -> TokenValue {
    TokenValue::Text(s.to_owned())
}

fn scan_ident(source: &str) -> (Token, Option<char>) {
    let mut cursor = Cursor::new(source);
    let start = cursor.position();
    let token = identifier(&mut cursor, CharClasses::Unicode, start);
    (token, cursor.current())
}

fn scan_number(source: &str) -> (Token, Vec<LexError>, Option<char>) {
    let mut cursor = Cursor::new(source);
    let mut errors = Vec::new();
    let start = cursor.position();
    let token = number(&mut cursor, CharClasses::Unicode, &mut errors, start);
    (token, errors, cursor.current())
}

fn scan_operator(source: &str) -> (Token, Vec<LexError>, Option<char>) {
    let mut cursor = Cursor::new(source);
    let mut errors = Vec::new();
    let start = cursor.position();
    let c = cursor.current().unwrap_or('\0');
    let token = operator(&mut cursor, c, &mut errors, start);
    (token, errors, cursor.current())
}

// === Identifiers ===

#[test]
fn test_identifier_maximal_munch() {
    let (token, next) = scan_ident("abc123+1");
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.value, text("abc123"));
    assert_eq!(token.pos, Position::new(1, 1));
    assert_eq!(next, Some('+'));
}

#[test]
fn test_keyword_keeps_spelling() {
    let (upper, _) = scan_ident("BEGIN");
    assert_eq!(upper.kind, TokenKind::Begin);
    assert_eq!(upper.value, text("BEGIN"));

    let (mixed, _) = scan_ident("Begin");
    assert_eq!(mixed.kind, TokenKind::Begin);
    assert_eq!(mixed.value, text("Begin"));
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let (token, _) = scan_ident("endx");
    assert_eq!(token.kind, TokenKind::Ident);
}

#[test]
fn test_ascii_policy_stops_at_non_ascii_letter() {
    let mut cursor = Cursor::new("abé");
    let token = identifier(&mut cursor, CharClasses::Ascii, Position::new(1, 1));
    assert_eq!(token.value, text("ab"));
    assert_eq!(cursor.current(), Some('é'));
}

// === Numbers ===

#[test]
fn test_integer() {
    let (token, errors, next) = scan_number("0042;");
    assert_eq!(token.kind, TokenKind::Int);
    assert_eq!(token.value, TokenValue::Int(42));
    assert!(errors.is_empty());
    assert_eq!(next, Some(';'));
}

#[test]
fn test_integer_max() {
    let (token, errors, _) = scan_number("18446744073709551615");
    assert_eq!(token.value, TokenValue::Int(u64::MAX));
    assert!(errors.is_empty());
}

#[test]
fn test_integer_overflow() {
    let (token, errors, next) = scan_number("18446744073709551616 ");
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.value, text("18446744073709551616"));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        LexErrorKind::IntegerOverflow {
            text: "18446744073709551616".to_owned()
        }
    );
    assert_eq!(next, Some(' '));
}

#[test]
fn test_letter_after_number() {
    let (token, errors, next) = scan_number("123abc4d+");
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.value, text("123abc4d"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].pos, Position::new(1, 1));
    assert_eq!(
        errors[0].message(),
        "Letter cannot directly follow a number: 123abc4d"
    );
    assert_eq!(next, Some('+'));
}

// === Operators ===

#[test]
fn test_assign() {
    let (token, errors, next) = scan_operator(":=x");
    assert_eq!(token.kind, TokenKind::Assign);
    assert_eq!(token.value, TokenValue::Symbol(":="));
    assert!(errors.is_empty());
    assert_eq!(next, Some('x'));
}

#[test]
fn test_lone_colon_leaves_lookahead() {
    let (token, errors, next) = scan_operator(":x");
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.value, text(":"));
    assert_eq!(errors[0].kind, LexErrorKind::InvalidAssignment);
    assert_eq!(next, Some('x'));
}

#[test]
fn test_colon_at_eof() {
    let (token, errors, next) = scan_operator(":");
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(next, None);
}

#[test]
fn test_relational_operators() {
    let cases = [
        ("<=", TokenKind::LtEq),
        ("<>", TokenKind::NotEq),
        ("<", TokenKind::Lt),
        (">=", TokenKind::GtEq),
        (">", TokenKind::Gt),
        ("=", TokenKind::Eq),
    ];
    for (source, kind) in cases {
        let (token, errors, next) = scan_operator(source);
        assert_eq!(token.kind, kind, "{source}");
        assert_eq!(token.value, TokenValue::Symbol(source));
        assert!(errors.is_empty());
        assert_eq!(next, None, "{source} should be fully consumed");
    }
}

#[test]
fn test_less_than_does_not_eat_other() {
    let (token, _, next) = scan_operator("<5");
    assert_eq!(token.kind, TokenKind::Lt);
    assert_eq!(next, Some('5'));
}

#[test]
fn test_single_char_symbols() {
    let cases = [
        ('+', TokenKind::Plus),
        ('-', TokenKind::Minus),
        ('*', TokenKind::Star),
        ('/', TokenKind::Slash),
        ('(', TokenKind::LParen),
        (')', TokenKind::RParen),
        (';', TokenKind::Semicolon),
        (',', TokenKind::Comma),
    ];
    for (c, kind) in cases {
        let source = c.to_string();
        let (token, errors, _) = scan_operator(&source);
        assert_eq!(token.kind, kind);
        assert_eq!(token.value.as_str(), Some(source.as_str()));
        assert!(errors.is_empty());
    }
}

#[test]
fn test_illegal_character() {
    let (token, errors, next) = scan_operator("#1");
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.value, text("#"));
    assert_eq!(errors[0].kind, LexErrorKind::IllegalCharacter { ch: '#' });
    assert_eq!(next, Some('1'));
}

#[test]
fn test_illegal_multibyte_character() {
    let (token, errors, next) = scan_operator("€x");
    assert_eq!(token.value, text("€"));
    assert_eq!(errors[0].message(), "Illegal character: '€'");
    assert_eq!(next, Some('x'));
}
