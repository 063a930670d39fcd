//! Reserved word lookup.
//!
//! PL/0 reserves fifteen words, matched without regard to ASCII case
//! (`BEGIN`, `Begin` and `begin` are all the same keyword). The token keeps
//! the spelling from the source; only the kind comes from this table.
//!
//! Lookup folds the candidate into a small stack buffer and then matches
//! within the bucket for its length, so identifiers that cannot be keywords
//! are rejected before any comparison.

use pl0_ir::TokenKind;

/// Longest reserved word (`procedure`).
const MAX_KEYWORD_LEN: usize = 9;

/// Every reserved word in its canonical lower-case spelling.
pub const KEYWORDS: [(&str, TokenKind); 15] = [
    ("program", TokenKind::Program),
    ("const", TokenKind::Const),
    ("var", TokenKind::Var),
    ("procedure", TokenKind::Procedure),
    ("begin", TokenKind::Begin),
    ("end", TokenKind::End),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("call", TokenKind::Call),
    ("read", TokenKind::Read),
    ("write", TokenKind::Write),
    ("odd", TokenKind::Odd),
];

/// Look up a reserved word, ignoring ASCII case.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=MAX_KEYWORD_LEN).contains(&len) || !text.is_ascii() {
        return None;
    }

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    for (dst, src) in buf.iter_mut().zip(text.bytes()) {
        *dst = src.to_ascii_lowercase();
    }
    let folded = std::str::from_utf8(&buf[..len]).ok()?;

    match len {
        2 => match folded {
            "if" => Some(TokenKind::If),
            "do" => Some(TokenKind::Do),
            _ => None,
        },
        3 => match folded {
            "var" => Some(TokenKind::Var),
            "end" => Some(TokenKind::End),
            "odd" => Some(TokenKind::Odd),
            _ => None,
        },
        4 => match folded {
            "then" => Some(TokenKind::Then),
            "else" => Some(TokenKind::Else),
            "call" => Some(TokenKind::Call),
            "read" => Some(TokenKind::Read),
            _ => None,
        },
        5 => match folded {
            "const" => Some(TokenKind::Const),
            "begin" => Some(TokenKind::Begin),
            "while" => Some(TokenKind::While),
            "write" => Some(TokenKind::Write),
            _ => None,
        },
        7 if folded == "program" => Some(TokenKind::Program),
        9 if folded == "procedure" => Some(TokenKind::Procedure),
        _ => None,
    }
}
