//! Token types for the PL/0 lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme's [`TokenValue`] and
//! the [`Position`] of its first character.

mod kind;
mod list;

pub use kind::{TokenCategory, TokenKind};
pub use list::TokenList;

use std::fmt;

use super::Position;

/// Payload carried by a token.
///
/// Keywords and identifiers keep their spelling exactly as written (the
/// keyword table is case-insensitive, the value is not). Operators carry
/// their fixed text; error tokens carry the offending source text.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum TokenValue {
    /// No payload (EOF).
    #[default]
    None,
    /// Source spelling: identifiers, keywords, and error text.
    Text(String),
    /// Integer magnitude.
    Int(u64),
    /// Fixed operator or delimiter text (`:=`, `<>`, `;`, ...).
    Symbol(&'static str),
}

impl TokenValue {
    /// The textual payload, if this value is text or a symbol.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Symbol(sym) => Some(sym),
            TokenValue::None | TokenValue::Int(_) => None,
        }
    }

    /// The integer payload, if this value is a magnitude.
    pub fn as_int(&self) -> Option<u64> {
        match self {
            TokenValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, TokenValue::None)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Int(n) => write!(f, "{n}"),
            TokenValue::Symbol(sym) => f.write_str(sym),
        }
    }
}

/// A classified lexeme with its source position.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: TokenValue, pos: Position) -> Self {
        Token { kind, value, pos }
    }

    /// Create the end-of-input token.
    #[inline]
    pub fn eof(pos: Position) -> Self {
        Token {
            kind: TokenKind::Eof,
            value: TokenValue::None,
            pos,
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.pos.column
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_none() {
            write!(f, "{:?} @ {}", self.kind, self.pos)
        } else {
            write!(f, "{:?}({:?}) @ {}", self.kind, self.value, self.pos)
        }
    }
}

/// Renders as `<KIND, value, lineL, columnC>`. A token without a value
/// prints `None` in the value slot.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, ", self.kind.name())?;
        if self.value.is_none() {
            f.write_str("None")?;
        } else {
            write!(f, "{}", self.value)?;
        }
        write!(f, ", line{}, column{}>", self.pos.line, self.pos.column)
    }
}
