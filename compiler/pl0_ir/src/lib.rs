//! PL/0 IR - token and position types shared by the front end.
//!
//! This crate contains the plain data produced by the lexer:
//! - [`Position`] for 1-based line/column source locations
//! - [`Token`], [`TokenKind`], [`TokenValue`] for classified lexemes
//! - [`TokenList`] for the EOF-terminated lexer output
//!
//! Everything here is immutable once built and derives `Clone, Eq, Hash,
//! Debug`, so reporters can inspect or serialize the output without
//! re-running the lexer. Enable the `serde` feature for `Serialize`.

mod position;
mod token;

pub use position::Position;
pub use token::{Token, TokenCategory, TokenKind, TokenList, TokenValue};
