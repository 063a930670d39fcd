//! Lexer for PL/0.
//!
//! Turns PL/0 source text into a [`TokenList`] terminated by a single `Eof`
//! token, plus a list of [`LexError`]s. Lexing never fails: malformed input
//! becomes `Error` tokens and recorded errors, and scanning resumes right
//! after the offending lexeme.
//!
//! # Architecture
//!
//! - [`Cursor`]: character cursor with line/column tracking
//! - `classify`: letter/digit/whitespace policy ([`CharClasses`])
//! - `comments`: `{ ... }` and `(* ... *)` skipping
//! - `scanner`: identifier, number, and operator sub-scanners
//! - [`Lexer`]: the driver, usable as an iterator or eagerly
//!
//! ```
//! use pl0_ir::TokenKind;
//!
//! let output = pl0_lexer::lex("x := 1");
//! let kinds: Vec<_> = output.tokens.kinds().collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Ident, TokenKind::Assign, TokenKind::Int, TokenKind::Eof]
//! );
//! assert!(!output.has_errors());
//! ```

mod classify;
mod comments;
mod cursor;
mod keywords;
mod lex_error;
mod lexer;
mod scanner;

pub use classify::{CharClass, CharClasses, LexerConfig};
pub use cursor::Cursor;
pub use keywords::KEYWORDS;
pub use lex_error::{CommentStyle, LexError, LexErrorKind};
pub use lexer::Lexer;

use pl0_diagnostic::Diagnostic;
use pl0_ir::TokenList;

/// Tokens and errors from lexing one source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOutput {
    /// Every token, ending with exactly one `Eof`.
    pub tokens: TokenList,
    /// Errors in the order they were found.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render every error as a [`Diagnostic`], preserving order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(LexError::to_diagnostic).collect()
    }
}

/// Lex `source` with the default (Unicode) character classes.
pub fn lex(source: &str) -> LexOutput {
    lex_with_config(source, LexerConfig::default())
}

/// Lex `source` with an explicit configuration.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with_config(source: &str, config: LexerConfig) -> LexOutput {
    let output = Lexer::with_config(source, config).tokenize_all();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexing complete"
    );
    output
}
