//! The lexing driver.
//!
//! [`Lexer`] skips whitespace and comments, snapshots the start position of
//! the next lexeme, classifies its first character, and hands off to one of
//! the three sub-scanners. Errors accumulate on the lexer; scanning never
//! stops early.

use pl0_ir::{Token, TokenKind, TokenList};

use crate::classify::{CharClass, LexerConfig};
use crate::comments;
use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::scanner;
use crate::LexOutput;

/// Streaming PL/0 lexer over a borrowed source.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    config: LexerConfig,
    errors: Vec<LexError>,
    /// Set once the iterator has yielded `Eof`.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            config,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token at
    /// the final position.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        tracing::trace!(%token, "scanned");
        token
    }

    fn scan_token(&mut self) -> Token {
        let classes = self.config.char_classes;
        while let Some(c) = self.cursor.current() {
            if classes.is_whitespace(c) {
                self.cursor.eat_while(|c| classes.is_whitespace(c));
                continue;
            }
            if comments::starts_comment(&self.cursor) {
                comments::skip_comment(&mut self.cursor, &mut self.errors);
                continue;
            }

            let start = self.cursor.position();
            return match classes.classify(c) {
                CharClass::Letter => scanner::identifier(&mut self.cursor, classes, start),
                CharClass::Digit => {
                    scanner::number(&mut self.cursor, classes, &mut self.errors, start)
                }
                CharClass::Other => {
                    scanner::operator(&mut self.cursor, c, &mut self.errors, start)
                }
            };
        }
        Token::eof(self.cursor.position())
    }

    /// Errors recorded so far, in the order they were found.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Lex the remaining input, up to and including the first `Eof`.
    pub fn tokenize_all(mut self) -> LexOutput {
        let mut tokens = TokenList::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        LexOutput {
            tokens,
            errors: self.errors,
        }
    }
}

/// Yields every token including exactly one `Eof`, then `None`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenKind::Eof;
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
