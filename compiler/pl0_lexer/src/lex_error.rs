//! Lexical error values.
//!
//! Every error is recoverable: the lexer records it and keeps scanning.
//! A [`LexError`] carries only WHERE and WHAT; rendering into a
//! [`Diagnostic`] (code, message, hint) happens in [`LexError::to_diagnostic`].

use std::fmt;

use pl0_diagnostic::{Diagnostic, ErrorCode};
use pl0_ir::Position;

/// A lexical error anchored at the start of the offending construct.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub pos: Position,
    pub kind: LexErrorKind,
}

/// Which comment form was left open.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CommentStyle {
    /// `{ ... }`
    Brace,
    /// `(* ... *)`
    ParenStar,
}

impl CommentStyle {
    /// The closing delimiter.
    pub fn closer(self) -> &'static str {
        match self {
            CommentStyle::Brace => "}",
            CommentStyle::ParenStar => "*)",
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Comment reached end of input without its closer.
    UnterminatedComment { style: CommentStyle },
    /// Digits immediately followed by a letter (`123abc`).
    InvalidNumberSuffix { text: String },
    /// `:` not followed by `=`.
    InvalidAssignment,
    /// A character that starts no token.
    IllegalCharacter { ch: char },
    /// Digit run larger than `u64::MAX`.
    IntegerOverflow { text: String },
}

impl LexError {
    #[cold]
    pub fn unterminated_comment(pos: Position, style: CommentStyle) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::UnterminatedComment { style },
        }
    }

    #[cold]
    pub fn invalid_number_suffix(pos: Position, text: impl Into<String>) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::InvalidNumberSuffix { text: text.into() },
        }
    }

    #[cold]
    pub fn invalid_assignment(pos: Position) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::InvalidAssignment,
        }
    }

    #[cold]
    pub fn illegal_character(pos: Position, ch: char) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::IllegalCharacter { ch },
        }
    }

    #[cold]
    pub fn integer_overflow(pos: Position, text: impl Into<String>) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::IntegerOverflow { text: text.into() },
        }
    }

    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedComment { .. } => ErrorCode::E0001,
            LexErrorKind::InvalidNumberSuffix { .. } => ErrorCode::E0002,
            LexErrorKind::InvalidAssignment => ErrorCode::E0003,
            LexErrorKind::IllegalCharacter { .. } => ErrorCode::E0004,
            LexErrorKind::IntegerOverflow { .. } => ErrorCode::E0005,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnterminatedComment { style } => {
                format!("Unclosed comment, missing '{}'", style.closer())
            }
            LexErrorKind::InvalidNumberSuffix { text } => {
                format!("Letter cannot directly follow a number: {text}")
            }
            LexErrorKind::InvalidAssignment => "Illegal character ':', expected ':='".to_owned(),
            LexErrorKind::IllegalCharacter { ch } => format!("Illegal character: '{ch}'"),
            LexErrorKind::IntegerOverflow { text } => {
                format!("Integer literal too large: {text}")
            }
        }
    }

    /// Suggested fix, if there is an obvious one.
    pub fn hint(&self) -> Option<String> {
        match &self.kind {
            LexErrorKind::UnterminatedComment { style } => {
                Some(format!("add `{}` to close the comment", style.closer()))
            }
            LexErrorKind::InvalidNumberSuffix { .. } => {
                Some("identifiers must start with a letter".to_owned())
            }
            LexErrorKind::InvalidAssignment => Some("assignment is written `:=`".to_owned()),
            LexErrorKind::IntegerOverflow { .. } => Some(format!(
                "integer literals must not exceed {}",
                u64::MAX
            )),
            LexErrorKind::IllegalCharacter { .. } => None,
        }
    }

    /// Render as a diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .at(self.pos);
        match self.hint() {
            Some(hint) => diag.with_note(hint),
            None => diag,
        }
    }
}

/// `Lexical error (line L, column C): message`
impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexical error (line {}, column {}): {}",
            self.pos.line,
            self.pos.column,
            self.message()
        )
    }
}

/// Push an error onto the lexer's error list.
pub(crate) fn record(errors: &mut Vec<LexError>, err: LexError) {
    tracing::trace!(code = %err.code(), pos = %err.pos, "{}", err.message());
    errors.push(err);
}
