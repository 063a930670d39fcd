use std::fmt;

use pl0_ir::Position;

use crate::ErrorCode;

/// A lexical error: code, message, and the position where the offending
/// construct starts. Lexical diagnostics are always errors.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Start of the offending construct.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub pos: Position,
    /// Additional notes providing context.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            pos: Position::START,
            notes: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Anchor the diagnostic at a source position.
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// The formatted record used in reports:
/// `Lexical error (line L, column C): message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexical error (line {}, column {}): {}",
            self.pos.line, self.pos.column, self.message
        )
    }
}
