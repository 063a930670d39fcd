use std::fmt;

/// Token kinds for PL/0.
///
/// Closed set: 15 keywords, identifiers, integers, 4 arithmetic operators,
/// 6 relational operators, 4 delimiters, assignment, EOF and a recovery
/// `Error` kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Keywords
    Program,
    Const,
    Var,
    Procedure,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Call,
    Read,
    Write,
    Odd,

    /// Identifier (original-case spelling in the value)
    Ident,
    /// Integer literal (magnitude in the value)
    Int,

    // Arithmetic operators
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /

    // Relational operators
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Delimiters
    LParen,    // (
    RParen,    // )
    Semicolon, // ;
    Comma,     // ,
    Assign,    // :=

    Eof,
    /// Malformed input; a diagnostic was recorded for it.
    Error,
}

/// Coarse grouping of token kinds used by statistics and reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Integer,
    Operator,
    Delimiter,
    Eof,
    Error,
}

impl TokenKind {
    /// Every keyword kind, in keyword-table order.
    pub const KEYWORDS: [TokenKind; 15] = [
        TokenKind::Program,
        TokenKind::Const,
        TokenKind::Var,
        TokenKind::Procedure,
        TokenKind::Begin,
        TokenKind::End,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Call,
        TokenKind::Read,
        TokenKind::Write,
        TokenKind::Odd,
    ];

    /// Stable upper-case name used in token tables and JSON dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Program => "PROGRAM",
            TokenKind::Const => "CONST",
            TokenKind::Var => "VAR",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Call => "CALL",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::Odd => "ODD",
            TokenKind::Ident => "ID",
            TokenKind::Int => "INT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "TIMES",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NEQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LEQ",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GEQ",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eof => "EOF",
            TokenKind::Error => "ERROR",
        }
    }

    /// Statistics category.
    ///
    /// Assignment is grouped with the operators.
    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::Program
            | TokenKind::Const
            | TokenKind::Var
            | TokenKind::Procedure
            | TokenKind::Begin
            | TokenKind::End
            | TokenKind::If
            | TokenKind::Then
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::Call
            | TokenKind::Read
            | TokenKind::Write
            | TokenKind::Odd => TokenCategory::Keyword,
            TokenKind::Ident => TokenCategory::Identifier,
            TokenKind::Int => TokenCategory::Integer,
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::LtEq
            | TokenKind::Gt
            | TokenKind::GtEq
            | TokenKind::Assign => TokenCategory::Operator,
            TokenKind::LParen | TokenKind::RParen | TokenKind::Semicolon | TokenKind::Comma => {
                TokenCategory::Delimiter
            }
            TokenKind::Eof => TokenCategory::Eof,
            TokenKind::Error => TokenCategory::Error,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
