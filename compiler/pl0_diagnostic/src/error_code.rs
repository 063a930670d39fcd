use std::fmt;
use std::str::FromStr;

/// Error codes for all lexical diagnostics.
///
/// Format: E#### (lexer errors live in the E0xxx range).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum ErrorCode {
    /// Unterminated comment
    E0001,
    /// Letter directly after a number
    E0002,
    /// `:` not followed by `=`
    E0003,
    /// Illegal character in source
    E0004,
    /// Integer literal too large
    E0005,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
    ];

    /// Get the numeric code as a string (e.g., "E0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
        }
    }

    /// One-line summary of what the code means.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated comment",
            ErrorCode::E0002 => "letter directly after a number",
            ErrorCode::E0003 => "invalid assignment operator",
            ErrorCode::E0004 => "illegal character",
            ErrorCode::E0005 => "integer literal too large",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when parsing an unknown error code string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseErrorCodeError(String);

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code '{}'", self.0)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| ParseErrorCodeError(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
