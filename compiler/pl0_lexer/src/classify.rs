//! Character classification.
//!
//! All predicates are total over `Option<char>`: end-of-input is never a
//! letter, digit, or whitespace. Digits are ASCII `0-9` under every policy
//! so a digit run always converts to a magnitude.

/// Which characters count as letters and whitespace.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum CharClasses {
    /// Unicode alphabetic letters and Unicode whitespace.
    #[default]
    Unicode,
    /// `A-Z`, `a-z` and the six ASCII whitespace characters.
    Ascii,
}

/// Coarse class used by the driver to pick a sub-scanner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharClass {
    Letter,
    Digit,
    Other,
}

impl CharClasses {
    #[inline]
    pub fn is_letter(self, c: impl Into<Option<char>>) -> bool {
        c.into().is_some_and(|c| match self {
            CharClasses::Unicode => c.is_alphabetic(),
            CharClasses::Ascii => c.is_ascii_alphabetic(),
        })
    }

    #[inline]
    #[allow(clippy::unused_self, reason = "digits are ASCII under every policy")]
    pub fn is_digit(self, c: impl Into<Option<char>>) -> bool {
        c.into().is_some_and(|c| c.is_ascii_digit())
    }

    #[inline]
    pub fn is_whitespace(self, c: impl Into<Option<char>>) -> bool {
        c.into().is_some_and(|c| match self {
            CharClasses::Unicode => c.is_whitespace(),
            // `char::is_ascii_whitespace` leaves out vertical tab.
            CharClasses::Ascii => matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'),
        })
    }

    /// Letters win over digits.
    #[inline]
    pub fn classify(self, c: char) -> CharClass {
        if self.is_letter(c) {
            CharClass::Letter
        } else if self.is_digit(c) {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Lexer configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    pub char_classes: CharClasses,
}

impl LexerConfig {
    /// Configuration restricting letters and whitespace to ASCII.
    pub fn ascii() -> Self {
        LexerConfig {
            char_classes: CharClasses::Ascii,
        }
    }
}
