//! Token statistics.

use pl0_ir::{TokenCategory, TokenList};
use serde::Serialize;

/// Per-category token counts plus the number of diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Statistics {
    /// Every token except `Eof`.
    pub total_tokens: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub integers: usize,
    /// Arithmetic and relational operators, and `:=`.
    pub operators: usize,
    pub delimiters: usize,
    pub errors: usize,
}

impl Statistics {
    pub fn collect(tokens: &TokenList, error_count: usize) -> Self {
        let mut stats = Statistics {
            errors: error_count,
            ..Statistics::default()
        };
        for kind in tokens.kinds() {
            match kind.category() {
                TokenCategory::Keyword => stats.keywords += 1,
                TokenCategory::Identifier => stats.identifiers += 1,
                TokenCategory::Integer => stats.integers += 1,
                TokenCategory::Operator => stats.operators += 1,
                TokenCategory::Delimiter => stats.delimiters += 1,
                TokenCategory::Eof => continue,
                TokenCategory::Error => {}
            }
            stats.total_tokens += 1;
        }
        stats
    }
}
