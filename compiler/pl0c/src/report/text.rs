//! Plain-text report file.
//!
//! ```text
//! ================ (80)
//! PL/0 Lexical Analysis Results
//! ================
//!
//! Index  Line   Column Type            Value
//! ----------------
//! 1      1      1      VAR             var
//! ...
//! ```
//!
//! Values are written in full. The file ends with either the error list
//! or a no-errors line.

use std::io::{self, Write};

use pl0_ir::TokenKind;

use super::{write_token_header, write_token_row, Report, RULE_WIDTH};

/// Render the text report.
pub fn write_text(out: &mut impl Write, report: &Report<'_>) -> io::Result<()> {
    let banner = "=".repeat(RULE_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "PL/0 Lexical Analysis Results")?;
    writeln!(out, "{banner}")?;
    writeln!(out)?;

    write_token_header(out)?;
    for (index, token) in report.tokens.iter().enumerate() {
        if token.kind != TokenKind::Eof {
            write_token_row(out, index + 1, token, &token.value.to_string())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{banner}")?;

    if report.diagnostics.is_empty() {
        writeln!(out)?;
        writeln!(out, "Lexical analysis completed, no errors.")?;
    } else {
        writeln!(out)?;
        writeln!(out, "Error List:")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for diagnostic in report.diagnostics {
            writeln!(out, "{diagnostic}")?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Found {} errors in total.",
            report.diagnostics.len()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{banner}")
}
