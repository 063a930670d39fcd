//! Console run log.
//!
//! Everything here writes to a caller-supplied writer (stdout in the
//! binary, a buffer in tests). Diagnostics go through the terminal emitter
//! so they pick up colors when the writer is a terminal.

use std::io::{self, Write};

use pl0_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use pl0_diagnostic::queue::DiagnosticQueue;
use pl0_ir::{TokenKind, TokenList};

use super::{truncate_value, write_token_header, write_token_row, RULE_WIDTH};
use crate::stats::Statistics;

/// Console values wider than this are cut to fit the table.
const VALUE_WIDTH: usize = 20;

fn rule(out: &mut impl Write, c: char) -> io::Result<()> {
    writeln!(out, "{}", c.to_string().repeat(RULE_WIDTH))
}

pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    rule(out, '=')?;
    writeln!(out, "{:28}PL/0 Lexical Analyzer", "")?;
    rule(out, '=')
}

pub fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  pl0c <source-file> [output-file] [options]")?;
    writeln!(out, "  pl0c --explain <CODE>")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  --format=text|json         Report file format (default: text)")?;
    writeln!(out, "  --color=auto|always|never  Color diagnostics (default: auto)")?;
    writeln!(out, "  --ascii                    Only ASCII letters and whitespace")?;
    writeln!(out, "  -q, --quiet                Skip the source listing and token table")?;
    writeln!(out, "  -h, --help                 Show this message")?;
    writeln!(out, "  -V, --version              Show the version")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  pl0c tests/cases/basic.pl0")?;
    writeln!(out, "  pl0c tests/cases/basic.pl0 output/result.txt")?;
    writeln!(out)?;
    writeln!(out, "Notes:")?;
    writeln!(
        out,
        "  - The report defaults to output/<name>_tokens.txt in the current directory"
    )?;
    writeln!(out, "  - Set RUST_LOG=pl0_lexer=trace to trace the lexer")
}

/// Echo the source with right-aligned line numbers.
pub fn write_source_listing(out: &mut impl Write, source: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " Source Code Content:")?;
    rule(out, '-')?;
    for (number, line) in source.split('\n').enumerate() {
        writeln!(out, "{:3} | {line}", number + 1)?;
    }
    rule(out, '-')
}

/// Token table without the `Eof` row; long values are truncated.
pub fn write_token_table(out: &mut impl Write, tokens: &TokenList) -> io::Result<()> {
    let count = tokens.len().saturating_sub(1);
    writeln!(out)?;
    writeln!(out, " Identified {count} Tokens:")?;
    writeln!(out)?;
    write_token_header(out)?;
    for (index, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Eof {
            let value = truncate_value(&token.value.to_string(), VALUE_WIDTH);
            write_token_row(out, index + 1, token, &value)?;
        }
    }
    Ok(())
}

pub fn write_statistics(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " Statistical Information:")?;
    rule(out, '-')?;
    writeln!(out, "  Total Tokens:   {}", stats.total_tokens)?;
    writeln!(out, "  Keywords:       {}", stats.keywords)?;
    writeln!(out, "  Identifiers:    {}", stats.identifiers)?;
    writeln!(out, "  Integers:       {}", stats.integers)?;
    writeln!(out, "  Operators:      {}", stats.operators)?;
    writeln!(out, "  Delimiters:     {}", stats.delimiters)?;
    writeln!(out, "  Errors:         {}", stats.errors)?;
    rule(out, '-')
}

/// Error section, rendered through the terminal emitter.
pub fn write_diagnostics(
    out: &mut impl Write,
    diagnostics: &DiagnosticQueue,
    color: ColorMode,
    is_tty: bool,
) -> io::Result<()> {
    writeln!(out)?;
    if diagnostics.is_empty() {
        return writeln!(out, " Lexical analysis completed, no errors.");
    }

    writeln!(out, " Found {} Errors:", diagnostics.len())?;
    rule(out, '-')?;
    let mut emitter = TerminalEmitter::with_color_mode(&mut *out, color, is_tty);
    emitter.emit_all(diagnostics.as_slice());
    emitter.emit_summary(diagnostics.error_count());
    emitter.flush();
    rule(out, '-')
}

/// Closing status line.
pub fn write_status(out: &mut impl Write, error_count: usize) -> io::Result<()> {
    writeln!(out)?;
    rule(out, '=')?;
    if error_count == 0 {
        writeln!(out, "  Lexical analysis successfully completed!")
    } else {
        writeln!(
            out,
            "  Lexical analysis completed, but found {error_count} errors"
        )
    }
}
