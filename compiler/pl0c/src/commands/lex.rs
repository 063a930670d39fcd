//! The lex command: tokenize one file, print the run log, write a report.

use std::io::Write;

use pl0_diagnostic::queue::DiagnosticQueue;

use super::read_file;
use crate::options::LexOptions;
use crate::report::{console, write_report_file, Report};
use crate::stats::Statistics;
use crate::CliError;

/// Lex `options.input`, logging to `out` and writing the report file.
///
/// Returns the number of lexical errors. `is_tty` says whether `out` is a
/// terminal, for `--color=auto`.
#[tracing::instrument(level = "debug", skip_all, fields(input = %options.input.display()))]
pub fn lex_file(
    options: &LexOptions,
    out: &mut impl Write,
    is_tty: bool,
) -> Result<usize, CliError> {
    writeln!(out)?;
    writeln!(out, " Reading source file: {}", options.input.display())?;
    let source = read_file(&options.input)?;

    if !options.quiet {
        console::write_source_listing(out, &source)?;
    }

    writeln!(out)?;
    writeln!(out, " Starting lexical analysis...")?;
    let output = pl0_lexer::lex_with_config(&source, options.config);
    let diagnostics: DiagnosticQueue = output.diagnostics().into_iter().collect();
    let statistics = Statistics::collect(&output.tokens, diagnostics.len());

    if !options.quiet {
        console::write_token_table(out, &output.tokens)?;
    }
    console::write_statistics(out, &statistics)?;
    console::write_diagnostics(out, &diagnostics, options.color, is_tty)?;

    let path = options.output_path();
    let report = Report {
        source: &options.input,
        tokens: &output.tokens,
        diagnostics: diagnostics.as_slice(),
        statistics,
    };
    write_report_file(&path, options.format, &report)?;
    writeln!(out)?;
    writeln!(out, " Results have been output to file: {}", path.display())?;

    let error_count = diagnostics.error_count();
    console::write_status(out, error_count)?;
    Ok(error_count)
}
