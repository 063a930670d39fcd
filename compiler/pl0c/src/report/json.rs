//! JSON report file.

use std::io::Write;
use std::path::Path;

use pl0_diagnostic::Diagnostic;
use pl0_ir::TokenList;
use serde::Serialize;

use super::Report;
use crate::stats::Statistics;
use crate::CliError;

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a Path,
    tokens: &'a TokenList,
    errors: &'a [Diagnostic],
    statistics: Statistics,
}

/// Render the report as pretty-printed JSON, followed by a newline.
pub fn write_json(out: &mut impl Write, report: &Report<'_>) -> Result<(), CliError> {
    let json = JsonReport {
        source: report.source,
        tokens: report.tokens,
        errors: report.diagnostics,
        statistics: report.statistics,
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    out.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}
