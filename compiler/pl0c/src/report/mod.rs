//! Report rendering.
//!
//! - [`console`]: the human-oriented run log printed to stdout
//! - `text`: the plain report file
//! - `json`: the machine-readable report file

pub mod console;
mod json;
mod text;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use pl0_diagnostic::Diagnostic;
use pl0_ir::TokenList;

use crate::stats::Statistics;
use crate::CliError;

pub use json::write_json;
pub use text::write_text;

/// Width of the `=` and `-` rules.
pub(crate) const RULE_WIDTH: usize = 80;

/// Report file format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Parse `text` or `json`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }

    /// File extension for default output paths.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Everything a report file shows about one lexed source.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    /// Path of the lexed file, as given on the command line.
    pub source: &'a Path,
    pub tokens: &'a TokenList,
    pub diagnostics: &'a [Diagnostic],
    pub statistics: Statistics,
}

/// Write `report` to `path`, creating parent directories as needed.
#[tracing::instrument(level = "debug", skip(path, report), fields(path = %path.display()))]
pub fn write_report_file(
    path: &Path,
    format: ReportFormat,
    report: &Report<'_>,
) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let file = fs::File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    match format {
        ReportFormat::Text => write_text(&mut writer, report).map_err(write_err)?,
        ReportFormat::Json => write_json(&mut writer, report)?,
    }
    writer.flush().map_err(write_err)
}

/// Pad or cut a value for the console token table.
pub(crate) fn truncate_value(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let kept: String = value.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        value.to_string()
    }
}

/// One token-table row: index, line, column, kind, value.
pub(crate) fn write_token_row(
    out: &mut impl Write,
    index: usize,
    token: &pl0_ir::Token,
    value: &str,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{index:<6} {:<6} {:<6} {:<15} {value:<20}",
        token.line(),
        token.column(),
        token.kind.name()
    )
}

/// The token-table column header.
pub(crate) fn write_token_header(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<6} {:<6} {:<6} {:<15} {:<20}",
        "Index", "Line", "Column", "Type", "Value"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

#[cfg(test)]
mod tests;
