//! The explain command: describe a lexical error code.

use std::io::Write;

use pl0_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use pl0_diagnostic::ErrorCode;

use crate::CliError;

/// Smallest source that triggers each code.
fn example(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::E0001 => "{ this comment never ends",
        ErrorCode::E0002 => "x := 123abc",
        ErrorCode::E0003 => "x : 1",
        ErrorCode::E0004 => "x := y # 2",
        ErrorCode::E0005 => "x := 99999999999999999999",
    }
}

/// Print a summary of `code_str` and the diagnostic its example produces.
pub fn explain_error(code_str: &str, out: &mut impl Write) -> Result<(), CliError> {
    let code: ErrorCode = code_str.parse()?;
    let source = example(code);

    writeln!(out, "{code}: {}", code.summary())?;
    writeln!(out)?;
    writeln!(out, "Example:")?;
    writeln!(out)?;
    writeln!(out, "    {source}")?;
    writeln!(out)?;

    let output = pl0_lexer::lex(source);
    let mut emitter = TerminalEmitter::with_color_mode(&mut *out, ColorMode::Never, false);
    for diagnostic in output.diagnostics().iter().filter(|d| d.code == code) {
        emitter.emit(diagnostic);
    }
    emitter.flush();
    Ok(())
}
