//! Driver errors.
//!
//! Lexical problems are not errors here: they are diagnostics and end up
//! in the report. `CliError` covers everything that stops the driver.

use std::io;
use std::path::{Path, PathBuf};

use pl0_diagnostic::ParseErrorCodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    #[error("{}", read_message(path, source))]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write report: {0}")]
    Json(#[from] serde_json::Error),

    /// Console output failed (closed pipe and the like).
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    UnknownCode(#[from] ParseErrorCodeError),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }
}

fn read_message(path: &Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_messages_by_kind() {
        let read = |kind| CliError::Read {
            path: PathBuf::from("prog.pl0"),
            source: io::Error::from(kind),
        };
        assert_eq!(
            read(io::ErrorKind::NotFound).to_string(),
            "cannot find file 'prog.pl0'"
        );
        assert_eq!(
            read(io::ErrorKind::PermissionDenied).to_string(),
            "permission denied reading 'prog.pl0'"
        );
        assert_eq!(
            read(io::ErrorKind::InvalidData).to_string(),
            "'prog.pl0' contains invalid UTF-8 data"
        );
    }

    #[test]
    fn unknown_code_is_transparent() {
        let Err(parse_err) = "E9999".parse::<pl0_diagnostic::ErrorCode>() else {
            panic!("E9999 should not parse");
        };
        let err = CliError::from(parse_err);
        assert_eq!(err.to_string(), "unknown error code 'E9999'");
    }
}
