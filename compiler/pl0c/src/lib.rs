//! `pl0c`: command-line driver for the PL/0 lexer.
//!
//! The binary is a thin wrapper around [`run`]; everything else is public
//! so integration tests can drive commands against in-memory writers.

pub mod commands;
mod error;
pub mod options;
pub mod report;
pub mod stats;
mod tracing_setup;

use std::io::Write;

pub use error::CliError;
pub use tracing_setup::init_tracing;

use options::Command;
use report::console;

/// Run the driver on `args` (program name excluded) and return the exit
/// status: 0 when no lexical errors were found, 1 otherwise.
///
/// `is_tty` says whether `out` is a terminal.
pub fn run(args: &[String], out: &mut impl Write, is_tty: bool) -> Result<i32, CliError> {
    let command = options::parse_args(args)?;
    tracing::debug!(?command, "parsed command line");

    match command {
        Command::Help => {
            console::write_banner(out)?;
            console::write_usage(out)?;
            Ok(0)
        }
        Command::Version => {
            writeln!(out, "pl0c {}", env!("CARGO_PKG_VERSION"))?;
            Ok(0)
        }
        Command::Explain(code) => {
            commands::explain_error(&code, out)?;
            Ok(0)
        }
        Command::Lex(options) => {
            console::write_banner(out)?;
            let errors = commands::lex_file(&options, out, is_tty)?;
            Ok(i32::from(errors > 0))
        }
    }
}
