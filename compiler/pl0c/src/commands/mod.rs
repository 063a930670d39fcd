//! Command handlers for the `pl0c` driver.
//!
//! Each submodule implements one command. Shared helpers such as
//! [`read_file`] live here in the module root.

mod explain;
mod lex;

use std::path::Path;

pub use explain::explain_error;
pub use lex::lex_file;

use crate::CliError;

/// Read a source file as UTF-8.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
