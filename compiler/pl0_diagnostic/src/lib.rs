//! Diagnostic system for PL/0 lexical errors.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Line/column of the error's start (where it went wrong)
//! - Notes (extra context)
//!
//! Diagnostics never abort scanning. They are collected in order of
//! detection by a [`DiagnosticQueue`](queue::DiagnosticQueue) and rendered
//! by an [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, ParseErrorCodeError};
