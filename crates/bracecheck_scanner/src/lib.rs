//! bracecheck_scanner: the delimiter-balance scanning state machine.
//!
//! A single-pass, language-agnostic scanner for C-like, string-templated
//! source files. It tracks string and comment context well enough to know
//! which brackets are structural, and reports:
//! - closing brackets with no open bracket pending
//! - closing brackets that do not match the most recent open bracket
//! - brackets still open at end of file

mod char_codes;
mod scanner;

pub use scanner::{BracketFrame, Scanner};

use std::path::Path;

use bracecheck_diagnostics::DiagnosticCollection;
use thiserror::Error;

/// A failure to read the input. Syntax problems are diagnostics, not errors.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error reading file: {0}")]
    Read(#[from] std::io::Error),
}

/// Scan source text already in memory.
pub fn check_source(text: &str) -> DiagnosticCollection {
    let mut scanner = Scanner::new(text);
    scanner.scan();
    scanner.take_diagnostics()
}

/// Read a file as UTF-8 and scan it.
pub fn check_file(path: impl AsRef<Path>) -> Result<DiagnosticCollection, ScanError> {
    let text = std::fs::read_to_string(path)?;
    Ok(check_source(&text))
}
