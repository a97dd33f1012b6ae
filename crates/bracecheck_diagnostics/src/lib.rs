//! bracecheck_diagnostics: Diagnostic messages and reporting infrastructure.
//!
//! Defines the message templates the scanner emits, the realized
//! [`Diagnostic`] values carrying their resolved text and source line, and
//! the [`DiagnosticCollection`] a scan accumulates into.

use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl DiagnosticCategory {
    /// The capitalized label used when rendering an output line.
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "Warning",
            DiagnosticCategory::Error => "Error",
            DiagnosticCategory::Message => "Message",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The 1-based source line this diagnostic refers to, if any.
    pub line: Option<u32>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
    /// Related diagnostics, rendered indented under the primary line.
    pub related_information: Vec<Diagnostic>,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            line: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
            related_information: Vec::new(),
        }
    }

    /// Create a new diagnostic attached to a 1-based source line.
    pub fn with_line(line: u32, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            line: Some(line),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
            related_information: Vec::new(),
        }
    }

    /// Add related diagnostic information.
    pub fn with_related(mut self, related: Diagnostic) -> Self {
        self.related_information.push(related);
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            DiagnosticCategory::Message => write!(f, "{}", self.message_text)?,
            _ => write!(f, "{}: {}", self.category.label(), self.message_text)?,
        }
        for related in &self.related_information {
            write!(f, "\n  {}", related.message_text)?;
        }
        Ok(())
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during a scan.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNMATCHED_CLOSING_0_AT_LINE_1: DiagnosticMessage = diag!(1001, Error, "Unmatched closing '{0}' at line {1}");
    pub const MISMATCHED_CLOSING_0_AT_LINE_1: DiagnosticMessage = diag!(1002, Error, "Mismatched closing '{0}' at line {1}. Expected closing for '{2}' from line {3}");
    pub const UNCLOSED_BLOCKS_AT_EOF: DiagnosticMessage = diag!(1003, Error, "Unclosed blocks at EOF:");
    // The "form line" wording is the checker's established output format.
    pub const _0_FORM_LINE_1: DiagnosticMessage = diag!(1004, Error, "'{0}' form line {1}");

    // ========================================================================
    // Informational messages (6000+)
    // ========================================================================
    pub const NO_UNCLOSED_BLOCKS_FOUND: DiagnosticMessage = diag!(6001, Message, "No unclosed blocks found.");
}
