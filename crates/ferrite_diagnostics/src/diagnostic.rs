//! Structured diagnostic messages with severity, codes, and entry origins.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A structured diagnostic message tied to a configuration section and entry.
///
/// Diagnostics are the primary mechanism for reporting skipped entries,
/// shadowed settings, and validation problems to the user. Each diagnostic
/// includes:
/// - A severity level and unique code
/// - A primary message
/// - The configuration section (e.g., `"ports"`) and entry identifier
///   (e.g., a port name or reference designator) it originated from
/// - Optional explanatory notes and help text
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The unique code identifying the type of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The configuration section this diagnostic originated from, if any.
    pub section: Option<String>,
    /// The configuration entry (name or reference designator) at fault, if any.
    pub entry: Option<String>,
    /// Explanatory footnotes (e.g., "note: ...").
    pub notes: Vec<String>,
    /// Actionable suggestions (e.g., "help: ...").
    pub help: Vec<String>,
}

impl Diagnostic {
    fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            section: None,
            entry: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates a new error diagnostic with the given code and message.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Creates a new warning diagnostic with the given code and message.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Creates a new note diagnostic with the given code and message.
    pub fn note(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Note, code, message)
    }

    /// Records the configuration section and entry this diagnostic refers to.
    pub fn with_origin(mut self, section: impl Into<String>, entry: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self.entry = Some(entry.into());
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}
