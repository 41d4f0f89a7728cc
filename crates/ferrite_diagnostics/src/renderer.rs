//! Diagnostic rendering backends for human-readable and machine-readable output.

use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted output strings.
///
/// Implementations format diagnostics for different output targets:
/// terminal (human-readable) and JSON (machine-readable).
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[R102]: component 'U99' not found in design
///   --> ports: wave_port_1
///    = note: entry skipped
///    = help: check the reference designator against the layout
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn severity_prefix(&self, diag: &Diagnostic) -> String {
        if !self.color {
            return format!("{}[{}]", diag.severity, diag.code);
        }
        let color = match diag.severity {
            crate::Severity::Error => "\x1b[31;1m",
            crate::Severity::Warning => "\x1b[33;1m",
            crate::Severity::Note => "\x1b[36;1m",
        };
        format!("{color}{}[{}]\x1b[0m", diag.severity, diag.code)
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        // Header line: severity[CODE]: message
        out.push_str(&format!(
            "{}: {}\n",
            self.severity_prefix(diag),
            diag.message
        ));

        // Origin line
        match (&diag.section, &diag.entry) {
            (Some(section), Some(entry)) => {
                out.push_str(&format!("  --> {section}: {entry}\n"));
            }
            (Some(section), None) => {
                out.push_str(&format!("  --> {section}\n"));
            }
            _ => {}
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

/// Renders diagnostics as single-line JSON objects, one per diagnostic.
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        serde_json::to_string(diag).unwrap_or_else(|_| "{}".to_string())
    }
}
