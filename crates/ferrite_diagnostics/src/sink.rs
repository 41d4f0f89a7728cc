//! Collects the diagnostics of one apply or check pass.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::Mutex;

/// Accumulates diagnostics while a configuration is checked or applied.
///
/// Category appliers borrow the sink and [`emit`](Self::emit) into it as
/// they skip optional entries or drop unusable settings; once the pass
/// finishes, the caller inspects the counts or drains the collected
/// diagnostics for rendering. Emission order is preserved, so a drained
/// pass reads in category order. The interior mutex makes the sink safe to
/// share with the worker threads of a batch runner.
pub struct DiagnosticSink {
    state: Mutex<SinkState>,
}

#[derive(Default)]
struct SinkState {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
    warnings: usize,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SinkState::default()),
        }
    }

    /// Appends a diagnostic, updating the severity tallies.
    pub fn emit(&self, diag: Diagnostic) {
        let mut state = self.state.lock().unwrap();
        match diag.severity {
            Severity::Error => state.errors += 1,
            Severity::Warning => state.warnings += 1,
            Severity::Note => {}
        }
        state.diagnostics.push(diag);
    }

    /// Returns `true` if any error-severity diagnostic has been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// The number of error-severity diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.state.lock().unwrap().errors
    }

    /// The number of warning-severity diagnostics emitted so far.
    pub fn warning_count(&self) -> usize {
        self.state.lock().unwrap().warnings
    }

    /// Drains the collected diagnostics, in emission order.
    ///
    /// The severity tallies are not reset; they cover everything emitted
    /// over the sink's lifetime.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.state.lock().unwrap().diagnostics)
    }

    /// A snapshot of the collected diagnostics, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.state.lock().unwrap().diagnostics.clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
