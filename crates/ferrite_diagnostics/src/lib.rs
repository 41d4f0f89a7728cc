//! Diagnostic creation, severity management, and multi-format rendering.
//!
//! This crate provides structured [`Diagnostic`] messages with severity
//! levels, error codes, and configuration-entry origins. The thread-safe
//! [`DiagnosticSink`] accumulates diagnostics during an apply pass, and
//! [`DiagnosticRenderer`] implementations format them for terminal or JSON
//! output.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
