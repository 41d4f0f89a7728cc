//! Applies a parsed configuration against a design handle.
//!
//! This crate owns the dependency order between configuration categories and
//! the error taxonomy of an apply pass. Given a [`ConfigRoot`] and a
//! [`DesignHandle`], [`apply_configuration`] runs the categories in a fixed
//! order:
//!
//! 1. **general** — records library paths, mutates nothing
//! 2. **nets** — classification must precede model and port work
//! 3. **padstacks**
//! 4. **components** — models may reference classified nets
//! 5. **pin groups** — must exist before terminals reference them
//! 6. **ports**
//! 7. **sources**
//! 8. **setups** — with their frequency sweeps
//! 9. **spice models**
//! 10. **boundaries**
//!
//! A resolution failure on an optional entry is reported as a warning
//! through the [`DiagnosticSink`] and the entry is skipped. A resolution
//! failure on a `required` entry, or any mutation the engine rejects, aborts
//! the pass with an [`ApplyError`] naming the category and entry. Categories
//! already applied stay applied; there is no rollback.
//!
//! Apply passes are serialized process-wide: the engine session behind the
//! handle is a shared singleton, so two passes never interleave even when
//! called from different threads.

#![warn(missing_docs)]

pub mod error;
pub mod report;

mod boundaries;
mod components;
mod context;
mod nets;
mod padstacks;
mod pin_groups;
mod ports;
mod setups;
mod sources;
mod spice_models;

pub use error::ApplyError;
pub use report::{ApplyReport, CategoryReport};

use ferrite_config::ConfigRoot;
use ferrite_design::{DesignError, DesignHandle};
use ferrite_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use std::sync::Mutex;

static APPLY_GUARD: Mutex<()> = Mutex::new(());

/// Applies a configuration to a design, category by category.
///
/// Emits warnings for skipped optional entries into `sink` and returns a
/// per-category [`ApplyReport`] on success. On failure the returned
/// [`ApplyError`] names the category and entry at fault; everything applied
/// before that point remains applied.
pub fn apply_configuration(
    config: &ConfigRoot,
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
) -> Result<ApplyReport, ApplyError> {
    // One pass at a time against the process-wide engine session. A pass
    // that panicked can't have left the guard meaningfully poisoned.
    let _guard = APPLY_GUARD.lock().unwrap_or_else(|p| p.into_inner());

    let ctx = context::ApplyContext::from_general(&config.general);
    let mut report = ApplyReport::default();
    report.category("general");

    nets::apply(&config.nets, design, sink, &mut report)?;
    padstacks::apply(&config.padstacks, design, sink, &mut report)?;
    components::apply(&config.components, design, sink, &ctx, &mut report)?;
    pin_groups::apply(&config.pin_groups, design, sink, &mut report)?;
    ports::apply(&config.ports, design, sink, &mut report)?;
    sources::apply(&config.sources, design, sink, &mut report)?;
    setups::apply(&config.setups, design, sink, &mut report)?;
    spice_models::apply(&config.spice_models, design, sink, &ctx, &mut report)?;
    boundaries::apply(config.boundaries.as_ref(), design, sink, &mut report)?;

    Ok(report)
}

/// Diagnostic code numbers used by the apply engine.
pub(crate) mod codes {
    /// R-codes: per-category resolution failures.
    pub const UNKNOWN_NET: u16 = 101;
    pub const UNKNOWN_PADSTACK: u16 = 102;
    pub const UNKNOWN_COMPONENT: u16 = 103;
    pub const UNKNOWN_PIN_GROUP_TARGET: u16 = 104;
    pub const UNKNOWN_PORT_TARGET: u16 = 105;
    pub const UNKNOWN_SOURCE_TARGET: u16 = 106;
    pub const UNKNOWN_DEFINITION: u16 = 107;

    /// W-codes: non-fatal configuration oddities.
    pub const SHADOWED_MODEL: u16 = 1;
    pub const NO_MODEL: u16 = 2;
    pub const IGNORED_FIELD: u16 = 3;
}

#[derive(Debug)]
pub(crate) enum EntryOutcome {
    Applied,
    Skipped,
}

/// Folds one design-handle result into the pass outcome.
///
/// `Ok` applies. A resolution failure on an optional entry becomes a warning
/// with the given R-code and the entry is skipped; anything else aborts.
pub(crate) fn note_entry(
    category: &'static str,
    entry: &str,
    required: bool,
    resolution_code: u16,
    result: Result<(), DesignError>,
    sink: &DiagnosticSink,
) -> Result<EntryOutcome, ApplyError> {
    match result {
        Ok(()) => Ok(EntryOutcome::Applied),
        Err(err) if err.is_resolution() && !required => {
            sink.emit(
                Diagnostic::warning(
                    DiagnosticCode::new(Category::Resolution, resolution_code),
                    format!("{err}"),
                )
                .with_origin(category, entry)
                .with_note("entry skipped"),
            );
            Ok(EntryOutcome::Skipped)
        }
        Err(err) => Err(ApplyError::new(category, entry, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_design::EntityKind;

    #[test]
    fn ok_is_applied() {
        let sink = DiagnosticSink::new();
        let outcome = note_entry("nets", "N1", false, codes::UNKNOWN_NET, Ok(()), &sink).unwrap();
        assert!(matches!(outcome, EntryOutcome::Applied));
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn optional_resolution_failure_warns_and_skips() {
        let sink = DiagnosticSink::new();
        let result = Err(DesignError::not_found(EntityKind::Net, "VDD"));
        let outcome =
            note_entry("nets", "VDD", false, codes::UNKNOWN_NET, result, &sink).unwrap();
        assert!(matches!(outcome, EntryOutcome::Skipped));
        let diags = sink.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(format!("{}", diags[0].code), "R101");
        assert_eq!(diags[0].section.as_deref(), Some("nets"));
    }

    #[test]
    fn required_resolution_failure_aborts() {
        let sink = DiagnosticSink::new();
        let result = Err(DesignError::not_found(EntityKind::Component, "U9"));
        let err =
            note_entry("ports", "p1", true, codes::UNKNOWN_PORT_TARGET, result, &sink).unwrap_err();
        assert_eq!(err.category, "ports");
        assert_eq!(err.entry, "p1");
        assert!(err.is_resolution());
    }

    #[test]
    fn rejection_aborts_even_when_optional() {
        let sink = DiagnosticSink::new();
        let result = Err(DesignError::rejected("create_port", "duplicate"));
        let err =
            note_entry("ports", "p1", false, codes::UNKNOWN_PORT_TARGET, result, &sink)
                .unwrap_err();
        assert!(!err.is_resolution());
    }
}
