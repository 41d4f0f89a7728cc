//! Voltage and current source creation category.

use crate::ports::terminal;
use crate::{codes, note_entry, ApplyError, ApplyReport, EntryOutcome};
use ferrite_config::{SourceEntry, SourceTypeEntry};
use ferrite_design::{DesignHandle, SourceDef, SourceKind};
use ferrite_diagnostics::DiagnosticSink;

const CATEGORY: &str = "sources";

pub(crate) fn apply(
    entries: &[SourceEntry],
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);

    for entry in entries {
        let def = SourceDef {
            name: entry.name.clone(),
            kind: match entry.source_type {
                SourceTypeEntry::Voltage => SourceKind::Voltage,
                SourceTypeEntry::Current => SourceKind::Current,
            },
            reference_designator: entry.reference_designator.clone(),
            magnitude: entry.magnitude,
            phase: entry.phase,
            positive: terminal(&entry.positive_terminal),
            negative: terminal(&entry.negative_terminal),
        };
        let result = design.create_source(&def);
        match note_entry(
            CATEGORY,
            &entry.name,
            entry.required,
            codes::UNKNOWN_SOURCE_TARGET,
            result,
            sink,
        )? {
            EntryOutcome::Applied => row.applied += 1,
            EntryOutcome::Skipped => row.skipped += 1,
        }
    }
    Ok(())
}
