//! Excitation port creation category.

use crate::{codes, note_entry, ApplyError, ApplyReport, EntryOutcome};
use ferrite_config::{PortEntry, PortTypeEntry, TerminalEntry};
use ferrite_design::{DesignHandle, PortDef, PortKind, Terminal};
use ferrite_diagnostics::DiagnosticSink;

const CATEGORY: &str = "ports";

pub(crate) fn terminal(entry: &TerminalEntry) -> Terminal {
    match entry {
        TerminalEntry::Pin { pin } => Terminal::Pin(pin.clone()),
        TerminalEntry::PinGroup { pin_group } => Terminal::PinGroup(pin_group.clone()),
        TerminalEntry::Net { net } => Terminal::Net(net.clone()),
    }
}

pub(crate) fn apply(
    entries: &[PortEntry],
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);

    for entry in entries {
        let def = PortDef {
            name: entry.name.clone(),
            kind: match entry.port_type {
                PortTypeEntry::Circuit => PortKind::Circuit,
                PortTypeEntry::Coax => PortKind::Coax,
            },
            reference_designator: entry.reference_designator.clone(),
            positive: terminal(&entry.positive_terminal),
            negative: entry.negative_terminal.as_ref().map(terminal),
        };
        let result = design.create_port(&def);
        match note_entry(
            CATEGORY,
            &entry.name,
            entry.required,
            codes::UNKNOWN_PORT_TARGET,
            result,
            sink,
        )? {
            EntryOutcome::Applied => row.applied += 1,
            EntryOutcome::Skipped => row.skipped += 1,
        }
    }
    Ok(())
}
