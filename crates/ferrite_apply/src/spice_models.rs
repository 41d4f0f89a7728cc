//! SPICE model assignment by component list or part definition.

use crate::context::ApplyContext;
use crate::{codes, note_entry, ApplyError, ApplyReport, EntryOutcome};
use ferrite_config::SpiceModelEntry;
use ferrite_design::{DesignError, DesignHandle, ElectricalModel, EntityKind};
use ferrite_diagnostics::DiagnosticSink;

const CATEGORY: &str = "spice_models";

pub(crate) fn apply(
    entries: &[SpiceModelEntry],
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    ctx: &ApplyContext,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);

    for entry in entries {
        let model = ElectricalModel::Spice {
            file: ctx.resolve_spice_file(&entry.file),
            sub_circuit: entry.sub_circuit_name.clone(),
        };

        for refdes in targets(entry, design, sink)? {
            let result = design.assign_model(&refdes, &model);
            match note_entry(
                CATEGORY,
                &refdes,
                entry.required,
                codes::UNKNOWN_COMPONENT,
                result,
                sink,
            )? {
                EntryOutcome::Applied => row.applied += 1,
                EntryOutcome::Skipped => row.skipped += 1,
            }
        }
    }
    Ok(())
}

/// Resolves the reference designators an entry targets.
///
/// With a `component_definition` and `apply_to_all`, the model goes to every
/// placement of the definition except those explicitly listed; without
/// `apply_to_all`, only the listed components receive it.
fn targets(
    entry: &SpiceModelEntry,
    design: &dyn DesignHandle,
    sink: &DiagnosticSink,
) -> Result<Vec<String>, ApplyError> {
    let Some(definition) = &entry.component_definition else {
        return Ok(entry.components.clone());
    };

    let placements = design.components_of_definition(definition);
    if placements.is_empty() {
        let err = DesignError::not_found(EntityKind::ComponentDefinition, definition);
        return match note_entry(
            CATEGORY,
            &entry.name,
            entry.required,
            codes::UNKNOWN_DEFINITION,
            Err(err),
            sink,
        )? {
            EntryOutcome::Skipped => Ok(Vec::new()),
            EntryOutcome::Applied => unreachable!("Err input never yields Applied"),
        };
    }

    if entry.apply_to_all {
        Ok(placements
            .into_iter()
            .filter(|refdes| !entry.components.contains(refdes))
            .collect())
    } else {
        Ok(entry.components.clone())
    }
}
