//! Per-component electrical model assignment.
//!
//! The three model blocks on a component entry are mutually exclusive in
//! intent. When a configuration carries more than one, exactly one is
//! assigned, with precedence `spice_model > s_parameter_model > rlc_model`,
//! and the shadowed blocks are reported as warnings.

use crate::context::ApplyContext;
use crate::{codes, note_entry, ApplyError, ApplyReport, EntryOutcome};
use ferrite_config::{ComponentEntry, RlcTopologyEntry};
use ferrite_design::{DesignHandle, ElectricalModel, RlcTopology};
use ferrite_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

const CATEGORY: &str = "components";

pub(crate) fn apply(
    entries: &[ComponentEntry],
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    ctx: &ApplyContext,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);

    for entry in entries {
        let refdes = &entry.reference_designator;
        let Some(model) = select_model(entry, ctx, sink) else {
            sink.emit(
                Diagnostic::note(
                    DiagnosticCode::new(Category::Warning, codes::NO_MODEL),
                    "no model configured; entry has no effect",
                )
                .with_origin(CATEGORY, refdes),
            );
            continue;
        };
        let result = design.assign_model(refdes, &model);
        match note_entry(
            CATEGORY,
            refdes,
            entry.required,
            codes::UNKNOWN_COMPONENT,
            result,
            sink,
        )? {
            EntryOutcome::Applied => row.applied += 1,
            EntryOutcome::Skipped => row.skipped += 1,
        }
    }
    Ok(())
}

/// Picks the model to assign, warning about any shadowed blocks.
fn select_model(
    entry: &ComponentEntry,
    ctx: &ApplyContext,
    sink: &DiagnosticSink,
) -> Option<ElectricalModel> {
    let configured = entry.configured_models();
    if configured.len() > 1 {
        sink.emit(
            Diagnostic::warning(
                DiagnosticCode::new(Category::Warning, codes::SHADOWED_MODEL),
                format!(
                    "multiple models configured; '{}' takes precedence",
                    configured[0]
                ),
            )
            .with_origin(CATEGORY, &entry.reference_designator)
            .with_note(format!("ignored: {}", configured[1..].join(", "))),
        );
    }

    if let Some(spice) = &entry.spice_model {
        return Some(ElectricalModel::Spice {
            file: ctx.resolve_spice_file(&spice.file),
            sub_circuit: spice.sub_circuit_name.clone(),
        });
    }
    if let Some(sp) = &entry.s_parameter_model {
        return Some(ElectricalModel::SParameter {
            file: ctx.resolve_s_parameter_file(&sp.file),
            reference_net: sp.reference_net.clone(),
        });
    }
    entry.rlc_model.as_ref().map(|rlc| ElectricalModel::Rlc {
        topology: match rlc.topology {
            RlcTopologyEntry::Series => RlcTopology::Series,
            RlcTopologyEntry::Parallel => RlcTopology::Parallel,
        },
        resistance: rlc.resistance,
        inductance: rlc.inductance,
        capacitance: rlc.capacitance,
    })
}
