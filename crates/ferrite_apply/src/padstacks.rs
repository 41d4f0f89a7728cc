//! Padstack definition and instance override category.

use crate::{codes, note_entry, ApplyError, ApplyReport, EntryOutcome};
use ferrite_config::{BackdrillEntry, PadstacksConfig};
use ferrite_design::{Backdrill, DesignHandle, PadstackDef, PadstackInstanceDef};
use ferrite_diagnostics::DiagnosticSink;

const CATEGORY: &str = "padstacks";

pub(crate) fn apply(
    cfg: &PadstacksConfig,
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);

    for def in &cfg.definitions {
        let resolved = PadstackDef {
            name: def.name.clone(),
            hole_diameter: def.hole_diameter.clone(),
            hole_plating_thickness: def.hole_plating_thickness.clone(),
            hole_material: def.hole_material.clone(),
            hole_range: def.hole_range.clone(),
        };
        let result = design.update_padstack_definition(&resolved);
        match note_entry(
            CATEGORY,
            &def.name,
            def.required,
            codes::UNKNOWN_PADSTACK,
            result,
            sink,
        )? {
            EntryOutcome::Applied => row.applied += 1,
            EntryOutcome::Skipped => row.skipped += 1,
        }
    }

    for inst in &cfg.instances {
        let resolved = PadstackInstanceDef {
            name: inst.name.clone(),
            backdrill_top: inst.backdrill_top.as_ref().map(backdrill),
            backdrill_bottom: inst.backdrill_bottom.as_ref().map(backdrill),
        };
        let result = design.update_padstack_instance(&resolved);
        match note_entry(
            CATEGORY,
            &inst.name,
            inst.required,
            codes::UNKNOWN_PADSTACK,
            result,
            sink,
        )? {
            EntryOutcome::Applied => row.applied += 1,
            EntryOutcome::Skipped => row.skipped += 1,
        }
    }

    Ok(())
}

fn backdrill(entry: &BackdrillEntry) -> Backdrill {
    Backdrill {
        drill_to_layer: entry.drill_to_layer.clone(),
        diameter: entry.diameter.clone(),
        stub_length: entry.stub_length.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_config::{PadstackDefEntry, PadstackInstanceEntry};
    use ferrite_design::{Mutation, RecordingDesign};

    fn design() -> RecordingDesign {
        let mut d = RecordingDesign::new();
        d.add_padstack_definition("VIA20");
        d.add_padstack_instance("Via1024");
        d
    }

    #[test]
    fn definition_override_passes_dimension_strings() {
        let mut d = design();
        let sink = DiagnosticSink::new();
        let mut report = ApplyReport::default();
        let cfg = PadstacksConfig {
            definitions: vec![PadstackDefEntry {
                name: "VIA20".into(),
                hole_diameter: Some("0.25mm".into()),
                hole_plating_thickness: None,
                hole_material: Some("copper".into()),
                hole_range: None,
                required: false,
            }],
            instances: vec![],
        };
        apply(&cfg, &mut d, &sink, &mut report).unwrap();

        match &d.log()[0] {
            Mutation::UpdatePadstackDefinition(def) => {
                assert_eq!(def.hole_diameter.as_deref(), Some("0.25mm"));
                assert_eq!(def.hole_material.as_deref(), Some("copper"));
            }
            other => panic!("unexpected mutation {other:?}"),
        }
    }

    #[test]
    fn backdrill_instance() {
        let mut d = design();
        let sink = DiagnosticSink::new();
        let mut report = ApplyReport::default();
        let cfg = PadstacksConfig {
            definitions: vec![],
            instances: vec![PadstackInstanceEntry {
                name: "Via1024".into(),
                backdrill_top: Some(BackdrillEntry {
                    drill_to_layer: "L3".into(),
                    diameter: "0.4mm".into(),
                    stub_length: Some("0.1mm".into()),
                }),
                backdrill_bottom: None,
                required: false,
            }],
        };
        apply(&cfg, &mut d, &sink, &mut report).unwrap();
        assert_eq!(report.total_applied(), 1);
    }

    #[test]
    fn unknown_definition_skips_unless_required() {
        let mut d = design();
        let sink = DiagnosticSink::new();
        let mut report = ApplyReport::default();
        let mut cfg = PadstacksConfig {
            definitions: vec![PadstackDefEntry {
                name: "VIA99".into(),
                hole_diameter: Some("0.3mm".into()),
                hole_plating_thickness: None,
                hole_material: None,
                hole_range: None,
                required: false,
            }],
            instances: vec![],
        };
        apply(&cfg, &mut d, &sink, &mut report).unwrap();
        assert_eq!(report.total_skipped(), 1);

        cfg.definitions[0].required = true;
        let err = apply(&cfg, &mut d, &sink, &mut ApplyReport::default()).unwrap_err();
        assert_eq!(err.category, "padstacks");
        assert_eq!(err.entry, "VIA99");
    }
}
