//! Pin group creation category.

use crate::{codes, note_entry, ApplyError, ApplyReport, EntryOutcome};
use ferrite_config::PinGroupEntry;
use ferrite_design::{DesignHandle, PinGroupDef};
use ferrite_diagnostics::DiagnosticSink;

const CATEGORY: &str = "pin_groups";

pub(crate) fn apply(
    entries: &[PinGroupEntry],
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);

    for entry in entries {
        let def = PinGroupDef {
            name: entry.name.clone(),
            reference_designator: entry.reference_designator.clone(),
            pins: entry.pins.clone(),
            net: entry.net.clone(),
        };
        let result = design.create_pin_group(&def);
        match note_entry(
            CATEGORY,
            &entry.name,
            entry.required,
            codes::UNKNOWN_PIN_GROUP_TARGET,
            result,
            sink,
        )? {
            EntryOutcome::Applied => row.applied += 1,
            EntryOutcome::Skipped => row.skipped += 1,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_design::{Mutation, RecordingDesign};

    fn design() -> RecordingDesign {
        let mut d = RecordingDesign::new();
        d.add_net("VDD");
        d.add_component("U1", None, &["A1", "A2", "B1"]);
        d
    }

    #[test]
    fn creates_pin_list_group() {
        let mut d = design();
        let sink = DiagnosticSink::new();
        let mut report = ApplyReport::default();
        let entry = PinGroupEntry {
            name: "vdd_pins".into(),
            reference_designator: "U1".into(),
            pins: vec!["A1".into(), "A2".into()],
            net: None,
            required: false,
        };
        apply(&[entry], &mut d, &sink, &mut report).unwrap();

        match &d.log()[0] {
            Mutation::CreatePinGroup(def) => {
                assert_eq!(def.pins, vec!["A1", "A2"]);
                assert!(def.net.is_none());
            }
            other => panic!("unexpected mutation {other:?}"),
        }
    }

    #[test]
    fn creates_net_group() {
        let mut d = design();
        let sink = DiagnosticSink::new();
        let entry = PinGroupEntry {
            name: "vdd_net_pins".into(),
            reference_designator: "U1".into(),
            pins: vec![],
            net: Some("VDD".into()),
            required: false,
        };
        apply(&[entry], &mut d, &sink, &mut ApplyReport::default()).unwrap();
        assert_eq!(d.log().len(), 1);
    }

    #[test]
    fn unknown_component_skips() {
        let mut d = design();
        let sink = DiagnosticSink::new();
        let mut report = ApplyReport::default();
        let entry = PinGroupEntry {
            name: "g1".into(),
            reference_designator: "U99".into(),
            pins: vec!["A1".into()],
            net: None,
            required: false,
        };
        apply(&[entry], &mut d, &sink, &mut report).unwrap();
        assert_eq!(report.total_skipped(), 1);
        assert_eq!(format!("{}", sink.diagnostics()[0].code), "R104");
    }
}
