//! Analysis setup and frequency sweep creation category.

use crate::{codes, ApplyError, ApplyReport};
use ferrite_config::{SetupEntry, SetupTypeEntry};
use ferrite_design::{DesignHandle, SetupDef, SetupKind, SweepSpec};
use ferrite_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

const CATEGORY: &str = "setups";

pub(crate) fn apply(
    entries: &[SetupEntry],
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);

    for entry in entries {
        let kind = match entry.setup_type {
            SetupTypeEntry::SiwaveAc => SetupKind::SiwaveAc,
            SetupTypeEntry::SiwaveDc => SetupKind::SiwaveDc,
            SetupTypeEntry::Hfss => SetupKind::Hfss,
        };

        // f_adapt is an HFSS tunable; other setup kinds have no use for it.
        let adaptive_frequency = match (&entry.f_adapt, kind) {
            (Some(freq), SetupKind::Hfss) => freq.parse().ok(),
            (Some(_), _) => {
                sink.emit(
                    Diagnostic::warning(
                        DiagnosticCode::new(Category::Warning, codes::IGNORED_FIELD),
                        "f_adapt is ignored for siwave setups",
                    )
                    .with_origin(CATEGORY, &entry.name),
                );
                None
            }
            (None, _) => None,
        };

        let def = SetupDef {
            name: entry.name.clone(),
            kind,
            si_slider_position: entry.si_slider_position,
            dc_slider_position: entry.dc_slider_position,
            adaptive_frequency,
            max_passes: entry.max_num_passes,
            max_delta: entry.max_mag_delta_s,
        };
        // Setup creation has no optional-resolution path; any failure is an
        // engine rejection and aborts.
        design
            .create_setup(&def)
            .map_err(|err| ApplyError::new(CATEGORY, &entry.name, err))?;
        row.applied += 1;

        for sweep in &entry.freq_sweep {
            let spec = SweepSpec {
                name: sweep.name.clone(),
                sweep_type: sweep.sweep_type.clone(),
                points: sweep.frequencies.clone(),
            };
            design
                .add_frequency_sweep(&entry.name, &spec)
                .map_err(|err| {
                    ApplyError::new(CATEGORY, format!("{}/{}", entry.name, sweep.name), err)
                })?;
            row.applied += 1;
        }
    }
    Ok(())
}
