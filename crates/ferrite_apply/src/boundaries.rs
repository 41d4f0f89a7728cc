//! Radiation and extent boundary category.

use crate::{codes, ApplyError, ApplyReport};
use ferrite_config::BoundariesConfig;
use ferrite_design::{BoundarySettings, DesignHandle, OpenRegionType};
use ferrite_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

const CATEGORY: &str = "boundaries";

pub(crate) fn apply(
    cfg: Option<&BoundariesConfig>,
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);
    let Some(cfg) = cfg else {
        return Ok(());
    };

    let settings = BoundarySettings {
        open_region: cfg.open_region,
        open_region_type: cfg
            .open_region_type
            .as_deref()
            .and_then(|kind| parse_open_region(kind, sink)),
        pml_visible: cfg.pml_visible,
        pml_operation_frequency: cfg
            .pml_operation_frequency
            .as_deref()
            .and_then(|freq| parse_pml_frequency(freq, sink)),
        pml_radiation_factor: cfg.pml_radiation_factor,
        air_horizontal_extent: cfg.air_horizontal_extent,
        air_vertical_extent: cfg.air_vertical_extent,
    };

    design
        .set_boundaries(&settings)
        .map_err(|err| ApplyError::new(CATEGORY, "boundaries", err))?;
    row.applied += 1;
    Ok(())
}

// The loader validates these fields, but a ConfigRoot built in code skips
// that path; unusable values are dropped with a warning rather than sent to
// the engine.
fn parse_open_region(kind: &str, sink: &DiagnosticSink) -> Option<OpenRegionType> {
    match kind.to_ascii_lowercase().as_str() {
        "radiation" => Some(OpenRegionType::Radiation),
        "pec" => Some(OpenRegionType::Pec),
        other => {
            sink.emit(
                Diagnostic::warning(
                    DiagnosticCode::new(Category::Warning, codes::IGNORED_FIELD),
                    format!("unknown open_region_type '{other}' ignored"),
                )
                .with_origin(CATEGORY, "open_region_type"),
            );
            None
        }
    }
}

fn parse_pml_frequency(
    freq: &str,
    sink: &DiagnosticSink,
) -> Option<ferrite_common::Frequency> {
    match freq.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            sink.emit(
                Diagnostic::warning(
                    DiagnosticCode::new(Category::Warning, codes::IGNORED_FIELD),
                    format!("{err}; pml_operation_frequency ignored"),
                )
                .with_origin(CATEGORY, "pml_operation_frequency"),
            );
            None
        }
    }
}
