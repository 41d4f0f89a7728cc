//! `ferrite apply` — run a configuration against a design snapshot.
//!
//! Loads the configuration, builds an in-memory design from an inventory
//! snapshot, and runs a full apply pass. Skipped-entry warnings and the
//! per-category report go to the terminal; the recorded mutation log can be
//! written out for inspection or replay against a live session.

use std::path::Path;

use ferrite_apply::apply_configuration;
use ferrite_design::{DesignSnapshot, RecordingDesign};
use ferrite_diagnostics::{
    Category, Diagnostic, DiagnosticCode, DiagnosticRenderer, TerminalRenderer,
};

use crate::check::{config_diagnostic, render_one};
use crate::{ApplyArgs, GlobalArgs, ReportFormat};

/// A101: the apply pass aborted.
const PASS_ABORTED: u16 = 101;

/// Runs the `ferrite apply` command.
///
/// Returns exit code 0 if the pass completed (with or without skipped
/// entries), 1 if it aborted.
pub fn run(args: &ApplyArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = match ferrite_config::load_config(Path::new(&args.config)) {
        Ok(config) => config,
        Err(err) => {
            render_one(&config_diagnostic(&err), args.format, global);
            return Ok(1);
        }
    };

    let content = std::fs::read_to_string(&args.design)
        .map_err(|e| format!("failed to read design snapshot {}: {e}", args.design))?;
    let snapshot: DesignSnapshot = serde_json::from_str(&content)
        .map_err(|e| format!("failed to parse design snapshot {}: {e}", args.design))?;
    let mut design = RecordingDesign::from_snapshot(snapshot);

    let sink = ferrite_diagnostics::DiagnosticSink::new();
    let outcome = apply_configuration(&config, &mut design, &sink);
    let mut diagnostics = sink.take_all();

    let report = match outcome {
        Ok(report) => Some(report),
        Err(err) => {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::new(Category::Apply, PASS_ABORTED),
                    format!("{err}"),
                )
                .with_origin(err.category, &err.entry)
                .with_note("categories applied before the failure remain applied"),
            );
            None
        }
    };

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprint!("{}", renderer.render(diag));
            }
            if let (Some(report), false) = (&report, global.quiet) {
                eprintln!("{report}");
            }
        }
        ReportFormat::Json => {
            let json = serde_json::json!({
                "ok": report.is_some(),
                "report": report,
                "diagnostics": diagnostics,
                "mutations": design.log(),
            });
            println!("{json}");
        }
    }

    if let Some(path) = &args.output {
        if !args.dry_run {
            let log = serde_json::to_string_pretty(design.log())?;
            std::fs::write(path, log)?;
        }
    }

    Ok(if report.is_some() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_design::Mutation;
    use std::io::Write;

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            color: false,
        }
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    const SNAPSHOT: &str = r#"{
        "nets": ["N1", "GND"],
        "components": [
            {"reference_designator": "U1", "definition": "BGA100", "pins": ["A1"]}
        ]
    }"#;

    #[test]
    fn apply_writes_mutation_log() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_file(
            &dir,
            "board.json",
            r#"{"nets": {"signal_nets": ["N1"], "power_ground_nets": ["GND"]}}"#,
        );
        let design = write_file(&dir, "snapshot.json", SNAPSHOT);
        let out = dir.path().join("mutations.json");

        let args = ApplyArgs {
            config,
            design,
            output: Some(out.to_string_lossy().into_owned()),
            dry_run: false,
            format: ReportFormat::Text,
        };
        assert_eq!(run(&args, &global()).unwrap(), 0);

        let log: Vec<Mutation> =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(log.len(), 2);
        assert!(matches!(&log[0], Mutation::ClassifyNet { net, .. } if net == "N1"));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_file(&dir, "board.json", r#"{"nets": {"signal_nets": ["N1"]}}"#);
        let design = write_file(&dir, "snapshot.json", SNAPSHOT);
        let out = dir.path().join("mutations.json");

        let args = ApplyArgs {
            config,
            design,
            output: Some(out.to_string_lossy().into_owned()),
            dry_run: true,
            format: ReportFormat::Text,
        };
        assert_eq!(run(&args, &global()).unwrap(), 0);
        assert!(!out.exists());
    }

    #[test]
    fn required_failure_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_file(
            &dir,
            "board.json",
            r#"{"padstacks": {"definitions": [{"name": "VIA99", "required": true}]}}"#,
        );
        let design = write_file(&dir, "snapshot.json", SNAPSHOT);

        let args = ApplyArgs {
            config,
            design,
            output: None,
            dry_run: false,
            format: ReportFormat::Text,
        };
        assert_eq!(run(&args, &global()).unwrap(), 1);
    }

    #[test]
    fn bad_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_file(&dir, "board.json", "{}");
        let design = write_file(&dir, "snapshot.json", "not json");

        let args = ApplyArgs {
            config,
            design,
            output: None,
            dry_run: false,
            format: ReportFormat::Text,
        };
        assert!(run(&args, &global()).is_err());
    }

    #[test]
    fn invalid_config_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_file(&dir, "board.json", r#"{"bogus_category": {}}"#);
        let design = write_file(&dir, "snapshot.json", SNAPSHOT);

        let args = ApplyArgs {
            config,
            design,
            output: None,
            dry_run: false,
            format: ReportFormat::Text,
        };
        assert_eq!(run(&args, &global()).unwrap(), 1);
    }
}
