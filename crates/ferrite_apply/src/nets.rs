//! Net classification category.

use crate::{codes, note_entry, ApplyError, ApplyReport, EntryOutcome};
use ferrite_config::NetsConfig;
use ferrite_design::{DesignHandle, NetClass};
use ferrite_diagnostics::DiagnosticSink;

const CATEGORY: &str = "nets";

pub(crate) fn apply(
    cfg: &NetsConfig,
    design: &mut dyn DesignHandle,
    sink: &DiagnosticSink,
    report: &mut ApplyReport,
) -> Result<(), ApplyError> {
    let row = report.category(CATEGORY);
    let lists = [
        (&cfg.signal_nets, NetClass::Signal),
        (&cfg.power_ground_nets, NetClass::PowerGround),
    ];
    for (nets, class) in lists {
        for net in nets {
            let result = design.classify_net(net, class);
            match note_entry(CATEGORY, net, false, codes::UNKNOWN_NET, result, sink)? {
                EntryOutcome::Applied => row.applied += 1,
                EntryOutcome::Skipped => row.skipped += 1,
            }
        }
    }
    Ok(())
}
