//! Severity levels for apply-pass diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a diagnostic is.
///
/// The apply engine's policy maps onto these directly: a skipped optional
/// entry is a `Warning`, a shadowed-but-harmless setting is a `Note`, and
/// anything that aborts the pass is an `Error`. Serialized in lowercase to
/// match the rendered form.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Context the user may act on; the entry still applied (or was a
    /// deliberate no-op).
    Note,
    /// A recoverable issue; the affected entry was skipped but the pass
    /// continued.
    Warning,
    /// A fatal problem; the apply pass aborted at this point.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_rendered_prefix() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Note), "note");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        let back: Severity = serde_json::from_str("\"note\"").unwrap();
        assert_eq!(back, Severity::Note);
    }
}
