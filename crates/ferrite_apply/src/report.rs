//! Per-category accounting of an apply pass.

use serde::Serialize;
use std::fmt;

/// What happened to the entries of one category during an apply pass.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryReport {
    /// The category name.
    pub name: &'static str,
    /// Entries applied to the design.
    pub applied: usize,
    /// Optional entries skipped after a resolution failure.
    pub skipped: usize,
}

/// The outcome of a completed apply pass.
///
/// One row per category, in apply order. Categories with no configured
/// entries still appear, with zero counts; a report row is the proof that
/// the category ran.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ApplyReport {
    /// Per-category rows, in apply order.
    pub categories: Vec<CategoryReport>,
}

impl ApplyReport {
    pub(crate) fn category(&mut self, name: &'static str) -> &mut CategoryReport {
        self.categories.push(CategoryReport {
            name,
            applied: 0,
            skipped: 0,
        });
        self.categories.last_mut().unwrap()
    }

    /// Total entries applied across all categories.
    pub fn total_applied(&self) -> usize {
        self.categories.iter().map(|c| c.applied).sum()
    }

    /// Total optional entries skipped across all categories.
    pub fn total_skipped(&self) -> usize {
        self.categories.iter().map(|c| c.skipped).sum()
    }
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cat in &self.categories {
            if cat.applied == 0 && cat.skipped == 0 {
                continue;
            }
            writeln!(
                f,
                "{:>12}  {} applied, {} skipped",
                cat.name, cat.applied, cat.skipped
            )?;
        }
        write!(
            f,
            "{:>12}  {} applied, {} skipped",
            "total",
            self.total_applied(),
            self.total_skipped()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        let mut report = ApplyReport::default();
        {
            let nets = report.category("nets");
            nets.applied = 3;
        }
        {
            let ports = report.category("ports");
            ports.applied = 1;
            ports.skipped = 2;
        }
        assert_eq!(report.total_applied(), 4);
        assert_eq!(report.total_skipped(), 2);
    }

    #[test]
    fn display_hides_empty_categories() {
        let mut report = ApplyReport::default();
        report.category("nets").applied = 2;
        report.category("padstacks");
        let text = format!("{report}");
        assert!(text.contains("nets"));
        assert!(!text.contains("padstacks"));
        assert!(text.contains("total"));
    }
}
