//! The error type that aborts an apply pass.

use ferrite_design::DesignError;

/// A fatal apply failure, naming the category and entry that caused it.
///
/// Raised when a required entry fails to resolve, or when the design engine
/// rejects a mutation. Categories applied before the failure stay applied;
/// there is no rollback.
#[derive(Debug, thiserror::Error)]
#[error("failed to apply {category} entry '{entry}': {source}")]
pub struct ApplyError {
    /// The configuration category that was being applied.
    pub category: &'static str,
    /// The entry (name or reference designator) that failed.
    pub entry: String,
    /// The underlying design-handle error.
    #[source]
    pub source: DesignError,
}

impl ApplyError {
    /// Creates a new apply error.
    pub fn new(category: &'static str, entry: impl Into<String>, source: DesignError) -> Self {
        Self {
            category,
            entry: entry.into(),
            source,
        }
    }

    /// Returns `true` if the failure was a resolution error on a required
    /// entry, as opposed to an engine rejection.
    pub fn is_resolution(&self) -> bool {
        self.source.is_resolution()
    }
}
