//! Error types for design-handle operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of design entity a failed lookup was searching for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EntityKind {
    /// A named electrical net.
    Net,
    /// A placed component, addressed by reference designator.
    Component,
    /// A component part definition shared by multiple placements.
    ComponentDefinition,
    /// A padstack definition.
    PadstackDefinition,
    /// A placed padstack instance (a via or pin).
    PadstackInstance,
    /// A pin group previously created on a component.
    PinGroup,
    /// An analysis setup previously created on the design.
    Setup,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Net => "net",
            EntityKind::Component => "component",
            EntityKind::ComponentDefinition => "component definition",
            EntityKind::PadstackDefinition => "padstack definition",
            EntityKind::PadstackInstance => "padstack instance",
            EntityKind::PinGroup => "pin group",
            EntityKind::Setup => "setup",
        };
        write!(f, "{s}")
    }
}

/// An error returned by a [`DesignHandle`](crate::DesignHandle) operation.
///
/// `NotFound` is the recoverable half of the taxonomy: the apply engine
/// downgrades it to a warning and skips the entry, unless the entry is
/// marked required. `Rejected` always aborts the apply pass.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    /// A referenced design entity does not exist.
    #[error("{kind} '{name}' not found in design")]
    NotFound {
        /// What kind of entity was being resolved.
        kind: EntityKind,
        /// The name or reference designator that failed to resolve.
        name: String,
    },

    /// The engine refused the mutation itself.
    #[error("design engine rejected {operation}: {reason}")]
    Rejected {
        /// The operation that was refused (e.g., "create_port").
        operation: String,
        /// The engine's stated reason.
        reason: String,
    },
}

impl DesignError {
    /// Creates a `NotFound` error for the given entity.
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Creates a `Rejected` error for the given operation.
    pub fn rejected(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error is a resolution failure (entity not
    /// found) rather than an engine rejection.
    pub fn is_resolution(&self) -> bool {
        matches!(self, DesignError::NotFound { .. })
    }
}
