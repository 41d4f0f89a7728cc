//! The design-handle seam between Ferrite and an external EDB engine.
//!
//! This crate defines the [`DesignHandle`] trait, the abstract mutation
//! interface of a live electrical design database, together with the domain
//! vocabulary types its methods accept ([`ElectricalModel`], [`PortDef`],
//! [`SetupDef`], ...). Production deployments back the trait with a binding
//! to the vendor engine's object model; tests and the CLI's dry-run mode use
//! the in-memory [`RecordingDesign`], which validates entity references
//! against a loaded inventory and records every mutation in order.
//!
//! Ferrite never owns the design. The handle is borrowed for the duration of
//! one apply pass, and all entity resolution happens through it at apply
//! time, never at configuration-construction time.

#![warn(missing_docs)]

pub mod error;
pub mod recording;
pub mod snapshot;
pub mod types;

pub use error::{DesignError, EntityKind};
pub use recording::{Mutation, RecordingDesign};
pub use snapshot::{ComponentSnapshot, DesignSnapshot};
pub use types::{
    Backdrill, BoundarySettings, ElectricalModel, NetClass, OpenRegionType, PadstackDef,
    PadstackInstanceDef, PinGroupDef, PortDef, PortKind, RlcTopology, SetupDef, SetupKind,
    SourceDef, SourceKind, SweepSpec, Terminal,
};

/// The mutation interface of a live electrical design database.
///
/// Each method corresponds to one engine operation. Resolution methods
/// (`resolve_*`) are read-only lookups; the remaining methods mutate the
/// design and are individually fallible. A [`DesignError::NotFound`] from a
/// mutation means the referenced entity does not exist in the design;
/// [`DesignError::Rejected`] means the engine refused the mutation itself.
///
/// All methods are synchronous. Any engine-call latency belongs to the
/// implementation.
pub trait DesignHandle {
    /// Returns `true` if a net with the given name exists in the design.
    fn resolve_net(&self, name: &str) -> bool;

    /// Returns `true` if a component with the given reference designator
    /// exists in the design.
    fn resolve_component(&self, refdes: &str) -> bool;

    /// Returns the reference designators of all components placed from the
    /// given part definition, in a stable order. Empty if the definition is
    /// unknown.
    fn components_of_definition(&self, definition: &str) -> Vec<String>;

    /// Classifies a net as signal or power/ground.
    fn classify_net(&mut self, net: &str, class: NetClass) -> Result<(), DesignError>;

    /// Assigns an electrical model to a component.
    ///
    /// Replaces any model previously assigned to the same component.
    fn assign_model(&mut self, refdes: &str, model: &ElectricalModel) -> Result<(), DesignError>;

    /// Overrides hole parameters on a padstack definition.
    fn update_padstack_definition(&mut self, def: &PadstackDef) -> Result<(), DesignError>;

    /// Applies backdrill parameters to a padstack instance.
    fn update_padstack_instance(&mut self, inst: &PadstackInstanceDef)
        -> Result<(), DesignError>;

    /// Creates a named pin group on a component.
    fn create_pin_group(&mut self, group: &PinGroupDef) -> Result<(), DesignError>;

    /// Creates an excitation port.
    fn create_port(&mut self, port: &PortDef) -> Result<(), DesignError>;

    /// Creates a voltage or current source.
    fn create_source(&mut self, source: &SourceDef) -> Result<(), DesignError>;

    /// Creates an analysis setup.
    fn create_setup(&mut self, setup: &SetupDef) -> Result<(), DesignError>;

    /// Adds a frequency sweep to a previously created analysis setup.
    ///
    /// The sweep's `[mode, start, stop, step]` quadruples are forwarded to
    /// the engine exactly as configured; the handle performs no unit
    /// conversion on them.
    fn add_frequency_sweep(&mut self, setup: &str, sweep: &SweepSpec) -> Result<(), DesignError>;

    /// Updates the radiation/boundary settings of the design.
    fn set_boundaries(&mut self, settings: &BoundarySettings) -> Result<(), DesignError>;
}
