//! Serializable design inventories for the in-memory handle.

use serde::{Deserialize, Serialize};

/// The entity inventory of a design, as exported by an engine session or
/// written by hand for tests.
///
/// A snapshot lists what *exists* in the design (nets, components, padstacks)
/// so that an in-memory handle can resolve references the way the live
/// engine would. It carries no geometry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignSnapshot {
    /// All net names in the design.
    #[serde(default)]
    pub nets: Vec<String>,
    /// All placed components.
    #[serde(default)]
    pub components: Vec<ComponentSnapshot>,
    /// All padstack definition names.
    #[serde(default)]
    pub padstack_definitions: Vec<String>,
    /// All placed padstack instance names.
    #[serde(default)]
    pub padstack_instances: Vec<String>,
}

/// One placed component in a [`DesignSnapshot`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSnapshot {
    /// The reference designator (e.g., "U1", "C33").
    pub reference_designator: String,
    /// The part definition this component was placed from.
    #[serde(default)]
    pub definition: Option<String>,
    /// The component's pin names.
    #[serde(default)]
    pub pins: Vec<String>,
}
