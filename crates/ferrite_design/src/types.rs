//! Domain vocabulary accepted by [`DesignHandle`](crate::DesignHandle) methods.
//!
//! These are the resolved, validated forms of the configuration entries: the
//! apply engine translates `ferrite_config` types into these before calling
//! the handle. They are serializable so that a recorded mutation log can be
//! written out verbatim.

use ferrite_common::{Frequency, SweepPoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an electrical net.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetClass {
    /// A signal-carrying net.
    Signal,
    /// A power or ground net.
    PowerGround,
}

impl fmt::Display for NetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetClass::Signal => write!(f, "signal"),
            NetClass::PowerGround => write!(f, "power_ground"),
        }
    }
}

/// Whether a lumped RLC model connects its elements in series or parallel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RlcTopology {
    /// Elements in series.
    Series,
    /// Elements in parallel.
    Parallel,
}

/// An electrical model assignable to a component.
///
/// Exactly one model is assigned per component; assigning a second replaces
/// the first.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElectricalModel {
    /// A lumped resistor-inductor-capacitor model. Absent elements are
    /// omitted from the circuit.
    Rlc {
        /// Series or parallel element topology.
        topology: RlcTopology,
        /// Resistance in ohms.
        resistance: Option<f64>,
        /// Inductance in henries.
        inductance: Option<f64>,
        /// Capacitance in farads.
        capacitance: Option<f64>,
    },
    /// A frequency-domain S-parameter (Touchstone) model.
    SParameter {
        /// Path to the Touchstone file, already resolved against the
        /// configured model library.
        file: String,
        /// Net used as the model's reference terminal, if any.
        reference_net: Option<String>,
    },
    /// A SPICE subcircuit model.
    Spice {
        /// Path to the SPICE netlist, already resolved against the
        /// configured model library.
        file: String,
        /// Subcircuit to instantiate; defaults to the file's single
        /// subcircuit when absent.
        sub_circuit: Option<String>,
    },
}

impl ElectricalModel {
    /// A short noun for diagnostics ("rlc", "s_parameter", "spice").
    pub fn kind_name(&self) -> &'static str {
        match self {
            ElectricalModel::Rlc { .. } => "rlc",
            ElectricalModel::SParameter { .. } => "s_parameter",
            ElectricalModel::Spice { .. } => "spice",
        }
    }
}

/// Hole-parameter overrides for a padstack definition.
///
/// Values are dimension strings with units ("0.25mm"), passed to the engine
/// as written. `None` fields leave the existing definition value untouched.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PadstackDef {
    /// The padstack definition name.
    pub name: String,
    /// New drill hole diameter.
    pub hole_diameter: Option<String>,
    /// New plating thickness.
    pub hole_plating_thickness: Option<String>,
    /// New hole fill material name.
    pub hole_material: Option<String>,
    /// New hole range (e.g., "through", "upper_pad_to_lower_pad").
    pub hole_range: Option<String>,
}

/// Backdrill parameters for one side of a padstack instance.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Backdrill {
    /// The layer the backdrill stops at.
    pub drill_to_layer: String,
    /// Backdrill diameter, as a dimension string.
    pub diameter: String,
    /// Remaining stub length, as a dimension string.
    pub stub_length: Option<String>,
}

/// Backdrill overrides for a placed padstack instance.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PadstackInstanceDef {
    /// The padstack instance name.
    pub name: String,
    /// Backdrill from the top side, if any.
    pub backdrill_top: Option<Backdrill>,
    /// Backdrill from the bottom side, if any.
    pub backdrill_bottom: Option<Backdrill>,
}

/// A named pin group on a component.
///
/// Defined either by an explicit pin list or by collecting every component
/// pin connected to a net; the apply engine guarantees exactly one of the
/// two forms is populated.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PinGroupDef {
    /// The pin group name.
    pub name: String,
    /// The owning component's reference designator.
    pub reference_designator: String,
    /// Explicit member pins.
    pub pins: Vec<String>,
    /// Net whose connected pins form the group.
    pub net: Option<String>,
}

/// Where a port or source terminal attaches on a component.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terminal {
    /// A single component pin.
    Pin(String),
    /// A previously created pin group.
    PinGroup(String),
    /// All component pins on the given net.
    Net(String),
}

/// The electrical type of an excitation port.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortKind {
    /// A circuit (lumped) port between two terminals.
    Circuit,
    /// A coaxial port on a single terminal.
    Coax,
}

/// An excitation port to create on the design.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PortDef {
    /// The port name.
    pub name: String,
    /// Circuit or coax.
    pub kind: PortKind,
    /// The component the port attaches to.
    pub reference_designator: String,
    /// The positive terminal.
    pub positive: Terminal,
    /// The negative terminal; absent for coax ports.
    pub negative: Option<Terminal>,
}

/// The electrical type of a source.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// An ideal voltage source.
    Voltage,
    /// An ideal current source.
    Current,
}

/// A voltage or current source to create on the design.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SourceDef {
    /// The source name.
    pub name: String,
    /// Voltage or current.
    pub kind: SourceKind,
    /// The component the source attaches to.
    pub reference_designator: String,
    /// Magnitude in volts or amperes.
    pub magnitude: f64,
    /// Phase in degrees.
    pub phase: f64,
    /// The positive terminal.
    pub positive: Terminal,
    /// The negative terminal.
    pub negative: Terminal,
}

/// The kind of analysis a setup runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupKind {
    /// SIwave AC (frequency-domain signal integrity).
    SiwaveAc,
    /// SIwave DC (IR-drop).
    SiwaveDc,
    /// HFSS full-wave 3D.
    Hfss,
}

/// An analysis setup to create on the design.
///
/// Kind-specific tunables are optional; the engine supplies defaults for
/// absent values. Sweeps are added separately via
/// [`DesignHandle::add_frequency_sweep`](crate::DesignHandle::add_frequency_sweep).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SetupDef {
    /// The setup name.
    pub name: String,
    /// The analysis kind.
    pub kind: SetupKind,
    /// SIwave AC accuracy slider (0..=2).
    pub si_slider_position: Option<u8>,
    /// SIwave DC accuracy slider (0..=2).
    pub dc_slider_position: Option<u8>,
    /// HFSS adaptive mesh frequency.
    pub adaptive_frequency: Option<Frequency>,
    /// HFSS maximum adaptive passes.
    pub max_passes: Option<u32>,
    /// HFSS maximum delta-S convergence criterion.
    pub max_delta: Option<f64>,
}

/// A named frequency sweep belonging to an analysis setup.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SweepSpec {
    /// The sweep name.
    pub name: String,
    /// Interpolation behavior ("interpolation", "discrete"), engine-defined.
    pub sweep_type: Option<String>,
    /// The `[mode, start, stop, step]` quadruples, passed through verbatim.
    pub points: Vec<SweepPoint>,
}

/// The open-region boundary type of the design.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenRegionType {
    /// Radiation (absorbing) boundary.
    Radiation,
    /// Perfect electric conductor boundary.
    Pec,
}

/// Radiation and extent boundary settings.
///
/// All fields are optional; `None` leaves the engine's current value alone.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct BoundarySettings {
    /// Whether the design is enclosed in an open region.
    pub open_region: Option<bool>,
    /// The open region boundary type.
    pub open_region_type: Option<OpenRegionType>,
    /// Whether the PML boxes are drawn in the UI.
    pub pml_visible: Option<bool>,
    /// The PML design frequency.
    pub pml_operation_frequency: Option<Frequency>,
    /// The PML radiation factor.
    pub pml_radiation_factor: Option<f64>,
    /// Horizontal air-box padding, as a fraction of the design extent.
    pub air_horizontal_extent: Option<f64>,
    /// Vertical air-box padding, as a fraction of the design extent.
    pub air_vertical_extent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_common::SweepStep;

    #[test]
    fn net_class_display() {
        assert_eq!(format!("{}", NetClass::Signal), "signal");
        assert_eq!(format!("{}", NetClass::PowerGround), "power_ground");
    }

    #[test]
    fn model_kind_names() {
        let rlc = ElectricalModel::Rlc {
            topology: RlcTopology::Series,
            resistance: Some(50.0),
            inductance: None,
            capacitance: None,
        };
        assert_eq!(rlc.kind_name(), "rlc");

        let sp = ElectricalModel::SParameter {
            file: "cap.s2p".into(),
            reference_net: None,
        };
        assert_eq!(sp.kind_name(), "s_parameter");

        let spice = ElectricalModel::Spice {
            file: "buck.sp".into(),
            sub_circuit: Some("buck".into()),
        };
        assert_eq!(spice.kind_name(), "spice");
    }

    #[test]
    fn model_serde_tagged() {
        let model = ElectricalModel::Rlc {
            topology: RlcTopology::Parallel,
            resistance: None,
            inductance: Some(1e-9),
            capacitance: Some(1e-12),
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["kind"], "rlc");
        assert_eq!(json["topology"], "parallel");
        let back: ElectricalModel = serde_json::from_value(json).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn sweep_spec_preserves_points() {
        let spec = SweepSpec {
            name: "sweep1".into(),
            sweep_type: Some("interpolation".into()),
            points: vec![SweepPoint(
                "linear count".into(),
                "0".into(),
                "1kHz".into(),
                SweepStep::Count(1.0),
            )],
        };
        assert_eq!(spec.points[0].mode(), "linear count");
        assert_eq!(spec.points[0].stop(), "1kHz");
    }

    #[test]
    fn boundary_settings_default_is_all_none() {
        let b = BoundarySettings::default();
        assert!(b.open_region.is_none());
        assert!(b.open_region_type.is_none());
        assert!(b.pml_operation_frequency.is_none());
    }
}
