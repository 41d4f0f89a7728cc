//! Configuration types deserialized from Ferrite configuration files.
//!
//! Field names follow the configuration file layout. Every category carries
//! `#[serde(default)]` so an absent key yields the category's empty default,
//! and unknown fields are rejected rather than silently ignored.

use ferrite_common::SweepPoint;
use serde::{Deserialize, Serialize};

/// The top-level configuration, one field per category.
///
/// Categories are applied against a design in a fixed dependency order:
/// general, nets, padstacks, components, pin groups, ports, sources, setups,
/// SPICE models, boundaries. The ordering itself lives in `ferrite_apply`;
/// this type only aggregates the parsed data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigRoot {
    /// Global settings shared by several categories.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Signal / power-ground net classification.
    #[serde(default)]
    pub nets: NetsConfig,
    /// Padstack definition and instance overrides.
    #[serde(default)]
    pub padstacks: PadstacksConfig,
    /// Per-component electrical model assignments.
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
    /// Pin groups to create on components.
    #[serde(default)]
    pub pin_groups: Vec<PinGroupEntry>,
    /// Excitation ports to create.
    #[serde(default)]
    pub ports: Vec<PortEntry>,
    /// Voltage / current sources to create.
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    /// Analysis setups to create, each with its frequency sweeps.
    #[serde(default)]
    pub setups: Vec<SetupEntry>,
    /// SPICE model assignments by component list or part definition.
    #[serde(default)]
    pub spice_models: Vec<SpiceModelEntry>,
    /// Radiation and extent boundary settings.
    #[serde(default)]
    pub boundaries: Option<BoundariesConfig>,
}

/// Global settings referenced by later categories.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Directory that relative SPICE model file names resolve against.
    #[serde(default)]
    pub spice_model_library: String,
    /// Directory that relative Touchstone file names resolve against.
    #[serde(default)]
    pub s_parameter_library: String,
}

/// Net classification lists.
///
/// Nets listed in neither list keep whatever classification the design
/// already has.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetsConfig {
    /// Nets to classify as signal.
    #[serde(default)]
    pub signal_nets: Vec<String>,
    /// Nets to classify as power/ground.
    #[serde(default)]
    pub power_ground_nets: Vec<String>,
}

impl NetsConfig {
    /// Returns `true` if no nets are configured.
    pub fn is_empty(&self) -> bool {
        self.signal_nets.is_empty() && self.power_ground_nets.is_empty()
    }
}

/// Padstack overrides, split into definition-level and instance-level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PadstacksConfig {
    /// Hole-parameter overrides per padstack definition.
    #[serde(default)]
    pub definitions: Vec<PadstackDefEntry>,
    /// Backdrill overrides per placed padstack instance.
    #[serde(default)]
    pub instances: Vec<PadstackInstanceEntry>,
}

impl PadstacksConfig {
    /// Returns `true` if no padstack overrides are configured.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.instances.is_empty()
    }
}

/// Hole-parameter overrides for one padstack definition.
///
/// Dimension fields are strings with units ("0.25mm") and pass to the engine
/// as written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PadstackDefEntry {
    /// The padstack definition name.
    pub name: String,
    /// New drill hole diameter.
    #[serde(default)]
    pub hole_diameter: Option<String>,
    /// New plating thickness.
    #[serde(default)]
    pub hole_plating_thickness: Option<String>,
    /// New hole fill material name.
    #[serde(default)]
    pub hole_material: Option<String>,
    /// New hole range.
    #[serde(default)]
    pub hole_range: Option<String>,
    /// Abort the apply pass if the definition doesn't exist.
    #[serde(default)]
    pub required: bool,
}

/// Backdrill overrides for one placed padstack instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PadstackInstanceEntry {
    /// The padstack instance name.
    pub name: String,
    /// Backdrill from the top side.
    #[serde(default)]
    pub backdrill_top: Option<BackdrillEntry>,
    /// Backdrill from the bottom side.
    #[serde(default)]
    pub backdrill_bottom: Option<BackdrillEntry>,
    /// Abort the apply pass if the instance doesn't exist.
    #[serde(default)]
    pub required: bool,
}

/// Backdrill parameters for one side of a padstack instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackdrillEntry {
    /// The layer the backdrill stops at.
    pub drill_to_layer: String,
    /// Backdrill diameter, as a dimension string.
    pub diameter: String,
    /// Remaining stub length, as a dimension string.
    #[serde(default)]
    pub stub_length: Option<String>,
}

/// Electrical model assignment for one component.
///
/// The three model blocks are mutually exclusive in intent. When more than
/// one is present, exactly one is assigned at apply time with precedence
/// `spice_model > s_parameter_model > rlc_model`, and the shadowed blocks
/// are reported as warnings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    /// The component's reference designator (e.g., "U1", "C33").
    pub reference_designator: String,
    /// A lumped RLC model.
    #[serde(default)]
    pub rlc_model: Option<RlcModelEntry>,
    /// A frequency-domain S-parameter model.
    #[serde(default)]
    pub s_parameter_model: Option<SParameterModelEntry>,
    /// A SPICE subcircuit model.
    #[serde(default)]
    pub spice_model: Option<SpiceModelRef>,
    /// Abort the apply pass if the component doesn't exist.
    #[serde(default)]
    pub required: bool,
}

impl ComponentEntry {
    /// Names of all model blocks present on this entry, in precedence order
    /// (highest first).
    pub fn configured_models(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.spice_model.is_some() {
            names.push("spice_model");
        }
        if self.s_parameter_model.is_some() {
            names.push("s_parameter_model");
        }
        if self.rlc_model.is_some() {
            names.push("rlc_model");
        }
        names
    }
}

/// A lumped RLC model block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RlcModelEntry {
    /// Element topology.
    #[serde(rename = "type", default)]
    pub topology: RlcTopologyEntry,
    /// Resistance in ohms.
    #[serde(default)]
    pub resistance: Option<f64>,
    /// Inductance in henries.
    #[serde(default)]
    pub inductance: Option<f64>,
    /// Capacitance in farads.
    #[serde(default)]
    pub capacitance: Option<f64>,
}

/// Series or parallel RLC topology, as written in the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RlcTopologyEntry {
    /// Elements in series (default).
    #[default]
    Series,
    /// Elements in parallel.
    Parallel,
}

/// An S-parameter model block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SParameterModelEntry {
    /// Touchstone file; relative names resolve against
    /// [`GeneralConfig::s_parameter_library`].
    pub file: String,
    /// Net used as the model's reference terminal.
    #[serde(default)]
    pub reference_net: Option<String>,
}

/// A SPICE model block on a component entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpiceModelRef {
    /// SPICE netlist file; relative names resolve against
    /// [`GeneralConfig::spice_model_library`].
    pub file: String,
    /// Subcircuit to instantiate.
    #[serde(default)]
    pub sub_circuit_name: Option<String>,
}

/// A pin group to create on a component.
///
/// Exactly one of `pins` (non-empty) or `net` must be given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinGroupEntry {
    /// The pin group name.
    pub name: String,
    /// The owning component's reference designator.
    pub reference_designator: String,
    /// Explicit member pins.
    #[serde(default)]
    pub pins: Vec<String>,
    /// Net whose connected pins form the group.
    #[serde(default)]
    pub net: Option<String>,
    /// Abort the apply pass if the component doesn't exist.
    #[serde(default)]
    pub required: bool,
}

/// Where a port or source terminal attaches, as written in the file.
///
/// Uses serde's untagged representation: `{"pin": "A7"}`,
/// `{"pin_group": "vdd_pins"}`, or `{"net": "GND"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TerminalEntry {
    /// A single component pin.
    Pin {
        /// The pin name.
        pin: String,
    },
    /// A previously created pin group.
    PinGroup {
        /// The pin group name.
        pin_group: String,
    },
    /// All component pins on the given net.
    Net {
        /// The net name.
        net: String,
    },
}

/// Circuit or coax port type, as written in the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortTypeEntry {
    /// A circuit (lumped) port between two terminals (default).
    #[default]
    Circuit,
    /// A coaxial port on a single terminal.
    Coax,
}

/// An excitation port to create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortEntry {
    /// The port name.
    pub name: String,
    /// Circuit or coax.
    #[serde(rename = "type", default)]
    pub port_type: PortTypeEntry,
    /// The component the port attaches to.
    pub reference_designator: String,
    /// The positive terminal.
    pub positive_terminal: TerminalEntry,
    /// The negative terminal; required for circuit ports, forbidden for coax.
    #[serde(default)]
    pub negative_terminal: Option<TerminalEntry>,
    /// Abort the apply pass if any referenced entity doesn't exist.
    #[serde(default)]
    pub required: bool,
}

/// Voltage or current source type, as written in the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTypeEntry {
    /// An ideal voltage source (default).
    #[default]
    Voltage,
    /// An ideal current source.
    Current,
}

/// A voltage or current source to create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    /// The source name.
    pub name: String,
    /// Voltage or current.
    #[serde(rename = "type", default)]
    pub source_type: SourceTypeEntry,
    /// The component the source attaches to.
    pub reference_designator: String,
    /// Magnitude in volts or amperes.
    pub magnitude: f64,
    /// Phase in degrees.
    #[serde(default)]
    pub phase: f64,
    /// The positive terminal.
    pub positive_terminal: TerminalEntry,
    /// The negative terminal.
    pub negative_terminal: TerminalEntry,
    /// Abort the apply pass if any referenced entity doesn't exist.
    #[serde(default)]
    pub required: bool,
}

/// Analysis setup type, as written in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupTypeEntry {
    /// SIwave AC analysis.
    SiwaveAc,
    /// SIwave DC analysis.
    SiwaveDc,
    /// HFSS full-wave analysis.
    Hfss,
}

/// An analysis setup to create, with its frequency sweeps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupEntry {
    /// The setup name.
    pub name: String,
    /// The analysis type.
    #[serde(rename = "type")]
    pub setup_type: SetupTypeEntry,
    /// SIwave AC accuracy slider (0..=2).
    #[serde(default)]
    pub si_slider_position: Option<u8>,
    /// SIwave DC accuracy slider (0..=2).
    #[serde(default)]
    pub dc_slider_position: Option<u8>,
    /// HFSS adaptive mesh frequency (e.g., "5GHz").
    #[serde(default)]
    pub f_adapt: Option<String>,
    /// HFSS maximum adaptive passes.
    #[serde(default)]
    pub max_num_passes: Option<u32>,
    /// HFSS maximum delta-S convergence criterion.
    #[serde(default)]
    pub max_mag_delta_s: Option<f64>,
    /// Frequency sweeps to add to this setup.
    #[serde(default)]
    pub freq_sweep: Vec<SweepEntry>,
}

/// One named frequency sweep on a setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepEntry {
    /// The sweep name.
    pub name: String,
    /// Interpolation behavior ("interpolation", "discrete"), engine-defined.
    #[serde(rename = "type", default)]
    pub sweep_type: Option<String>,
    /// The `[mode, start, stop, step]` quadruples, kept exactly as written.
    #[serde(default)]
    pub frequencies: Vec<SweepPoint>,
}

/// A SPICE model assignment entry.
///
/// Targets either an explicit component list or every placement of a part
/// definition. With `component_definition` and `apply_to_all`, the model
/// goes to every placement *except* those listed in `components`; with
/// `apply_to_all` false, only the listed placements receive it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpiceModelEntry {
    /// A label for diagnostics.
    pub name: String,
    /// SPICE netlist file; relative names resolve against
    /// [`GeneralConfig::spice_model_library`].
    pub file: String,
    /// Subcircuit to instantiate.
    #[serde(default)]
    pub sub_circuit_name: Option<String>,
    /// Part definition whose placements receive the model.
    #[serde(default)]
    pub component_definition: Option<String>,
    /// See type-level docs for the interaction with `components`.
    #[serde(default)]
    pub apply_to_all: bool,
    /// Explicit reference designators.
    #[serde(default)]
    pub components: Vec<String>,
    /// Abort the apply pass if a referenced entity doesn't exist.
    #[serde(default)]
    pub required: bool,
}

/// Radiation and extent boundary settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundariesConfig {
    /// Whether the design is enclosed in an open region.
    #[serde(default)]
    pub open_region: Option<bool>,
    /// The open region boundary type: "radiation" or "pec".
    #[serde(default)]
    pub open_region_type: Option<String>,
    /// Whether the PML boxes are drawn in the UI.
    #[serde(default)]
    pub pml_visible: Option<bool>,
    /// The PML design frequency (e.g., "5GHz").
    #[serde(default)]
    pub pml_operation_frequency: Option<String>,
    /// The PML radiation factor.
    #[serde(default)]
    pub pml_radiation_factor: Option<f64>,
    /// Horizontal air-box padding, as a fraction of the design extent.
    #[serde(default)]
    pub air_horizontal_extent: Option<f64>,
    /// Vertical air-box padding, as a fraction of the design extent.
    #[serde(default)]
    pub air_vertical_extent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_json;
    use ferrite_common::SweepStep;

    #[test]
    fn empty_object_yields_defaults() {
        let config = load_config_from_json("{}").unwrap();
        assert!(config.nets.is_empty());
        assert!(config.components.is_empty());
        assert!(config.ports.is_empty());
        assert!(config.setups.is_empty());
        assert!(config.boundaries.is_none());
        assert_eq!(config.general.spice_model_library, "");
    }

    #[test]
    fn unknown_category_rejected() {
        let err = load_config_from_json(r#"{"stackup": {}}"#).unwrap_err();
        assert!(matches!(err, crate::ConfigError::ParseError(_)));
    }

    #[test]
    fn nets_category() {
        let config = load_config_from_json(
            r#"{"nets": {"signal_nets": ["N1", "N2"], "power_ground_nets": ["GND"]}}"#,
        )
        .unwrap();
        assert_eq!(config.nets.signal_nets, vec!["N1", "N2"]);
        assert_eq!(config.nets.power_ground_nets, vec!["GND"]);
    }

    #[test]
    fn component_with_rlc_model() {
        let config = load_config_from_json(
            r#"{
                "components": [{
                    "reference_designator": "C33",
                    "rlc_model": {"type": "parallel", "capacitance": 1e-10}
                }]
            }"#,
        )
        .unwrap();
        let entry = &config.components[0];
        assert_eq!(entry.reference_designator, "C33");
        let rlc = entry.rlc_model.as_ref().unwrap();
        assert_eq!(rlc.topology, RlcTopologyEntry::Parallel);
        assert_eq!(rlc.capacitance, Some(1e-10));
        assert_eq!(rlc.resistance, None);
        assert!(!entry.required);
    }

    #[test]
    fn rlc_topology_defaults_to_series() {
        let config = load_config_from_json(
            r#"{
                "components": [{
                    "reference_designator": "R5",
                    "rlc_model": {"resistance": 50.0}
                }]
            }"#,
        )
        .unwrap();
        let rlc = config.components[0].rlc_model.as_ref().unwrap();
        assert_eq!(rlc.topology, RlcTopologyEntry::Series);
    }

    #[test]
    fn configured_models_precedence_order() {
        let config = load_config_from_json(
            r#"{
                "components": [{
                    "reference_designator": "U1",
                    "rlc_model": {"resistance": 1.0},
                    "spice_model": {"file": "u1.sp"}
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.components[0].configured_models(),
            vec!["spice_model", "rlc_model"]
        );
    }

    #[test]
    fn terminal_entry_variants() {
        let config = load_config_from_json(
            r#"{
                "ports": [{
                    "name": "p1",
                    "type": "circuit",
                    "reference_designator": "U1",
                    "positive_terminal": {"pin_group": "vdd_pins"},
                    "negative_terminal": {"net": "GND"}
                }]
            }"#,
        )
        .unwrap();
        let port = &config.ports[0];
        assert_eq!(
            port.positive_terminal,
            TerminalEntry::PinGroup {
                pin_group: "vdd_pins".into()
            }
        );
        assert_eq!(
            port.negative_terminal,
            Some(TerminalEntry::Net { net: "GND".into() })
        );
    }

    #[test]
    fn setup_with_sweep_quadruples() {
        let config = load_config_from_json(
            r#"{
                "setups": [{
                    "name": "ac1",
                    "type": "siwave_ac",
                    "si_slider_position": 1,
                    "freq_sweep": [{
                        "name": "sweep1",
                        "type": "interpolation",
                        "frequencies": [
                            ["linear count", "0", "1kHz", 1],
                            ["log scale", "1kHz", "0.1GHz", 10]
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();
        let setup = &config.setups[0];
        assert_eq!(setup.setup_type, SetupTypeEntry::SiwaveAc);
        let sweep = &setup.freq_sweep[0];
        assert_eq!(sweep.frequencies.len(), 2);
        assert_eq!(sweep.frequencies[0].mode(), "linear count");
        assert_eq!(*sweep.frequencies[0].step(), SweepStep::Count(1.0));
    }

    #[test]
    fn spice_models_category() {
        let config = load_config_from_json(
            r#"{
                "general": {"spice_model_library": "/models/spice"},
                "spice_models": [{
                    "name": "decap",
                    "file": "GRM32_DC0V.mod",
                    "component_definition": "CAP0402",
                    "apply_to_all": true,
                    "components": ["C1"]
                }]
            }"#,
        )
        .unwrap();
        let model = &config.spice_models[0];
        assert!(model.apply_to_all);
        assert_eq!(model.components, vec!["C1"]);
        assert_eq!(config.general.spice_model_library, "/models/spice");
    }

    #[test]
    fn toml_and_json_parse_identically() {
        let json = r#"{
            "nets": {"signal_nets": ["N1"], "power_ground_nets": ["GND"]},
            "boundaries": {"open_region": true, "open_region_type": "radiation"}
        }"#;
        let toml = r#"
[nets]
signal_nets = ["N1"]
power_ground_nets = ["GND"]

[boundaries]
open_region = true
open_region_type = "radiation"
"#;
        let from_json = load_config_from_json(json).unwrap();
        let from_toml = crate::load_config_from_toml(toml).unwrap();
        assert_eq!(from_json, from_toml);
    }
}
