//! Construction-time validation of a parsed configuration.
//!
//! Validation checks the configuration in isolation: field presence, value
//! ranges, and cross-field consistency within an entry. It never resolves
//! names against a design; a configuration that validates here can still
//! produce resolution warnings or errors at apply time.

use crate::error::ConfigError;
use crate::types::{
    ConfigRoot, PinGroupEntry, PortEntry, PortTypeEntry, RlcModelEntry, SetupEntry,
    SetupTypeEntry, SourceEntry, SpiceModelEntry,
};
use ferrite_common::Frequency;

/// Validates a parsed configuration, returning the first problem found.
pub fn validate_config(config: &ConfigRoot) -> Result<(), ConfigError> {
    for (i, net) in config.nets.signal_nets.iter().enumerate() {
        require_nonempty(net, &format!("nets.signal_nets[{i}]"))?;
    }
    for (i, net) in config.nets.power_ground_nets.iter().enumerate() {
        require_nonempty(net, &format!("nets.power_ground_nets[{i}]"))?;
    }
    for (i, def) in config.padstacks.definitions.iter().enumerate() {
        require_nonempty(&def.name, &format!("padstacks.definitions[{i}].name"))?;
    }
    for (i, inst) in config.padstacks.instances.iter().enumerate() {
        require_nonempty(&inst.name, &format!("padstacks.instances[{i}].name"))?;
    }
    for (i, comp) in config.components.iter().enumerate() {
        require_nonempty(
            &comp.reference_designator,
            &format!("components[{i}].reference_designator"),
        )?;
        if let Some(rlc) = &comp.rlc_model {
            validate_rlc(rlc, &format!("components[{i}].rlc_model"))?;
        }
    }
    for (i, group) in config.pin_groups.iter().enumerate() {
        validate_pin_group(group, &format!("pin_groups[{i}]"))?;
    }
    for (i, port) in config.ports.iter().enumerate() {
        validate_port(port, &format!("ports[{i}]"))?;
    }
    for (i, source) in config.sources.iter().enumerate() {
        validate_source(source, &format!("sources[{i}]"))?;
    }
    for (i, setup) in config.setups.iter().enumerate() {
        validate_setup(setup, &format!("setups[{i}]"))?;
    }
    for (i, model) in config.spice_models.iter().enumerate() {
        validate_spice_model(model, &format!("spice_models[{i}]"))?;
    }
    if let Some(boundaries) = &config.boundaries {
        if let Some(kind) = &boundaries.open_region_type {
            let lower = kind.to_ascii_lowercase();
            if lower != "radiation" && lower != "pec" {
                return Err(ConfigError::validation(
                    "boundaries.open_region_type",
                    format!("expected 'radiation' or 'pec', got '{kind}'"),
                ));
            }
        }
        if let Some(freq) = &boundaries.pml_operation_frequency {
            parse_frequency(freq, "boundaries.pml_operation_frequency")?;
        }
    }
    Ok(())
}

fn require_nonempty(value: &str, path: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField(path.to_string()));
    }
    Ok(())
}

fn parse_frequency(value: &str, path: &str) -> Result<Frequency, ConfigError> {
    value
        .parse()
        .map_err(|e| ConfigError::validation(path, format!("{e}")))
}

fn validate_rlc(rlc: &RlcModelEntry, path: &str) -> Result<(), ConfigError> {
    if rlc.resistance.is_none() && rlc.inductance.is_none() && rlc.capacitance.is_none() {
        return Err(ConfigError::validation(
            path,
            "at least one of resistance, inductance, capacitance must be set",
        ));
    }
    Ok(())
}

fn validate_pin_group(group: &PinGroupEntry, path: &str) -> Result<(), ConfigError> {
    require_nonempty(&group.name, &format!("{path}.name"))?;
    require_nonempty(
        &group.reference_designator,
        &format!("{path}.reference_designator"),
    )?;
    match (group.pins.is_empty(), &group.net) {
        (true, None) => Err(ConfigError::validation(
            path,
            "one of 'pins' or 'net' must be given",
        )),
        (false, Some(_)) => Err(ConfigError::validation(
            path,
            "'pins' and 'net' are mutually exclusive",
        )),
        _ => Ok(()),
    }
}

fn validate_port(port: &PortEntry, path: &str) -> Result<(), ConfigError> {
    require_nonempty(&port.name, &format!("{path}.name"))?;
    require_nonempty(
        &port.reference_designator,
        &format!("{path}.reference_designator"),
    )?;
    match (port.port_type, &port.negative_terminal) {
        (PortTypeEntry::Circuit, None) => Err(ConfigError::validation(
            &format!("{path}.negative_terminal"),
            "circuit ports need a negative terminal",
        )),
        (PortTypeEntry::Coax, Some(_)) => Err(ConfigError::validation(
            &format!("{path}.negative_terminal"),
            "coax ports take no negative terminal",
        )),
        _ => Ok(()),
    }
}

fn validate_source(source: &SourceEntry, path: &str) -> Result<(), ConfigError> {
    require_nonempty(&source.name, &format!("{path}.name"))?;
    require_nonempty(
        &source.reference_designator,
        &format!("{path}.reference_designator"),
    )?;
    if !source.magnitude.is_finite() {
        return Err(ConfigError::validation(
            &format!("{path}.magnitude"),
            "magnitude must be a finite number",
        ));
    }
    Ok(())
}

fn validate_setup(setup: &SetupEntry, path: &str) -> Result<(), ConfigError> {
    require_nonempty(&setup.name, &format!("{path}.name"))?;
    for (slider, field) in [
        (setup.si_slider_position, "si_slider_position"),
        (setup.dc_slider_position, "dc_slider_position"),
    ] {
        if let Some(pos) = slider {
            if pos > 2 {
                return Err(ConfigError::validation(
                    &format!("{path}.{field}"),
                    format!("slider position must be 0..=2, got {pos}"),
                ));
            }
        }
    }
    if setup.setup_type == SetupTypeEntry::Hfss {
        if let Some(freq) = &setup.f_adapt {
            parse_frequency(freq, &format!("{path}.f_adapt"))?;
        }
    }
    for (i, sweep) in setup.freq_sweep.iter().enumerate() {
        require_nonempty(&sweep.name, &format!("{path}.freq_sweep[{i}].name"))?;
    }
    Ok(())
}

fn validate_spice_model(model: &SpiceModelEntry, path: &str) -> Result<(), ConfigError> {
    require_nonempty(&model.name, &format!("{path}.name"))?;
    require_nonempty(&model.file, &format!("{path}.file"))?;
    if model.component_definition.is_none() && model.components.is_empty() {
        return Err(ConfigError::validation(
            path,
            "one of 'component_definition' or 'components' must be given",
        ));
    }
    if model.apply_to_all && model.component_definition.is_none() {
        return Err(ConfigError::validation(
            &format!("{path}.apply_to_all"),
            "'apply_to_all' needs a 'component_definition'",
        ));
    }
    Ok(())
}
