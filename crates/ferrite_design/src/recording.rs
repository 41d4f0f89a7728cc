//! An in-memory design handle that records every mutation.

use crate::error::{DesignError, EntityKind};
use crate::snapshot::{ComponentSnapshot, DesignSnapshot};
use crate::types::{
    BoundarySettings, ElectricalModel, NetClass, PadstackDef, PadstackInstanceDef, PinGroupDef,
    PortDef, SetupDef, SourceDef, SweepSpec,
};
use crate::DesignHandle;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One recorded design mutation, in apply order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// A net was classified.
    ClassifyNet {
        /// The net name.
        net: String,
        /// The assigned class.
        class: NetClass,
    },
    /// An electrical model was assigned to a component.
    AssignModel {
        /// The component's reference designator.
        refdes: String,
        /// The assigned model.
        model: ElectricalModel,
    },
    /// A padstack definition was updated.
    UpdatePadstackDefinition(PadstackDef),
    /// A padstack instance was backdrilled.
    UpdatePadstackInstance(PadstackInstanceDef),
    /// A pin group was created.
    CreatePinGroup(PinGroupDef),
    /// A port was created.
    CreatePort(PortDef),
    /// A source was created.
    CreateSource(SourceDef),
    /// An analysis setup was created.
    CreateSetup(SetupDef),
    /// A frequency sweep was added to a setup.
    AddFrequencySweep {
        /// The owning setup name.
        setup: String,
        /// The sweep, with its quadruples exactly as configured.
        sweep: SweepSpec,
    },
    /// Boundary settings were updated.
    SetBoundaries(BoundarySettings),
}

/// An in-memory [`DesignHandle`] backed by an entity inventory.
///
/// Resolution behaves like the live engine: lookups succeed only for
/// entities present in the inventory. Every successful mutation is appended
/// to an ordered log, which tests and the CLI's dry-run mode inspect or
/// serialize. [`reset`](Self::reset) clears session state (classifications,
/// models, created ports/setups, the log) while keeping the inventory, so
/// the same configuration can be re-applied from a clean slate.
#[derive(Debug, Default, Serialize)]
pub struct RecordingDesign {
    nets: BTreeSet<String>,
    components: BTreeMap<String, ComponentSnapshot>,
    padstack_definitions: BTreeSet<String>,
    padstack_instances: BTreeSet<String>,

    classifications: BTreeMap<String, NetClass>,
    models: BTreeMap<String, ElectricalModel>,
    pin_groups: BTreeSet<String>,
    ports: BTreeSet<String>,
    sources: BTreeSet<String>,
    setups: BTreeSet<String>,
    log: Vec<Mutation>,
}

impl RecordingDesign {
    /// Creates an empty design with no inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a design whose inventory is loaded from a snapshot.
    pub fn from_snapshot(snapshot: DesignSnapshot) -> Self {
        let mut design = Self::new();
        for net in snapshot.nets {
            design.nets.insert(net);
        }
        for comp in snapshot.components {
            design
                .components
                .insert(comp.reference_designator.clone(), comp);
        }
        design.padstack_definitions = snapshot.padstack_definitions.into_iter().collect();
        design.padstack_instances = snapshot.padstack_instances.into_iter().collect();
        design
    }

    /// Adds a net to the inventory.
    pub fn add_net(&mut self, name: impl Into<String>) -> &mut Self {
        self.nets.insert(name.into());
        self
    }

    /// Adds a component to the inventory.
    pub fn add_component(
        &mut self,
        refdes: impl Into<String>,
        definition: Option<&str>,
        pins: &[&str],
    ) -> &mut Self {
        let refdes = refdes.into();
        self.components.insert(
            refdes.clone(),
            ComponentSnapshot {
                reference_designator: refdes,
                definition: definition.map(str::to_string),
                pins: pins.iter().map(|p| p.to_string()).collect(),
            },
        );
        self
    }

    /// Adds a padstack definition to the inventory.
    pub fn add_padstack_definition(&mut self, name: impl Into<String>) -> &mut Self {
        self.padstack_definitions.insert(name.into());
        self
    }

    /// Adds a padstack instance to the inventory.
    pub fn add_padstack_instance(&mut self, name: impl Into<String>) -> &mut Self {
        self.padstack_instances.insert(name.into());
        self
    }

    /// Clears all session state while keeping the entity inventory.
    pub fn reset(&mut self) {
        self.classifications.clear();
        self.models.clear();
        self.pin_groups.clear();
        self.ports.clear();
        self.sources.clear();
        self.setups.clear();
        self.log.clear();
    }

    /// The ordered mutation log recorded so far.
    pub fn log(&self) -> &[Mutation] {
        &self.log
    }

    /// Consumes the design, returning the mutation log.
    pub fn into_log(self) -> Vec<Mutation> {
        self.log
    }

    /// The classification currently assigned to a net, if any.
    pub fn classification_of(&self, net: &str) -> Option<NetClass> {
        self.classifications.get(net).copied()
    }

    /// The electrical model currently assigned to a component, if any.
    pub fn model_of(&self, refdes: &str) -> Option<&ElectricalModel> {
        self.models.get(refdes)
    }

    fn check_terminal(&self, terminal: &crate::types::Terminal) -> Result<(), DesignError> {
        use crate::types::Terminal;
        match terminal {
            // Pin existence is validated by the engine against the padstack
            // geometry; the inventory doesn't model it.
            Terminal::Pin(_) => Ok(()),
            Terminal::PinGroup(name) => {
                if self.pin_groups.contains(name) {
                    Ok(())
                } else {
                    Err(DesignError::not_found(EntityKind::PinGroup, name))
                }
            }
            Terminal::Net(net) => {
                if self.nets.contains(net) {
                    Ok(())
                } else {
                    Err(DesignError::not_found(EntityKind::Net, net))
                }
            }
        }
    }
}

impl DesignHandle for RecordingDesign {
    fn resolve_net(&self, name: &str) -> bool {
        self.nets.contains(name)
    }

    fn resolve_component(&self, refdes: &str) -> bool {
        self.components.contains_key(refdes)
    }

    fn components_of_definition(&self, definition: &str) -> Vec<String> {
        self.components
            .values()
            .filter(|c| c.definition.as_deref() == Some(definition))
            .map(|c| c.reference_designator.clone())
            .collect()
    }

    fn classify_net(&mut self, net: &str, class: NetClass) -> Result<(), DesignError> {
        if !self.nets.contains(net) {
            return Err(DesignError::not_found(EntityKind::Net, net));
        }
        self.classifications.insert(net.to_string(), class);
        self.log.push(Mutation::ClassifyNet {
            net: net.to_string(),
            class,
        });
        Ok(())
    }

    fn assign_model(&mut self, refdes: &str, model: &ElectricalModel) -> Result<(), DesignError> {
        if !self.components.contains_key(refdes) {
            return Err(DesignError::not_found(EntityKind::Component, refdes));
        }
        self.models.insert(refdes.to_string(), model.clone());
        self.log.push(Mutation::AssignModel {
            refdes: refdes.to_string(),
            model: model.clone(),
        });
        Ok(())
    }

    fn update_padstack_definition(&mut self, def: &PadstackDef) -> Result<(), DesignError> {
        if !self.padstack_definitions.contains(&def.name) {
            return Err(DesignError::not_found(
                EntityKind::PadstackDefinition,
                &def.name,
            ));
        }
        self.log.push(Mutation::UpdatePadstackDefinition(def.clone()));
        Ok(())
    }

    fn update_padstack_instance(
        &mut self,
        inst: &PadstackInstanceDef,
    ) -> Result<(), DesignError> {
        if !self.padstack_instances.contains(&inst.name) {
            return Err(DesignError::not_found(
                EntityKind::PadstackInstance,
                &inst.name,
            ));
        }
        self.log.push(Mutation::UpdatePadstackInstance(inst.clone()));
        Ok(())
    }

    fn create_pin_group(&mut self, group: &PinGroupDef) -> Result<(), DesignError> {
        if !self.components.contains_key(&group.reference_designator) {
            return Err(DesignError::not_found(
                EntityKind::Component,
                &group.reference_designator,
            ));
        }
        if let Some(net) = &group.net {
            if !self.nets.contains(net) {
                return Err(DesignError::not_found(EntityKind::Net, net));
            }
        }
        if !self.pin_groups.insert(group.name.clone()) {
            return Err(DesignError::rejected(
                "create_pin_group",
                format!("pin group '{}' already exists", group.name),
            ));
        }
        self.log.push(Mutation::CreatePinGroup(group.clone()));
        Ok(())
    }

    fn create_port(&mut self, port: &PortDef) -> Result<(), DesignError> {
        if !self.components.contains_key(&port.reference_designator) {
            return Err(DesignError::not_found(
                EntityKind::Component,
                &port.reference_designator,
            ));
        }
        self.check_terminal(&port.positive)?;
        if let Some(negative) = &port.negative {
            self.check_terminal(negative)?;
        }
        if !self.ports.insert(port.name.clone()) {
            return Err(DesignError::rejected(
                "create_port",
                format!("port '{}' already exists", port.name),
            ));
        }
        self.log.push(Mutation::CreatePort(port.clone()));
        Ok(())
    }

    fn create_source(&mut self, source: &SourceDef) -> Result<(), DesignError> {
        if !self.components.contains_key(&source.reference_designator) {
            return Err(DesignError::not_found(
                EntityKind::Component,
                &source.reference_designator,
            ));
        }
        self.check_terminal(&source.positive)?;
        self.check_terminal(&source.negative)?;
        if !self.sources.insert(source.name.clone()) {
            return Err(DesignError::rejected(
                "create_source",
                format!("source '{}' already exists", source.name),
            ));
        }
        self.log.push(Mutation::CreateSource(source.clone()));
        Ok(())
    }

    fn create_setup(&mut self, setup: &SetupDef) -> Result<(), DesignError> {
        if !self.setups.insert(setup.name.clone()) {
            return Err(DesignError::rejected(
                "create_setup",
                format!("setup '{}' already exists", setup.name),
            ));
        }
        self.log.push(Mutation::CreateSetup(setup.clone()));
        Ok(())
    }

    fn add_frequency_sweep(&mut self, setup: &str, sweep: &SweepSpec) -> Result<(), DesignError> {
        if !self.setups.contains(setup) {
            return Err(DesignError::not_found(EntityKind::Setup, setup));
        }
        self.log.push(Mutation::AddFrequencySweep {
            setup: setup.to_string(),
            sweep: sweep.clone(),
        });
        Ok(())
    }

    fn set_boundaries(&mut self, settings: &BoundarySettings) -> Result<(), DesignError> {
        self.log.push(Mutation::SetBoundaries(settings.clone()));
        Ok(())
    }
}
