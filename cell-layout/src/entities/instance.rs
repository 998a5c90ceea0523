use anyhow::{Result, ensure};

use crate::entities::{Location, Machine, Operation, ProcessPlan};
use crate::util::NameIndex;
use crate::util::assertions;

/// Static description of a layout problem: where machines can go and how material flows between them.
/// An instance is immutable, it is the input of the [`FlowMatrix`](crate::eval::FlowMatrix) and
/// [`DistanceMatrix`](crate::eval::DistanceMatrix) constructors.
#[derive(Debug, Clone)]
pub struct Instance {
    pub name: String,
    pub machines: Vec<Machine>,
    pub locations: Vec<Location>,
    pub operations: Vec<Operation>,
    pub process_plans: Vec<ProcessPlan>,
    machine_index: NameIndex,
    location_index: NameIndex,
    operation_index: NameIndex,
}

impl Instance {
    /// Creates a new instance.
    /// All entities should have consecutive ids starting from 0 and unique names,
    /// every reference (operation → machine, route → operation) should be in range
    /// and there should be at least as many locations as machines.
    pub fn new(
        name: impl Into<String>,
        machines: Vec<Machine>,
        locations: Vec<Location>,
        operations: Vec<Operation>,
        process_plans: Vec<ProcessPlan>,
    ) -> Result<Self> {
        ensure!(
            assertions::ids_are_consecutive(machines.iter().map(|m| m.id))
                && assertions::ids_are_consecutive(locations.iter().map(|l| l.id))
                && assertions::ids_are_consecutive(operations.iter().map(|o| o.id))
                && assertions::ids_are_consecutive(process_plans.iter().map(|p| p.id)),
            "all entities should have consecutive ids starting from 0"
        );
        ensure!(
            locations.len() >= machines.len(),
            "not enough locations: {} machines but only {} locations",
            machines.len(),
            locations.len()
        );
        for op in &operations {
            ensure!(
                op.machine < machines.len(),
                "operation {} refers to machine id {}, which does not exist",
                op.name,
                op.machine
            );
        }
        for plan in &process_plans {
            if let Some(op_id) = plan.route.iter().find(|id| **id >= operations.len()) {
                anyhow::bail!(
                    "process plan {} refers to operation id {op_id}, which does not exist",
                    plan.name
                );
            }
        }

        let machine_index = NameIndex::try_new(machines.iter().map(|m| &m.name))?;
        let location_index = NameIndex::try_new(locations.iter().map(|l| &l.name))?;
        let operation_index = NameIndex::try_new(operations.iter().map(|o| &o.name))?;

        Ok(Self {
            name: name.into(),
            machines,
            locations,
            operations,
            process_plans,
            machine_index,
            location_index,
            operation_index,
        })
    }

    pub fn machine(&self, id: usize) -> &Machine {
        &self.machines[id]
    }

    pub fn location(&self, id: usize) -> &Location {
        &self.locations[id]
    }

    pub fn operation(&self, id: usize) -> &Operation {
        &self.operations[id]
    }

    pub fn machine_id(&self, name: &str) -> Option<usize> {
        self.machine_index.get(name)
    }

    pub fn location_id(&self, name: &str) -> Option<usize> {
        self.location_index.get(name)
    }

    pub fn operation_id(&self, name: &str) -> Option<usize> {
        self.operation_index.get(name)
    }

    /// Canonical machine axis (flow matrix rows/columns)
    pub fn machine_index(&self) -> &NameIndex {
        &self.machine_index
    }

    /// Canonical location axis (distance matrix rows/columns, layout positions)
    pub fn location_index(&self) -> &NameIndex {
        &self.location_index
    }

    pub fn n_machines(&self) -> usize {
        self.machines.len()
    }

    pub fn n_locations(&self) -> usize {
        self.locations.len()
    }
}
