use std::collections::HashSet;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::{debug, warn};

use crate::entities::{Instance, Location, Machine, Operation, ProcessPlan};
use crate::geometry::GridPoint;
use crate::io::ext_repr::ExtInstance;
use crate::util::NameIndex;

/// Converts the external representation of an instance into the internal one.
///
/// Every reference is resolved here, so that a dangling identifier aborts the import
/// (naming the identifier) instead of silently contributing nothing to the flow matrix.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let machine_index =
        NameIndex::try_new(&ext_instance.machines).context("invalid list of machines")?;
    let machines = machine_index
        .names()
        .enumerate()
        .map(|(id, name)| Machine::new(id, name))
        .collect_vec();

    let locations = ext_instance
        .locations
        .iter()
        .enumerate()
        .map(|(id, l)| Location::new(id, &l.name, GridPoint(l.x, l.y)))
        .collect_vec();
    NameIndex::try_new(locations.iter().map(|l| &l.name)).context("invalid list of locations")?;
    ensure!(
        locations.len() >= machines.len(),
        "not enough locations: {} machines but only {} locations",
        machines.len(),
        locations.len()
    );

    // operations are numbered in order of first appearance in the routes
    let mut operation_index = Vec::<&str>::new();
    let mut operations = Vec::<Operation>::new();
    let mut process_plans = Vec::<ProcessPlan>::new();
    let mut plan_ids = HashSet::new();

    for ext_plan in &ext_instance.process_plans {
        let plan_id = ext_plan.id.as_str();
        ensure!(
            plan_ids.insert(plan_id),
            "duplicate process plan: {plan_id:?}"
        );

        let mut route = Vec::with_capacity(ext_plan.operations.len());
        for op_name in &ext_plan.operations {
            let op_id = match operation_index.iter().position(|o| *o == op_name.as_str()) {
                Some(op_id) => op_id,
                None => {
                    let operation =
                        import_operation(ext_instance, &machine_index, operations.len(), op_name)
                            .with_context(|| format!("in process plan {plan_id:?}"))?;
                    operation_index.push(op_name.as_str());
                    operations.push(operation);
                    operations.len() - 1
                }
            };
            route.push(op_id);
        }

        let arrival_rate = *ext_instance
            .arrival_rates
            .get(plan_id)
            .with_context(|| format!("process plan {plan_id:?} has no arrival rate"))?;
        ensure!(
            arrival_rate > 0.0 && arrival_rate.is_finite(),
            "arrival rate of process plan {plan_id:?} should be positive, got {arrival_rate}"
        );
        if route.len() < 2 {
            warn!("process plan {plan_id:?} has less than two operations and generates no flow");
        }

        process_plans.push(ProcessPlan::new(
            process_plans.len(),
            plan_id,
            route,
            arrival_rate,
        ));
    }

    for plan_id in ext_instance.arrival_rates.keys() {
        if !plan_ids.contains(plan_id.as_str()) {
            warn!("arrival rate defined for unknown process plan {plan_id:?}, ignoring it");
        }
    }
    for op_name in ext_instance
        .machine_operations
        .keys()
        .chain(ext_instance.processing_times.keys())
        .unique()
    {
        if !operation_index.contains(&op_name.as_str()) {
            warn!("operation {op_name:?} is not part of any process plan, ignoring it");
        }
    }

    debug!(
        "imported instance {:?}: {} machines, {} locations, {} operations, {} process plans",
        ext_instance.name,
        machines.len(),
        locations.len(),
        operations.len(),
        process_plans.len()
    );

    Instance::new(
        &ext_instance.name,
        machines,
        locations,
        operations,
        process_plans,
    )
}

fn import_operation(
    ext_instance: &ExtInstance,
    machine_index: &NameIndex,
    id: usize,
    op_name: &str,
) -> Result<Operation> {
    let machine_name = ext_instance
        .machine_operations
        .get(op_name)
        .with_context(|| format!("operation {op_name:?} has no machine assigned"))?;
    let machine = machine_index.get(machine_name).with_context(|| {
        format!("operation {op_name:?} is assigned to unknown machine {machine_name:?}")
    })?;
    let processing_time = *ext_instance
        .processing_times
        .get(op_name)
        .with_context(|| format!("operation {op_name:?} has no processing time"))?;
    ensure!(
        processing_time > 0.0 && processing_time.is_finite(),
        "processing time of operation {op_name:?} should be positive, got {processing_time}"
    );

    Ok(Operation::new(id, op_name, machine, processing_time))
}
