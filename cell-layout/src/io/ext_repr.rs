use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
///
/// Mirrors the tables in which a cell is usually described: candidate locations, machines,
/// routes of the part types and three lookup tables keyed by plan or operation id.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Candidate locations. Their order defines the location axis of the distance matrix and the positions of a layout.
    pub locations: Vec<ExtLocation>,
    /// Names of the machines to be placed. Their order defines the machine axis of the flow matrix.
    pub machines: Vec<String>,
    /// Routes of the part types
    pub process_plans: Vec<ExtProcessPlan>,
    /// Process plan id → parts per unit of time
    pub arrival_rates: BTreeMap<String, f64>,
    /// Operation id → name of the machine performing it
    pub machine_operations: BTreeMap<String, String>,
    /// Operation id → processing time
    pub processing_times: BTreeMap<String, f64>,
}

/// External representation of a [`Location`](crate::entities::Location)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLocation {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// External representation of a [`ProcessPlan`](crate::entities::ProcessPlan)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtProcessPlan {
    /// Unique identifier of the plan (part type)
    pub id: String,
    /// Operation ids, in processing order
    pub operations: Vec<String>,
}

/// External representation of a [`Solution`](crate::entities::Solution)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Machine per location, in the canonical location order
    pub layout: Vec<ExtPlacement>,
    /// Cost of the layout
    pub total_loaded_distance: f64,
    /// Seconds elapsed between the start of the run and the creation of the solution
    pub run_time_sec: u64,
}

/// A machine assigned to a location
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPlacement {
    pub machine: String,
    pub location: String,
}
