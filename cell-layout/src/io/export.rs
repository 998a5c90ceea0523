use std::time::Instant;

use crate::entities::{Instance, Solution};
use crate::io::ext_repr::{ExtPlacement, ExtSolution};

/// Exports a solution out of the library
pub fn export(instance: &Instance, solution: &Solution, epoch: Instant) -> ExtSolution {
    let layout = solution
        .layout
        .order()
        .iter()
        .enumerate()
        .map(|(pos, m)| ExtPlacement {
            machine: instance.machine(*m).name.clone(),
            location: instance.location(pos).name.clone(),
        })
        .collect();

    ExtSolution {
        layout,
        total_loaded_distance: solution.cost.value(),
        run_time_sec: solution.time_stamp.saturating_duration_since(epoch).as_secs(),
    }
}
