use std::cmp::Reverse;

use anyhow::Result;
use cell_layout::entities::Layout;
use cell_layout::eval::FlowMatrix;
use itertools::Itertools;
use ordered_float::NotNan;

/// Ranks the machines by descending incident flow (outgoing + incoming) and places them in that
/// order on the locations. Ties are broken by descending machine name.
///
/// Machines interacting the most end up on the first locations of the canonical order;
/// this is merely a seed for the local search, no quality guarantee.
pub fn initial_layout(flow: &FlowMatrix) -> Result<Layout> {
    let incident_flows = flow.incident_flows();
    let ranking = (0..flow.n_machines())
        .sorted_by_cached_key(|&m| {
            let f = NotNan::new(incident_flows[m]).expect("incident flow is NaN");
            Reverse((f, flow.machines().name(m)))
        })
        .collect_vec();

    Layout::try_new(ranking, flow.n_machines())
}
