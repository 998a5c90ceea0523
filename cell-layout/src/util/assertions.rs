use float_cmp::approx_eq;
use itertools::Itertools;
use ndarray::Array2;

use crate::entities::{Instance, Layout};
use crate::eval::{DistanceMatrix, FlowMatrix};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn ids_are_consecutive(ids: impl Iterator<Item = usize>) -> bool {
    ids.enumerate().all(|(i, id)| i == id)
}

pub fn layout_is_bijection(layout: &Layout) -> bool {
    let n = layout.len();
    layout.order().iter().all(|m| *m < n) && layout.order().iter().all_unique()
}

pub fn matrix_is_symmetric(values: &Array2<f64>) -> bool {
    let (rows, cols) = values.dim();
    rows == cols
        && (0..rows)
            .cartesian_product(0..cols)
            .all(|(i, j)| approx_eq!(f64, values[[i, j]], values[[j, i]]))
}

pub fn diagonal_is_zero(values: &Array2<f64>) -> bool {
    values.diag().iter().all(|v| *v == 0.0)
}

pub fn distance_matrix_is_valid(dm: &DistanceMatrix) -> bool {
    matrix_is_symmetric(dm.values())
        && diagonal_is_zero(dm.values())
        && dm.values().iter().all(|d| *d >= 0.0)
}

/// Recomputes the total flow of the instance by walking the routes once more.
pub fn flow_matrix_matches_instance(fm: &FlowMatrix, instance: &Instance) -> bool {
    let expected = instance
        .process_plans
        .iter()
        .flat_map(|plan| {
            plan.transitions()
                .map(move |(from, _)| plan.arrival_rate * instance.operation(from).processing_time)
        })
        .sum::<f64>();

    fm.n_machines() == instance.n_machines()
        && fm.values().iter().all(|f| *f >= 0.0)
        && approx_eq!(f64, fm.total_flow(), expected, epsilon = 1e-9 * expected.max(1.0))
}
