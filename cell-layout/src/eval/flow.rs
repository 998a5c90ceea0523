use itertools::Itertools;
use ndarray::{Array2, Axis};

use crate::entities::Instance;
use crate::util::NameIndex;
use crate::util::assertions;

/// Directed flow volume between every ordered pair of machines.
///
/// `flow[i][j]` accumulates `arrival_rate × processing_time(source op)` over every pair of
/// consecutive operations, across all process plans, whose first operation runs on machine `i`
/// and whose second operation runs on machine `j`. Rows and columns follow the machine order of the instance.
#[derive(Debug, Clone)]
pub struct FlowMatrix {
    machines: NameIndex,
    values: Array2<f64>,
}

impl FlowMatrix {
    pub fn new(instance: &Instance) -> Self {
        let n = instance.n_machines();
        let mut values = Array2::<f64>::zeros((n, n));

        for plan in &instance.process_plans {
            for (from_op, to_op) in plan.transitions() {
                let from_op = instance.operation(from_op);
                let to_op = instance.operation(to_op);
                values[[from_op.machine, to_op.machine]] +=
                    plan.arrival_rate * from_op.processing_time;
            }
        }

        let fm = Self {
            machines: instance.machine_index().clone(),
            values,
        };
        debug_assert!(assertions::flow_matrix_matches_instance(&fm, instance));
        fm
    }

    /// Flow from machine `from` to machine `to`
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[[from, to]]
    }

    /// Flow between two machines, by name
    pub fn get_by_name(&self, from: &str, to: &str) -> Option<f64> {
        Some(self.get(self.machines.get(from)?, self.machines.get(to)?))
    }

    /// Total outgoing flow of a machine
    pub fn row_sum(&self, machine: usize) -> f64 {
        self.values.row(machine).sum()
    }

    /// Total incoming flow of a machine
    pub fn column_sum(&self, machine: usize) -> f64 {
        self.values.column(machine).sum()
    }

    /// Outgoing plus incoming flow of every machine
    pub fn incident_flows(&self) -> Vec<f64> {
        let out = self.values.sum_axis(Axis(1));
        let inc = self.values.sum_axis(Axis(0));
        (&out + &inc).to_vec()
    }

    pub fn total_flow(&self) -> f64 {
        self.values.sum()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|f| *f == 0.0)
    }

    /// All `(from, to, flow)` triplets with strictly positive flow, in row-major order
    pub fn nonzero_pairs(&self) -> Vec<(usize, usize, f64)> {
        self.values
            .indexed_iter()
            .filter(|(_, f)| **f > 0.0)
            .map(|((i, j), f)| (i, j, *f))
            .collect_vec()
    }

    pub fn n_machines(&self) -> usize {
        self.machines.len()
    }

    pub fn machines(&self) -> &NameIndex {
        &self.machines
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtInstance, ExtLocation, ExtProcessPlan};
    use crate::io::import;
    use std::collections::BTreeMap;

    fn ext_instance(
        machines: &[&str],
        plans: &[(&str, &[&str], f64)],
        ops: &[(&str, &str, f64)],
    ) -> ExtInstance {
        ExtInstance {
            name: "test".into(),
            locations: (0..machines.len())
                .map(|i| ExtLocation {
                    name: format!("L{i}"),
                    x: i as i32,
                    y: 0,
                })
                .collect(),
            machines: machines.iter().map(|m| m.to_string()).collect(),
            process_plans: plans
                .iter()
                .map(|(id, route, _)| ExtProcessPlan {
                    id: id.to_string(),
                    operations: route.iter().map(|o| o.to_string()).collect(),
                })
                .collect(),
            arrival_rates: plans
                .iter()
                .map(|(id, _, rate)| (id.to_string(), *rate))
                .collect::<BTreeMap<_, _>>(),
            machine_operations: ops
                .iter()
                .map(|(op, m, _)| (op.to_string(), m.to_string()))
                .collect(),
            processing_times: ops.iter().map(|(op, _, t)| (op.to_string(), *t)).collect(),
        }
    }

    #[test]
    fn flow_of_a_single_transition() {
        let ext = ext_instance(
            &["X", "Y"],
            &[("P", &["op_a", "op_b"], 5.0)],
            &[("op_a", "X", 10.0), ("op_b", "Y", 7.0)],
        );
        let fm = FlowMatrix::new(&import(&ext).unwrap());
        assert_eq!(fm.get_by_name("X", "Y"), Some(50.0));
        assert_eq!(fm.get_by_name("Y", "X"), Some(0.0));
        assert_eq!(fm.total_flow(), 50.0);
    }

    #[test]
    fn single_operation_plan_contributes_nothing() {
        let ext = ext_instance(&["X", "Y"], &[("P", &["op_a"], 5.0)], &[("op_a", "X", 10.0)]);
        let fm = FlowMatrix::new(&import(&ext).unwrap());
        assert!(fm.is_zero());
        assert!(fm.nonzero_pairs().is_empty());
    }

    #[test]
    fn contributions_accumulate() {
        // X -> Y twice within P, once more from Q
        let ext = ext_instance(
            &["X", "Y"],
            &[
                ("P", &["op_a", "op_b", "op_c", "op_b"], 2.0),
                ("Q", &["op_a", "op_b"], 3.0),
            ],
            &[("op_a", "X", 10.0), ("op_b", "Y", 1.0), ("op_c", "X", 4.0)],
        );
        let fm = FlowMatrix::new(&import(&ext).unwrap());
        // P: a->b 2*10, c->b 2*4 ; Q: a->b 3*10
        assert_eq!(fm.get_by_name("X", "Y"), Some(20.0 + 8.0 + 30.0));
        // P: b->c 2*1
        assert_eq!(fm.get_by_name("Y", "X"), Some(2.0));
    }

    #[test]
    fn self_flow_is_supported() {
        let ext = ext_instance(
            &["X", "Y"],
            &[("P", &["op_a", "op_c"], 1.0)],
            &[("op_a", "X", 6.0), ("op_c", "X", 4.0)],
        );
        let fm = FlowMatrix::new(&import(&ext).unwrap());
        assert_eq!(fm.get_by_name("X", "X"), Some(6.0));
    }

    #[test]
    fn plan_order_does_not_matter() {
        let ops: &[(&str, &str, f64)] = &[
            ("o1", "X", 3.0),
            ("o2", "Y", 5.0),
            ("o3", "Z", 7.0),
            ("o4", "X", 11.0),
        ];
        let plans: [(&str, &[&str], f64); 3] = [
            ("A", &["o1", "o2", "o3"], 2.0),
            ("B", &["o3", "o4", "o2"], 1.5),
            ("C", &["o2", "o1"], 4.0),
        ];
        let forward = FlowMatrix::new(&import(&ext_instance(&["X", "Y", "Z"], &plans, ops)).unwrap());
        for perm in plans.iter().cloned().permutations(plans.len()) {
            let other = FlowMatrix::new(&import(&ext_instance(&["X", "Y", "Z"], &perm, ops)).unwrap());
            assert_eq!(forward.values(), other.values());
        }
    }

    #[test]
    fn incident_flow_is_row_plus_column() {
        let ext = ext_instance(
            &["X", "Y", "Z"],
            &[("P", &["o1", "o2", "o3"], 1.0)],
            &[("o1", "X", 10.0), ("o2", "Y", 20.0), ("o3", "Z", 30.0)],
        );
        let fm = FlowMatrix::new(&import(&ext).unwrap());
        assert_eq!(fm.incident_flows(), vec![10.0, 30.0, 20.0]);
        assert_eq!(fm.row_sum(1) + fm.column_sum(1), 30.0);
    }
}
