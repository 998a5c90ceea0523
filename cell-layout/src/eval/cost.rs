use anyhow::{Result, bail, ensure};

use crate::entities::Layout;
use crate::eval::{DistanceMatrix, FlowMatrix, LoadedDistance};
use crate::util::assertions;

/// Computes the total loaded distance of layouts:
/// the sum over all machine pairs `(i, j)` of `flow[i][j] × distance[loc(i)][loc(j)]`.
///
/// Machine pairs without flow are filtered out once, upon construction.
#[derive(Debug, Clone)]
pub struct CostEvaluator<'a> {
    distances: &'a DistanceMatrix,
    flows: Vec<(usize, usize, f64)>,
    n_machines: usize,
}

impl<'a> CostEvaluator<'a> {
    pub fn new(flow: &FlowMatrix, distances: &'a DistanceMatrix) -> Result<Self> {
        ensure!(
            distances.n_locations() >= flow.n_machines(),
            "cannot place {} machines on {} locations",
            flow.n_machines(),
            distances.n_locations()
        );
        let flows = flow.nonzero_pairs();
        if let Some((i, j, f)) = flows.iter().find(|(_, _, f)| !f.is_finite()) {
            bail!(
                "flow from {:?} to {:?} is not finite ({f}), arrival rates or processing times are too large",
                flow.machines().name(*i),
                flow.machines().name(*j)
            );
        }
        Ok(Self {
            distances,
            flows,
            n_machines: flow.n_machines(),
        })
    }

    /// Total loaded distance of `layout`.
    /// Fails if the layout does not place exactly the machines of the flow matrix,
    /// or if the total does not fit in an `f64`.
    pub fn evaluate(&self, layout: &Layout) -> Result<LoadedDistance> {
        ensure!(
            layout.len() == self.n_machines,
            "layout places {} machines, the flow matrix has {}",
            layout.len(),
            self.n_machines
        );
        ensure!(
            assertions::layout_is_bijection(layout),
            "layout is not a permutation of the machines: {:?}",
            layout.order()
        );

        let positions = layout.positions();
        let total = self
            .flows
            .iter()
            .map(|&(i, j, f)| f * self.distances.get(positions[i], positions[j]))
            .sum::<f64>();
        ensure!(
            total.is_finite(),
            "total loaded distance of layout {:?} overflows",
            layout.order()
        );

        Ok(LoadedDistance::new(total))
    }

    pub fn n_machines(&self) -> usize {
        self.n_machines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Instance;
    use crate::io::ext_repr::ExtInstance;
    use crate::io::import;
    use itertools::Itertools;

    const TWO_CELL: &str = r#"{
        "name": "two-cell",
        "locations": [{"name": "L0", "x": 0, "y": 0}, {"name": "L1", "x": 1, "y": 0}],
        "machines": ["X", "Y"],
        "process_plans": [{"id": "P", "operations": ["op_a", "op_b"]}],
        "arrival_rates": {"P": 1},
        "machine_operations": {"op_a": "X", "op_b": "Y"},
        "processing_times": {"op_a": 100, "op_b": 50}
    }"#;

    const FOUR_CELL: &str = r#"{
        "name": "four-cell",
        "locations": [
            {"name": "L0", "x": 0, "y": 0}, {"name": "L1", "x": 1, "y": 0},
            {"name": "L2", "x": 0, "y": 1}, {"name": "L3", "x": 1, "y": 1},
            {"name": "L4", "x": 5, "y": 5}
        ],
        "machines": ["A", "B", "C", "D"],
        "process_plans": [
            {"id": "P1", "operations": ["a", "b", "c"]},
            {"id": "P2", "operations": ["d", "b", "a"]},
            {"id": "P3", "operations": ["c"]}
        ],
        "arrival_rates": {"P1": 2, "P2": 3, "P3": 1},
        "machine_operations": {"a": "A", "b": "B", "c": "C", "d": "D"},
        "processing_times": {"a": 10, "b": 20, "c": 30, "d": 40}
    }"#;

    fn load(json: &str) -> Instance {
        let ext: ExtInstance = serde_json::from_str(json).unwrap();
        import(&ext).unwrap()
    }

    #[test]
    fn only_layout_of_two_cell() {
        let instance = load(TWO_CELL);
        let (fm, dm) = (FlowMatrix::new(&instance), DistanceMatrix::from_instance(&instance));
        let evaluator = CostEvaluator::new(&fm, &dm).unwrap();

        let cost = evaluator.evaluate(&Layout::identity(2)).unwrap();
        assert_eq!(cost.value(), 100.0);
        let mirrored = evaluator.evaluate(&Layout::identity(2).swapped(0, 1)).unwrap();
        assert_eq!(mirrored.value(), 100.0);
    }

    #[test]
    fn matches_full_double_loop_for_every_layout() {
        let instance = load(FOUR_CELL);
        let (fm, dm) = (FlowMatrix::new(&instance), DistanceMatrix::from_instance(&instance));
        let evaluator = CostEvaluator::new(&fm, &dm).unwrap();

        for order in (0..4).permutations(4) {
            let layout = Layout::try_new(order, 4).unwrap();
            let positions = layout.positions();
            let mut expected = 0.0;
            for i in 0..4 {
                for j in 0..4 {
                    expected += fm.get(i, j) * dm.get(positions[i], positions[j]);
                }
            }
            let cost = evaluator.evaluate(&layout).unwrap();
            assert!(cost.value() >= 0.0);
            assert_eq!(cost.value(), expected);
            // evaluation is pure
            assert_eq!(cost, evaluator.evaluate(&layout).unwrap());
        }
    }

    #[test]
    fn zero_flow_means_zero_cost() {
        let mut ext: ExtInstance = serde_json::from_str(FOUR_CELL).unwrap();
        ext.process_plans.iter_mut().for_each(|p| p.operations.truncate(1));
        let instance = import(&ext).unwrap();
        let (fm, dm) = (FlowMatrix::new(&instance), DistanceMatrix::from_instance(&instance));
        let evaluator = CostEvaluator::new(&fm, &dm).unwrap();

        for order in (0..4).permutations(4) {
            let cost = evaluator.evaluate(&Layout::try_new(order, 4).unwrap()).unwrap();
            assert_eq!(cost.value(), 0.0);
        }
    }

    #[test]
    fn nonzero_flow_means_positive_cost() {
        let instance = load(FOUR_CELL);
        let (fm, dm) = (FlowMatrix::new(&instance), DistanceMatrix::from_instance(&instance));
        let evaluator = CostEvaluator::new(&fm, &dm).unwrap();
        assert!(!fm.is_zero());
        for order in (0..4).permutations(4) {
            let cost = evaluator.evaluate(&Layout::try_new(order, 4).unwrap()).unwrap();
            assert!(cost.value() > 0.0);
        }
    }

    #[test]
    fn layout_of_wrong_size_is_rejected() {
        let instance = load(FOUR_CELL);
        let (fm, dm) = (FlowMatrix::new(&instance), DistanceMatrix::from_instance(&instance));
        let evaluator = CostEvaluator::new(&fm, &dm).unwrap();
        let err = evaluator.evaluate(&Layout::identity(3)).unwrap_err();
        assert!(err.to_string().contains("places 3 machines"));
    }

    #[test]
    fn infinite_flow_is_rejected() {
        // X -> X self-flow of 1e200 × 1e200, a zero distance on every layout
        let json = r#"{
            "name": "huge",
            "locations": [{"name": "L0", "x": 0, "y": 0}, {"name": "L1", "x": 1, "y": 0}],
            "machines": ["X", "Y"],
            "process_plans": [{"id": "P", "operations": ["a", "b", "c"]}],
            "arrival_rates": {"P": 1e200},
            "machine_operations": {"a": "X", "b": "X", "c": "Y"},
            "processing_times": {"a": 1e200, "b": 1, "c": 1}
        }"#;
        let instance = load(json);
        let (fm, dm) = (FlowMatrix::new(&instance), DistanceMatrix::from_instance(&instance));
        let err = CostEvaluator::new(&fm, &dm).unwrap_err();
        assert!(err.to_string().contains("not finite"), "{err}");
    }

    #[test]
    fn overflowing_total_is_an_error() {
        // finite flow, but flow × distance exceeds f64::MAX
        let json = r#"{
            "name": "far",
            "locations": [{"name": "L0", "x": 0, "y": 0}, {"name": "L1", "x": 1000000000, "y": 0}],
            "machines": ["X", "Y"],
            "process_plans": [{"id": "P", "operations": ["a", "b"]}],
            "arrival_rates": {"P": 1e200},
            "machine_operations": {"a": "X", "b": "Y"},
            "processing_times": {"a": 1e108, "b": 1}
        }"#;
        let instance = load(json);
        let (fm, dm) = (FlowMatrix::new(&instance), DistanceMatrix::from_instance(&instance));
        let evaluator = CostEvaluator::new(&fm, &dm).unwrap();
        let err = evaluator.evaluate(&Layout::identity(2)).unwrap_err();
        assert!(err.to_string().contains("overflows"), "{err}");
    }

    #[test]
    fn too_few_locations() {
        let instance = load(FOUR_CELL);
        let fm = FlowMatrix::new(&instance);
        let dm = DistanceMatrix::new(&instance.locations[..3]).unwrap();
        assert!(CostEvaluator::new(&fm, &dm).is_err());
    }
}
