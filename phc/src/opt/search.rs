use anyhow::Result;
use cell_layout::entities::Layout;
use cell_layout::eval::{CostEvaluator, LoadedDistance};
use log::{debug, warn};
use rand::Rng;
use rand::seq::index;

/// Improves `init` (of cost `init_cost`) by swapping the machines of two random locations,
/// `n_iterations` times.
///
/// A swap is kept only if it strictly lowers the cost of the best layout found so far,
/// otherwise it is discarded. There is no early exit: the full budget is always spent,
/// and `eval_counter` grows by exactly one per swap.
/// Returns the best layout and its cost, which is never higher than `init_cost`.
pub fn search(
    evaluator: &CostEvaluator,
    init: &Layout,
    init_cost: LoadedDistance,
    n_iterations: usize,
    rng: &mut impl Rng,
    eval_counter: &mut usize,
) -> Result<(Layout, LoadedDistance)> {
    debug_assert!(evaluator.evaluate(init).is_ok_and(|c| c == init_cost));
    let mut best_layout = init.clone();
    let mut best_cost = init_cost;

    let n = best_layout.len();
    if n < 2 {
        warn!("[PHC] layout of {n} machine(s) cannot be improved by swaps, skipping search");
        return Ok((best_layout, best_cost));
    }

    for i in 0..n_iterations {
        let idx = index::sample(rng, n, 2);
        let (a, b) = (idx.index(0), idx.index(1));

        let candidate = best_layout.swapped(a, b);
        let cost = evaluator.evaluate(&candidate)?;
        *eval_counter += 1;

        if cost < best_cost {
            debug!("[PHC: {i}/{n_iterations}] swap ({a}, {b}) improves {best_cost} -> {cost}");
            (best_layout, best_cost) = (candidate, cost);
        }
    }

    Ok((best_layout, best_cost))
}
