use std::time::Instant;

use anyhow::{Context, Result};
use cell_layout::entities::{Instance, Layout, Solution};
use cell_layout::eval::{CostEvaluator, DistanceMatrix, FlowMatrix, LoadedDistance};
use itertools::Itertools;
use log::info;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thousands::Separable;

use crate::config::PHCConfig;
use crate::opt::initial::initial_layout;
use crate::opt::search::search;

/// Pairwise-swap Hill Climbing (PHC) optimizer.
/// Seeds a layout by ranking machines on their incident flow, then improves it with random swaps.
pub struct PHCOptimizer {
    pub instance: Instance,
    pub flow: FlowMatrix,
    pub distances: DistanceMatrix,
    pub config: PHCConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub eval_counter: usize,
}

/// Outcome of a [`PHCOptimizer`] run
#[derive(Debug, Clone)]
pub struct PHCSolution {
    /// Layout produced by the initial heuristic
    pub initial: Solution,
    /// Best layout found by the local search
    pub improved: Solution,
    /// Number of cost evaluations spent, the initial layout included
    pub n_evaluations: usize,
}

impl PHCOptimizer {
    pub fn new(instance: Instance, config: PHCConfig, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        let flow = FlowMatrix::new(&instance);
        let distances = DistanceMatrix::from_instance(&instance);
        Ok(Self {
            instance,
            flow,
            distances,
            config,
            rng,
            eval_counter: 0,
        })
    }

    pub fn solve(&mut self) -> Result<PHCSolution> {
        let start = Instant::now();
        let evaluator = CostEvaluator::new(&self.flow, &self.distances)?;

        let init_layout = initial_layout(&self.flow)?;
        let init_cost = evaluator.evaluate(&init_layout)?;
        self.eval_counter += 1;
        info!(
            "[PHC] initial layout: {} with total loaded distance {init_cost}",
            init_layout.display(&self.instance)
        );
        let initial = Solution::new(init_layout, init_cost);

        let (layout, cost) = match self.config.n_restarts {
            None => search(
                &evaluator,
                &initial.layout,
                initial.cost,
                self.config.n_iterations,
                &mut self.rng,
                &mut self.eval_counter,
            )?,
            Some(n_restarts) => {
                let (layout, cost, n_evals) = parallel_restarts(
                    &evaluator,
                    &initial.layout,
                    initial.cost,
                    self.config.n_iterations,
                    n_restarts,
                    &mut self.rng,
                )?;
                self.eval_counter += n_evals;
                (layout, cost)
            }
        };
        debug_assert!(cost <= initial.cost);

        info!(
            "[PHC] improved layout: {} with total loaded distance {cost}",
            layout.display(&self.instance)
        );
        info!(
            "[PHC] optimization finished in {:.3}ms ({} evaluations)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.eval_counter.separate_with_commas()
        );

        Ok(PHCSolution {
            initial,
            improved: Solution::new(layout, cost),
            n_evaluations: self.eval_counter,
        })
    }
}

/// Runs `n_restarts` independent searches from the same initial layout, in parallel.
/// Each search gets its own PRNG, seeded in sequence from `rng`, which keeps the outcome reproducible.
/// Returns the best layout (lowest restart index on ties), its cost and the total number of evaluations.
fn parallel_restarts(
    evaluator: &CostEvaluator,
    init: &Layout,
    init_cost: LoadedDistance,
    n_iterations: usize,
    n_restarts: usize,
    rng: &mut impl Rng,
) -> Result<(Layout, LoadedDistance, usize)> {
    let seeds = (0..n_restarts).map(|_| rng.random::<u64>()).collect_vec();

    let results = seeds
        .par_iter()
        .map(|seed| {
            let mut rng = SmallRng::seed_from_u64(*seed);
            let mut eval_counter = 0;
            search(
                evaluator,
                init,
                init_cost,
                n_iterations,
                &mut rng,
                &mut eval_counter,
            )
            .map(|(layout, cost)| (layout, cost, eval_counter))
        })
        .collect::<Result<Vec<_>>>()?;

    let n_evals = results.iter().map(|(_, _, n)| n).sum::<usize>();
    let (best_idx, (layout, cost, _)) = results
        .into_iter()
        .enumerate()
        .min_by_key(|(i, (_, cost, _))| (*cost, *i))
        .context("no restarts to choose from")?;

    info!("[PHC] restart {best_idx} of {n_restarts} produced the best layout");

    Ok((layout, cost, n_evals))
}
