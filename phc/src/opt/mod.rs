/// Greedy seed layout
pub mod initial;
pub mod phc_optimizer;
/// Randomized pairwise-swap hill climbing
pub mod search;

#[doc(inline)]
pub use phc_optimizer::{PHCOptimizer, PHCSolution};
