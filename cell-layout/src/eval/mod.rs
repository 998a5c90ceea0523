mod cost;
mod distance;
mod flow;
mod loaded_distance;

#[doc(inline)]
pub use cost::CostEvaluator;

#[doc(inline)]
pub use distance::DistanceMatrix;

#[doc(inline)]
pub use flow::FlowMatrix;

#[doc(inline)]
pub use loaded_distance::LoadedDistance;
