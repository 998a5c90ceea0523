use std::fmt::Display;

use ordered_float::NotNan;

/// Cost of a layout: the sum over all machine pairs of flow volume times travelled distance.
/// Totally ordered, lower is better.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord, Hash)]
pub struct LoadedDistance(NotNan<f64>);

impl LoadedDistance {
    pub fn new(value: f64) -> Self {
        debug_assert!(value >= 0.0, "loaded distance is negative: {value}");
        LoadedDistance(NotNan::new(value).expect("loaded distance is NaN"))
    }

    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }
}

impl Display for LoadedDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
