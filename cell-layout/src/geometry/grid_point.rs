use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Integer coordinate on the grid of candidate locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint(pub i32, pub i32);

impl GridPoint {
    /// Rectilinear (L1) distance between two points.
    /// Each axis spans at most `u32::MAX`, so the sum always fits in a `u64`.
    pub fn manhattan(&self, other: &GridPoint) -> u64 {
        u64::from(self.0.abs_diff(other.0)) + u64::from(self.1.abs_diff(other.1))
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        GridPoint(x, y)
    }
}

impl Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
