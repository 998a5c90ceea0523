use std::time::Instant;

use crate::entities::Layout;
use crate::eval::LoadedDistance;

/// A layout together with its cost, frozen at a specific moment.
#[derive(Debug, Clone)]
pub struct Solution {
    pub layout: Layout,
    pub cost: LoadedDistance,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn new(layout: Layout, cost: LoadedDistance) -> Self {
        Self {
            layout,
            cost,
            time_stamp: Instant::now(),
        }
    }
}
