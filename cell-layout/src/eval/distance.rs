use anyhow::Result;
use itertools::Itertools;
use ndarray::Array2;

use crate::entities::{Instance, Location};
use crate::util::NameIndex;
use crate::util::assertions;

/// Rectilinear distance between every ordered pair of candidate locations.
/// Symmetric, with a zero diagonal. Rows and columns follow the order of the locations.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    locations: NameIndex,
    values: Array2<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix for a standalone set of locations, failing on duplicate names.
    pub fn new(locations: &[Location]) -> Result<Self> {
        let index = NameIndex::try_new(locations.iter().map(|l| &l.name))?;
        Ok(Self::build(locations, index))
    }

    /// Builds the matrix over the canonical location axis of the instance.
    pub fn from_instance(instance: &Instance) -> Self {
        Self::build(&instance.locations, instance.location_index().clone())
    }

    fn build(locations: &[Location], index: NameIndex) -> Self {
        let n = locations.len();
        let mut values = Array2::<f64>::zeros((n, n));
        for (a, b) in (0..n).tuple_combinations() {
            let d = locations[a].pos.manhattan(&locations[b].pos) as f64;
            values[[a, b]] = d;
            values[[b, a]] = d;
        }

        let dm = Self {
            locations: index,
            values,
        };
        debug_assert!(assertions::distance_matrix_is_valid(&dm));
        dm
    }

    /// Distance between locations with ids `from` and `to`
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[[from, to]]
    }

    /// Distance between two locations, by name
    pub fn get_by_name(&self, from: &str, to: &str) -> Option<f64> {
        Some(self.get(self.locations.get(from)?, self.locations.get(to)?))
    }

    pub fn n_locations(&self) -> usize {
        self.locations.len()
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}
