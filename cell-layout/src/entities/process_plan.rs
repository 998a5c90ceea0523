use itertools::Itertools;

/// Route of a part type through the cell: an ordered sequence of operations, together with the
/// rate at which parts of this type arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessPlan {
    pub id: usize,
    pub name: String,
    /// Ids of the operations, in processing order
    pub route: Vec<usize>,
    /// Parts per unit of time, strictly positive
    pub arrival_rate: f64,
}

impl ProcessPlan {
    pub fn new(id: usize, name: impl Into<String>, route: Vec<usize>, arrival_rate: f64) -> Self {
        assert!(
            arrival_rate > 0.0 && arrival_rate.is_finite(),
            "arrival rate must be positive and finite"
        );
        Self {
            id,
            name: name.into(),
            route,
            arrival_rate,
        }
    }

    /// Consecutive `(from, to)` operation pairs of the route.
    /// Empty for routes with less than two operations.
    pub fn transitions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.route.iter().copied().tuple_windows()
    }
}
