/// A machine (or any other resource) to be assigned to a location.
/// Machines carry no coordinate of their own, their position follows from the [`Layout`](crate::entities::Layout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Index of the machine in the [`Instance`](crate::entities::Instance), also its row/column in the flow matrix
    pub id: usize,
    pub name: String,
}

impl Machine {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
