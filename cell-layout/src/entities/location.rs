use crate::geometry::GridPoint;

/// Candidate location on the grid, a machine can be assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Index of the location in the [`Instance`](crate::entities::Instance), also its row/column in the distance matrix
    pub id: usize,
    pub name: String,
    pub pos: GridPoint,
}

impl Location {
    pub fn new(id: usize, name: impl Into<String>, pos: GridPoint) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
        }
    }
}
