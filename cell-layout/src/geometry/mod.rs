mod grid_point;

#[doc(inline)]
pub use grid_point::GridPoint;
