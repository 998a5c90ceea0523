mod instance;
mod layout;
mod location;
mod machine;
mod operation;
mod process_plan;
mod solution;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use location::Location;

#[doc(inline)]
pub use machine::Machine;

#[doc(inline)]
pub use operation::Operation;

#[doc(inline)]
pub use process_plan::ProcessPlan;

#[doc(inline)]
pub use solution::Solution;
