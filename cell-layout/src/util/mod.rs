/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod name_index;

#[doc(inline)]
pub use name_index::NameIndex;
